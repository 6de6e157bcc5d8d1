//! Capability contract every registered source satisfies.

use crate::kind::SourceKind;
use crate::mirror::MirroringResolver;
use core_auth::AuthStrategy;
use std::fmt;
use std::num::NonZeroU32;

/// Built-in pagination limit, in pages, for playlists and albums.
pub const DEFAULT_PAGE_LIMIT: NonZeroU32 = match NonZeroU32::new(6) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// How many pages a source walks when loading a playlist or an album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub playlist: NonZeroU32,
    pub album: NonZeroU32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            playlist: DEFAULT_PAGE_LIMIT,
            album: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// A constructed streaming source as seen by the host.
///
/// Once a source is boxed behind this trait it is immutable: nothing here can
/// change its credentials or limits. The host keeps it for the rest of the
/// process lifetime.
pub trait SourceManager: Send + Sync + fmt::Debug {
    fn kind(&self) -> SourceKind;

    /// Stable tag the host dispatches on.
    fn source_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// The authentication strategy chosen at construction.
    fn auth(&self) -> &AuthStrategy;

    /// Region the source queries, for sources that are region-aware.
    fn country_code(&self) -> Option<&str> {
        None
    }

    /// Pagination limits, for sources that page through playlists and albums.
    fn page_limits(&self) -> Option<PageLimits> {
        None
    }

    /// Resolver used to find playable mirrors, for mirroring sources.
    fn mirroring(&self) -> Option<&MirroringResolver> {
        None
    }

    /// Whether a load identifier is routed to this source.
    fn handles(&self, identifier: &str) -> bool {
        identifier.starts_with(self.kind().search_prefix())
    }
}

/// Construction-time pagination setters.
///
/// Only concrete source types implement this; the registry applies
/// configured limits before handing the source over.
pub trait PagedSource {
    fn set_playlist_page_limit(&mut self, limit: NonZeroU32);

    fn set_album_page_limit(&mut self, limit: NonZeroU32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_auth::StaticCredential;

    #[derive(Debug)]
    struct PlainSource {
        auth: AuthStrategy,
    }

    impl SourceManager for PlainSource {
        fn kind(&self) -> SourceKind {
            SourceKind::Deezer
        }

        fn auth(&self) -> &AuthStrategy {
            &self.auth
        }
    }

    #[test]
    fn test_default_page_limits() {
        let limits = PageLimits::default();
        assert_eq!(limits.playlist.get(), 6);
        assert_eq!(limits.album.get(), 6);
    }

    #[test]
    fn test_contract_defaults() {
        let source = PlainSource {
            auth: StaticCredential::SymmetricKey("key".to_string()).into(),
        };

        assert_eq!(source.source_name(), "deezer");
        assert_eq!(source.country_code(), None);
        assert_eq!(source.page_limits(), None);
        assert!(source.mirroring().is_none());
        assert!(source.handles("dzsearch:daft punk"));
        assert!(!source.handles("spsearch:daft punk"));
    }
}
