//! Yandex Music source implementation

use core_auth::{AuthStrategy, StaticCredential};
use core_sources::{SourceKind, SourceManager};
use std::fmt;

const WEB_HOST: &str = "music.yandex.";

/// Yandex Music metadata source
pub struct YandexMusicSource {
    auth: AuthStrategy,
}

impl YandexMusicSource {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            auth: StaticCredential::BearerToken(access_token.into()).into(),
        }
    }

    /// `Authorization` header value for an API request.
    pub fn authorization_header(&self) -> Option<String> {
        match self.auth.static_credential()? {
            StaticCredential::BearerToken(token) => Some(format!("OAuth {}", token)),
            _ => None,
        }
    }
}

impl SourceManager for YandexMusicSource {
    fn kind(&self) -> SourceKind {
        SourceKind::YandexMusic
    }

    fn auth(&self) -> &AuthStrategy {
        &self.auth
    }

    fn handles(&self, identifier: &str) -> bool {
        identifier.starts_with(SourceKind::YandexMusic.search_prefix())
            || identifier.contains(WEB_HOST)
    }
}

impl fmt::Debug for YandexMusicSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YandexMusicSource")
            .field("auth", &self.auth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_strategy() {
        let source = YandexMusicSource::new("y0_token");
        assert_eq!(
            source.auth().static_credential(),
            Some(&StaticCredential::BearerToken("y0_token".to_string()))
        );
        assert_eq!(source.source_name(), "yandexmusic");
        assert_eq!(source.page_limits(), None);
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(
            YandexMusicSource::new("y0_token").authorization_header().as_deref(),
            Some("OAuth y0_token")
        );
    }

    #[test]
    fn test_handles_identifiers() {
        let source = YandexMusicSource::new("y0_token");
        assert!(source.handles("ymsearch:kino"));
        assert!(source.handles("https://music.yandex.ru/album/3490/track/35627"));
        assert!(!source.handles("dzsearch:kino"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", YandexMusicSource::new("y0_token"));
        assert!(!debug.contains("y0_token"));
        assert!(debug.contains("BearerToken([REDACTED])"));
    }
}
