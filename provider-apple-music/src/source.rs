//! Apple Music source implementation

use core_auth::{AuthError, AuthStrategy, IdentitySigner, Result, StaticCredential};
use core_sources::{MirroringResolver, PageLimits, PagedSource, SourceKind, SourceManager};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, instrument};

const WEB_HOST: &str = "music.apple.com/";

/// Apple Music metadata source
#[derive(Debug)]
pub struct AppleMusicSource {
    auth: AuthStrategy,
    country_code: String,
    limits: PageLimits,
    mirroring: Arc<MirroringResolver>,
}

impl AppleMusicSource {
    /// Source authorized by a pre-issued media API token.
    pub fn with_media_api_token(
        token: impl Into<String>,
        country_code: impl Into<String>,
        mirroring: Arc<MirroringResolver>,
    ) -> Self {
        Self::new(
            StaticCredential::BearerToken(token.into()).into(),
            country_code.into(),
            mirroring,
        )
    }

    /// Source authorized by tokens minted from a MusicKit signer.
    pub fn with_signer(
        signer: Arc<dyn IdentitySigner>,
        country_code: impl Into<String>,
        mirroring: Arc<MirroringResolver>,
    ) -> Self {
        Self::new(
            AuthStrategy::DerivedIdentity(signer),
            country_code.into(),
            mirroring,
        )
    }

    fn new(auth: AuthStrategy, country_code: String, mirroring: Arc<MirroringResolver>) -> Self {
        Self {
            auth,
            country_code,
            limits: PageLimits::default(),
            mirroring,
        }
    }

    /// `Authorization` header value for an API request.
    ///
    /// A derived identity mints a fresh developer token on every call; callers
    /// that issue many requests should cache the header until it expires.
    #[instrument(skip(self), fields(strategy = self.auth.name()))]
    pub fn authorization_header(&self) -> Result<String> {
        match &self.auth {
            AuthStrategy::StaticCredential(StaticCredential::BearerToken(token)) => {
                Ok(format!("Bearer {}", token))
            }
            AuthStrategy::DerivedIdentity(signer) => {
                let assertion = signer.mint()?;
                debug!(expires_at = %assertion.expires_at, "Minted Apple Music developer token");
                Ok(format!("Bearer {}", assertion.token))
            }
            AuthStrategy::StaticCredential(other) => Err(AuthError::KeyFormat(format!(
                "{} credential cannot authorize Apple Music requests",
                other.kind()
            ))),
        }
    }
}

impl SourceManager for AppleMusicSource {
    fn kind(&self) -> SourceKind {
        SourceKind::AppleMusic
    }

    fn auth(&self) -> &AuthStrategy {
        &self.auth
    }

    fn country_code(&self) -> Option<&str> {
        Some(&self.country_code)
    }

    fn page_limits(&self) -> Option<PageLimits> {
        Some(self.limits)
    }

    fn mirroring(&self) -> Option<&MirroringResolver> {
        Some(&self.mirroring)
    }

    fn handles(&self, identifier: &str) -> bool {
        identifier.starts_with(SourceKind::AppleMusic.search_prefix())
            || identifier.contains(WEB_HOST)
    }
}

impl PagedSource for AppleMusicSource {
    fn set_playlist_page_limit(&mut self, limit: NonZeroU32) {
        debug!(limit = limit.get(), "Apple Music playlist page limit set");
        self.limits.playlist = limit;
    }

    fn set_album_page_limit(&mut self, limit: NonZeroU32) {
        debug!(limit = limit.get(), "Apple Music album page limit set");
        self.limits.album = limit;
    }
}
