//! Spotify source implementation

use base64::{engine::general_purpose::STANDARD, Engine as _};
use core_auth::{AuthStrategy, StaticCredential};
use core_sources::{MirroringResolver, PageLimits, PagedSource, SourceKind, SourceManager};
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

/// Token endpoint for the client-credentials grant
pub const TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";

const URI_SCHEME: &str = "spotify:";
const WEB_HOST: &str = "open.spotify.com/";
const RECOMMENDATIONS_PREFIX: &str = "sprec:";

/// Spotify metadata source
///
/// Holds the client-credentials pair; exchanging it for an access token is
/// the host HTTP layer's job, using [`SpotifySource::token_request_authorization`].
///
/// # Example
///
/// ```
/// use core_sources::{MirroringResolver, SourceManager};
/// use provider_spotify::SpotifySource;
/// use std::sync::Arc;
///
/// let source = SpotifySource::new("id", "secret", "US", Arc::new(MirroringResolver::default()));
/// assert_eq!(source.source_name(), "spotify");
/// assert_eq!(
///     source.token_request_authorization().as_deref(),
///     Some("Basic aWQ6c2VjcmV0")
/// );
/// ```
pub struct SpotifySource {
    auth: AuthStrategy,
    country_code: String,
    limits: PageLimits,
    mirroring: Arc<MirroringResolver>,
}

impl SpotifySource {
    /// Create a new Spotify source
    ///
    /// # Arguments
    ///
    /// * `client_id` / `client_secret` - application credentials
    /// * `country_code` - normalized market code
    /// * `mirroring` - resolver shared with the other mirroring sources
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        country_code: impl Into<String>,
        mirroring: Arc<MirroringResolver>,
    ) -> Self {
        let auth = AuthStrategy::from(StaticCredential::ClientCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        });

        Self {
            auth,
            country_code: country_code.into(),
            limits: PageLimits::default(),
            mirroring,
        }
    }

    fn client_credentials(&self) -> Option<(&str, &str)> {
        match self.auth.static_credential()? {
            StaticCredential::ClientCredentials {
                client_id,
                client_secret,
            } => Some((client_id.as_str(), client_secret.as_str())),
            _ => None,
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_credentials().map(|(client_id, _)| client_id)
    }

    /// `Authorization` header value for a request to [`TOKEN_ENDPOINT`].
    pub fn token_request_authorization(&self) -> Option<String> {
        let (client_id, client_secret) = self.client_credentials()?;
        let pair = format!("{}:{}", client_id, client_secret);
        Some(format!("Basic {}", STANDARD.encode(pair)))
    }
}

impl SourceManager for SpotifySource {
    fn kind(&self) -> SourceKind {
        SourceKind::Spotify
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
        identifier.starts_with(SourceKind::Spotify.search_prefix())
            || identifier.starts_with(RECOMMENDATIONS_PREFIX)
            || identifier.starts_with(URI_SCHEME)
            || identifier.contains(WEB_HOST)
    }
}

impl PagedSource for SpotifySource {
    fn set_playlist_page_limit(&mut self, limit: NonZeroU32) {
        debug!(limit = limit.get(), "Spotify playlist page limit set");
        self.limits.playlist = limit;
    }

    fn set_album_page_limit(&mut self, limit: NonZeroU32) {
        debug!(limit = limit.get(), "Spotify album page limit set");
        self.limits.album = limit;
    }
}

impl fmt::Debug for SpotifySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifySource")
            .field("auth", &self.auth)
            .field("country_code", &self.country_code)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
