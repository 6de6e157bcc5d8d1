//! # Source Factory
//!
//! Turns one source's configuration into a ready source instance.
//!
//! For every kind the factory picks the authentication strategy, validates the
//! region, and applies pagination limits through the concrete type's
//! [`PagedSource`] setters before the instance is boxed. Nothing here touches
//! the network; the only expensive step is parsing a MusicKit private key.
//!
//! ## Credential selection
//!
//! | Source      | Credential                                    | Strategy                         |
//! |-------------|-----------------------------------------------|----------------------------------|
//! | Spotify     | `clientId` + `clientSecret`                   | `ClientCredentials`              |
//! | Apple Music | `musicKitKey` + `keyId` + `teamId`            | `DerivedIdentity`                |
//! | Apple Music | `mediaApiToken`                               | `BearerToken`                    |
//! | Deezer      | `masterDecryptionKey` (16 bytes)              | `SymmetricKey`                   |
//! | Yandex      | `accessToken`                                 | `BearerToken`                    |
//!
//! A MusicKit key wins over a media API token. When the key is present both
//! identifiers are required; a missing one is a configuration error and the
//! key is never parsed.

use crate::error::{RegistryError, Result};
use core_auth::{AuthError, IdentityDeriver, MusicKitDeriver};
use core_runtime::config::{
    AppleMusicConfig, DeezerConfig, EnabledSources, PageLimitSettings, SourcesConfig,
    SpotifyConfig, YandexMusicConfig,
};
use core_sources::{MirroringResolver, PagedSource, SourceKind, SourceManager};
use provider_apple_music::AppleMusicSource;
use provider_deezer::{DeezerSource, MasterDecryptionKey};
use provider_spotify::SpotifySource;
use provider_yandex_music::YandexMusicSource;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Builds source instances from configuration.
#[derive(Clone)]
pub struct SourceFactory {
    deriver: Arc<dyn IdentityDeriver>,
}

impl SourceFactory {
    pub fn new(deriver: Arc<dyn IdentityDeriver>) -> Self {
        Self { deriver }
    }

    /// Build the source for `kind`.
    ///
    /// The enabled flag is not consulted here; see [`is_enabled`].
    #[instrument(skip_all, fields(source = kind.as_str()))]
    pub fn build(
        &self,
        kind: SourceKind,
        config: &SourcesConfig,
        mirroring: &Arc<MirroringResolver>,
    ) -> Result<Box<dyn SourceManager>> {
        let source: Box<dyn SourceManager> = match kind {
            SourceKind::Spotify => Box::new(self.build_spotify(&config.spotify, mirroring)?),
            SourceKind::AppleMusic => {
                Box::new(self.build_apple_music(&config.apple_music, mirroring)?)
            }
            SourceKind::Deezer => Box::new(self.build_deezer(&config.deezer)?),
            SourceKind::YandexMusic => Box::new(self.build_yandex_music(&config.yandex_music)?),
        };

        debug!(strategy = source.auth().name(), "Source built");
        Ok(source)
    }

    pub fn build_spotify(
        &self,
        config: &SpotifyConfig,
        mirroring: &Arc<MirroringResolver>,
    ) -> Result<SpotifySource> {
        let kind = SourceKind::Spotify;
        let (client_id, client_secret) = match (config.client_id(), config.client_secret()) {
            (Some(client_id), Some(client_secret)) => (client_id, client_secret),
            (Some(_), None) => {
                return Err(required_with(kind, "clientSecret", "clientId"));
            }
            (None, Some(_)) => {
                return Err(required_with(kind, "clientId", "clientSecret"));
            }
            (None, None) => {
                return Err(RegistryError::MissingCredential {
                    kind,
                    expected: "clientId and clientSecret",
                });
            }
        };
        let country_code = config
            .country_code()
            .map_err(|err| invalid_field(kind, err))?;

        let mut source = SpotifySource::new(
            client_id,
            client_secret,
            country_code,
            Arc::clone(mirroring),
        );
        apply_page_limits(&mut source, &config.page_limits());
        Ok(source)
    }

    pub fn build_apple_music(
        &self,
        config: &AppleMusicConfig,
        mirroring: &Arc<MirroringResolver>,
    ) -> Result<AppleMusicSource> {
        let kind = SourceKind::AppleMusic;
        let country_code = config
            .country_code()
            .map_err(|err| invalid_field(kind, err))?;

        let mut source = if let Some(private_key) = config.music_kit_key() {
            let team_id = config
                .team_id()
                .ok_or_else(|| required_with(kind, "teamId", "musicKitKey"))?;
            let key_id = config
                .key_id()
                .ok_or_else(|| required_with(kind, "keyId", "musicKitKey"))?;

            debug!(key_id, team_id, "Deriving MusicKit identity");
            let signer = self
                .deriver
                .derive(private_key, key_id, team_id)
                .map_err(|err| identity_error(kind, err))?;
            AppleMusicSource::with_signer(signer, country_code, Arc::clone(mirroring))
        } else if let Some(token) = config.media_api_token() {
            AppleMusicSource::with_media_api_token(token, country_code, Arc::clone(mirroring))
        } else {
            return Err(RegistryError::MissingCredential {
                kind,
                expected: "mediaApiToken or musicKitKey",
            });
        };

        apply_page_limits(&mut source, &config.page_limits());
        Ok(source)
    }

    pub fn build_deezer(&self, config: &DeezerConfig) -> Result<DeezerSource> {
        let kind = SourceKind::Deezer;
        let raw = config
            .master_decryption_key()
            .ok_or(RegistryError::MissingCredential {
                kind,
                expected: "masterDecryptionKey",
            })?;
        let master_key = MasterDecryptionKey::parse(raw).map_err(|err| RegistryError::KeyFormat {
            kind,
            field: "masterDecryptionKey",
            reason: err.to_string(),
        })?;

        Ok(DeezerSource::new(master_key))
    }

    pub fn build_yandex_music(&self, config: &YandexMusicConfig) -> Result<YandexMusicSource> {
        let token = config
            .access_token()
            .ok_or(RegistryError::MissingCredential {
                kind: SourceKind::YandexMusic,
                expected: "accessToken",
            })?;

        Ok(YandexMusicSource::new(token))
    }
}

impl Default for SourceFactory {
    fn default() -> Self {
        Self::new(Arc::new(MusicKitDeriver::default()))
    }
}

impl fmt::Debug for SourceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFactory").finish_non_exhaustive()
    }
}

/// Whether the document switches `kind` on.
pub fn is_enabled(kind: SourceKind, sources: &EnabledSources) -> bool {
    match kind {
        SourceKind::Spotify => sources.spotify,
        SourceKind::AppleMusic => sources.apple_music,
        SourceKind::Deezer => sources.deezer,
        SourceKind::YandexMusic => sources.yandex_music,
    }
}

/// Invoke the pagination setters for strictly positive limits only.
pub fn apply_page_limits<S: PagedSource + ?Sized>(source: &mut S, limits: &PageLimitSettings) {
    if let Some(limit) = limits.playlist() {
        source.set_playlist_page_limit(limit);
    }
    if let Some(limit) = limits.album() {
        source.set_album_page_limit(limit);
    }
}

fn required_with(kind: SourceKind, field: &'static str, dependent: &str) -> RegistryError {
    RegistryError::Configuration {
        kind,
        field,
        message: format!("required when `{}` is set", dependent),
    }
}

fn invalid_field(kind: SourceKind, err: core_runtime::Error) -> RegistryError {
    match err {
        core_runtime::Error::InvalidField { field, message } => RegistryError::Configuration {
            kind,
            field,
            message,
        },
        other => RegistryError::Config(other),
    }
}

fn identity_error(kind: SourceKind, err: AuthError) -> RegistryError {
    match err {
        AuthError::MissingField { field } => required_with(kind, field, "musicKitKey"),
        AuthError::KeyFormat(reason) | AuthError::SigningFailed(reason) => {
            RegistryError::KeyFormat {
                kind,
                field: "musicKitKey",
                reason,
            }
        }
    }
}
