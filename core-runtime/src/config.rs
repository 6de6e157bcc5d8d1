//! # Source Configuration Module
//!
//! Typed configuration for every streaming source the registry can wire up.
//!
//! ## Overview
//!
//! The host loads one [`SourcesConfig`] at start-up and hands it to the
//! registry read-only. It holds the enabled flags, the per-source credential
//! fields and the mirroring search templates. The document is plain data:
//! deciding which credentials win and turning them into an authentication
//! strategy happens in `core-service`.
//!
//! Credential fields are kept as opaque strings. Blank values (empty or only
//! whitespace) are treated exactly like absent ones, which matches how most
//! hosts render unset configuration keys.
//!
//! ## Usage
//!
//! ### Parsing the host document
//!
//! ```
//! use core_runtime::config::SourcesConfig;
//!
//! let config = SourcesConfig::from_json(r#"{
//!     "sources": { "yandexmusic": true },
//!     "yandexmusic": { "accessToken": "abc" }
//! }"#).expect("valid document");
//!
//! assert!(config.sources.yandex_music);
//! assert_eq!(config.yandex_music.access_token(), Some("abc"));
//! ```
//!
//! ### Programmatic construction
//!
//! ```
//! use core_runtime::config::{SourcesConfig, SpotifyConfig};
//!
//! let config = SourcesConfig::default().with_spotify(
//!     SpotifyConfig::new()
//!         .with_client_credentials("client-id", "client-secret")
//!         .with_country_code("de")
//!         .with_playlist_load_limit(10),
//! );
//!
//! assert!(config.sources.spotify);
//! assert_eq!(config.spotify.country_code().unwrap(), "DE");
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::num::NonZeroU32;

/// Region used when a source has no `countryCode` configured.
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Search templates used for mirroring when the document lists none.
pub const DEFAULT_MIRROR_PROVIDERS: [&str; 2] = ["ytsearch:\"%ISRC%\"", "ytsearch:%QUERY%"];

/// Root configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SourcesConfig {
    /// Search templates used to mirror Spotify and Apple Music tracks
    pub providers: Vec<String>,

    /// Which sources should be registered
    pub sources: EnabledSources,

    pub spotify: SpotifyConfig,

    #[serde(rename = "applemusic", alias = "appleMusic")]
    pub apple_music: AppleMusicConfig,

    pub deezer: DeezerConfig,

    #[serde(rename = "yandexmusic", alias = "yandexMusic")]
    pub yandex_music: YandexMusicConfig,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            providers: DEFAULT_MIRROR_PROVIDERS
                .iter()
                .map(|provider| provider.to_string())
                .collect(),
            sources: EnabledSources::default(),
            spotify: SpotifyConfig::default(),
            apple_music: AppleMusicConfig::default(),
            deezer: DeezerConfig::default(),
            yandex_music: YandexMusicConfig::default(),
        }
    }
}

impl SourcesConfig {
    /// Parse the host's JSON configuration document.
    ///
    /// Missing sections fall back to their defaults; unknown keys are
    /// rejected so that typos surface at start-up instead of silently
    /// disabling a credential.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Parse an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Replace the mirroring search templates.
    pub fn with_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.providers = providers.into_iter().map(Into::into).collect();
        self
    }

    /// Enable Spotify with the given settings.
    pub fn with_spotify(mut self, spotify: SpotifyConfig) -> Self {
        self.sources.spotify = true;
        self.spotify = spotify;
        self
    }

    /// Enable Apple Music with the given settings.
    pub fn with_apple_music(mut self, apple_music: AppleMusicConfig) -> Self {
        self.sources.apple_music = true;
        self.apple_music = apple_music;
        self
    }

    /// Enable Deezer with the given settings.
    pub fn with_deezer(mut self, deezer: DeezerConfig) -> Self {
        self.sources.deezer = true;
        self.deezer = deezer;
        self
    }

    /// Enable Yandex Music with the given settings.
    pub fn with_yandex_music(mut self, yandex_music: YandexMusicConfig) -> Self {
        self.sources.yandex_music = true;
        self.yandex_music = yandex_music;
        self
    }
}

/// Enabled flags, one per source. Everything is off unless switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EnabledSources {
    pub spotify: bool,

    #[serde(rename = "applemusic", alias = "appleMusic")]
    pub apple_music: bool,

    pub deezer: bool,

    #[serde(rename = "yandexmusic", alias = "yandexMusic")]
    pub yandex_music: bool,
}

/// Optional pagination limits as written in the document.
///
/// Limits are counted in pages. Anything that is not strictly positive means
/// "keep the source's built-in default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLimitSettings {
    pub playlist: Option<i32>,
    pub album: Option<i32>,
}

impl PageLimitSettings {
    /// Playlist limit, only when it is usable.
    pub fn playlist(&self) -> Option<NonZeroU32> {
        positive(self.playlist)
    }

    /// Album limit, only when it is usable.
    pub fn album(&self) -> Option<NonZeroU32> {
        positive(self.album)
    }
}

fn positive(value: Option<i32>) -> Option<NonZeroU32> {
    value
        .and_then(|raw| u32::try_from(raw).ok())
        .and_then(NonZeroU32::new)
}

/// Spotify Web API settings (client-credentials grant).
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SpotifyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub country_code: Option<String>,
    pub playlist_load_limit: Option<i32>,
    pub album_load_limit: Option<i32>,
}

impl SpotifyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both halves of the client-credentials pair
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    pub fn with_playlist_load_limit(mut self, limit: i32) -> Self {
        self.playlist_load_limit = Some(limit);
        self
    }

    pub fn with_album_load_limit(mut self, limit: i32) -> Self {
        self.album_load_limit = Some(limit);
        self
    }

    pub fn client_id(&self) -> Option<&str> {
        non_blank(&self.client_id)
    }

    pub fn client_secret(&self) -> Option<&str> {
        non_blank(&self.client_secret)
    }

    /// Normalized market code, `US` when unset.
    pub fn country_code(&self) -> Result<String> {
        normalize_country_code(&self.country_code)
    }

    pub fn page_limits(&self) -> PageLimitSettings {
        PageLimitSettings {
            playlist: self.playlist_load_limit,
            album: self.album_load_limit,
        }
    }

    /// Validates the non-credential settings
    pub fn validate(&self) -> Result<()> {
        self.country_code().map(|_| ())
    }
}

impl fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(&self.client_secret))
            .field("country_code", &self.country_code)
            .field("playlist_load_limit", &self.playlist_load_limit)
            .field("album_load_limit", &self.album_load_limit)
            .finish()
    }
}

/// Apple Music API settings.
///
/// Two credential paths exist: a pre-issued media API token, or a MusicKit
/// private key (`musicKitKey`, a PKCS#8 PEM) together with the key id and team
/// id it was issued for. When the key is present it takes precedence.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AppleMusicConfig {
    pub country_code: Option<String>,

    #[serde(alias = "mediaAPIToken")]
    pub media_api_token: Option<String>,

    pub playlist_load_limit: Option<i32>,
    pub album_load_limit: Option<i32>,

    #[serde(alias = "keyID")]
    pub key_id: Option<String>,

    #[serde(alias = "teamID")]
    pub team_id: Option<String>,

    pub music_kit_key: Option<String>,
}

impl AppleMusicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_media_api_token(mut self, token: impl Into<String>) -> Self {
        self.media_api_token = Some(token.into());
        self
    }

    /// Sets the MusicKit private key together with its key id and team id
    pub fn with_music_kit_key(
        mut self,
        private_key_pem: impl Into<String>,
        key_id: impl Into<String>,
        team_id: impl Into<String>,
    ) -> Self {
        self.music_kit_key = Some(private_key_pem.into());
        self.key_id = Some(key_id.into());
        self.team_id = Some(team_id.into());
        self
    }

    pub fn with_private_key(mut self, private_key_pem: impl Into<String>) -> Self {
        self.music_kit_key = Some(private_key_pem.into());
        self
    }

    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    pub fn with_playlist_load_limit(mut self, limit: i32) -> Self {
        self.playlist_load_limit = Some(limit);
        self
    }

    pub fn with_album_load_limit(mut self, limit: i32) -> Self {
        self.album_load_limit = Some(limit);
        self
    }

    pub fn media_api_token(&self) -> Option<&str> {
        non_blank(&self.media_api_token)
    }

    pub fn music_kit_key(&self) -> Option<&str> {
        non_blank(&self.music_kit_key)
    }

    pub fn key_id(&self) -> Option<&str> {
        non_blank(&self.key_id)
    }

    pub fn team_id(&self) -> Option<&str> {
        non_blank(&self.team_id)
    }

    /// Normalized storefront code, `US` when unset.
    pub fn country_code(&self) -> Result<String> {
        normalize_country_code(&self.country_code)
    }

    pub fn page_limits(&self) -> PageLimitSettings {
        PageLimitSettings {
            playlist: self.playlist_load_limit,
            album: self.album_load_limit,
        }
    }

    /// Validates the non-credential settings
    pub fn validate(&self) -> Result<()> {
        self.country_code().map(|_| ())
    }
}

impl fmt::Debug for AppleMusicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppleMusicConfig")
            .field("country_code", &self.country_code)
            .field("media_api_token", &redacted(&self.media_api_token))
            .field("playlist_load_limit", &self.playlist_load_limit)
            .field("album_load_limit", &self.album_load_limit)
            .field("key_id", &self.key_id)
            .field("team_id", &self.team_id)
            .field("music_kit_key", &redacted(&self.music_kit_key))
            .finish()
    }
}

/// Deezer settings.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DeezerConfig {
    /// Master key used to derive per-track stream keys
    pub master_decryption_key: Option<String>,
}

impl DeezerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_master_decryption_key(mut self, key: impl Into<String>) -> Self {
        self.master_decryption_key = Some(key.into());
        self
    }

    pub fn master_decryption_key(&self) -> Option<&str> {
        non_blank(&self.master_decryption_key)
    }
}

impl fmt::Debug for DeezerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeezerConfig")
            .field(
                "master_decryption_key",
                &redacted(&self.master_decryption_key),
            )
            .finish()
    }
}

/// Yandex Music settings.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct YandexMusicConfig {
    pub access_token: Option<String>,
}

impl YandexMusicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        non_blank(&self.access_token)
    }
}

impl fmt::Debug for YandexMusicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YandexMusicConfig")
            .field("access_token", &redacted(&self.access_token))
            .finish()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn redacted(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "[REDACTED]")
}

fn normalize_country_code(value: &Option<String>) -> Result<String> {
    let Some(code) = non_blank(value) else {
        return Ok(DEFAULT_COUNTRY_CODE.to_string());
    };

    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidField {
            field: "countryCode",
            message: format!(
                "expected a two-letter ISO 3166-1 code, got {:?}",
                code
            ),
        });
    }

    Ok(code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SourcesConfig::default();

        assert_eq!(config.sources, EnabledSources::default());
        assert_eq!(
            config.providers,
            vec!["ytsearch:\"%ISRC%\"".to_string(), "ytsearch:%QUERY%".to_string()]
        );
        assert_eq!(config.spotify.country_code().unwrap(), "US");
    }

    #[test]
    fn test_parse_full_document() {
        let config = SourcesConfig::from_json(
            r#"{
                "providers": ["scsearch:%QUERY%"],
                "sources": { "spotify": true, "applemusic": true, "deezer": false, "yandexmusic": true },
                "spotify": {
                    "clientId": "id",
                    "clientSecret": "secret",
                    "countryCode": "gb",
                    "playlistLoadLimit": 3,
                    "albumLoadLimit": 0
                },
                "applemusic": {
                    "mediaAPIToken": "media",
                    "keyID": "K1",
                    "teamID": "T1",
                    "musicKitKey": "pem"
                },
                "deezer": { "masterDecryptionKey": "" },
                "yandexmusic": { "accessToken": "ya" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.providers, vec!["scsearch:%QUERY%".to_string()]);
        assert!(config.sources.spotify);
        assert!(config.sources.apple_music);
        assert!(!config.sources.deezer);
        assert!(config.sources.yandex_music);

        assert_eq!(config.spotify.client_id(), Some("id"));
        assert_eq!(config.spotify.country_code().unwrap(), "GB");
        assert_eq!(config.spotify.page_limits().playlist.unwrap(), 3);
        assert_eq!(config.spotify.page_limits().album(), None);

        assert_eq!(config.apple_music.media_api_token(), Some("media"));
        assert_eq!(config.apple_music.key_id(), Some("K1"));
        assert_eq!(config.apple_music.team_id(), Some("T1"));
        assert_eq!(config.apple_music.music_kit_key(), Some("pem"));

        assert_eq!(config.deezer.master_decryption_key(), None);
        assert_eq!(config.yandex_music.access_token(), Some("ya"));
    }

    #[test]
    fn test_camel_case_section_aliases() {
        let config = SourcesConfig::from_json(
            r#"{
                "sources": { "appleMusic": true, "yandexMusic": true },
                "appleMusic": { "mediaApiToken": "media", "keyId": "K", "teamId": "T" },
                "yandexMusic": { "accessToken": "ya" }
            }"#,
        )
        .unwrap();

        assert!(config.sources.apple_music);
        assert!(config.sources.yandex_music);
        assert_eq!(config.apple_music.media_api_token(), Some("media"));
        assert_eq!(config.apple_music.key_id(), Some("K"));
        assert_eq!(config.yandex_music.access_token(), Some("ya"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = SourcesConfig::from_json(r#"{ "spotify": { "clientSecert": "typo" } }"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_malformed_document_rejected() {
        let result = SourcesConfig::from_json("{ not json");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_blank_credentials_are_absent() {
        let spotify = SpotifyConfig::new().with_client_credentials("   ", "");
        assert_eq!(spotify.client_id(), None);
        assert_eq!(spotify.client_secret(), None);

        let yandex = YandexMusicConfig::new().with_access_token("  abc \n");
        assert_eq!(yandex.access_token(), Some("abc"));
    }

    #[test]
    fn test_country_code_validation() {
        assert_eq!(
            SpotifyConfig::new().with_country_code("de").country_code().unwrap(),
            "DE"
        );
        assert_eq!(
            AppleMusicConfig::new().with_country_code(" ").country_code().unwrap(),
            DEFAULT_COUNTRY_CODE
        );

        for invalid in ["USA", "1A", "é"] {
            let err = SpotifyConfig::new()
                .with_country_code(invalid)
                .validate()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidField { field: "countryCode", .. }));
        }
    }

    #[test]
    fn test_page_limits_only_positive() {
        let limits = PageLimitSettings {
            playlist: Some(-4),
            album: Some(12),
        };
        assert_eq!(limits.playlist(), None);
        assert_eq!(limits.album().map(NonZeroU32::get), Some(12));

        let unset = PageLimitSettings::default();
        assert_eq!(unset.playlist(), None);
        assert_eq!(unset.album(), None);

        let zero = PageLimitSettings {
            playlist: Some(0),
            album: Some(0),
        };
        assert_eq!(zero.playlist(), None);
        assert_eq!(zero.album(), None);
    }

    #[test]
    fn test_builders_enable_sources() {
        let config = SourcesConfig::default()
            .with_deezer(DeezerConfig::new().with_master_decryption_key("0123456789abcdef"))
            .with_yandex_music(YandexMusicConfig::new().with_access_token("abc"))
            .with_providers(["dzisrc:%ISRC%"]);

        assert!(config.sources.deezer);
        assert!(config.sources.yandex_music);
        assert!(!config.sources.spotify);
        assert!(!config.sources.apple_music);
        assert_eq!(config.providers, vec!["dzisrc:%ISRC%".to_string()]);
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = SourcesConfig::default()
            .with_spotify(SpotifyConfig::new().with_client_credentials("visible-id", "hidden-secret"))
            .with_apple_music(
                AppleMusicConfig::new()
                    .with_media_api_token("hidden-token")
                    .with_music_kit_key("hidden-pem", "K1", "T1"),
            )
            .with_deezer(DeezerConfig::new().with_master_decryption_key("hidden-master"))
            .with_yandex_music(YandexMusicConfig::new().with_access_token("hidden-yandex"));

        let rendered = format!("{:?}", config);
        assert!(rendered.contains("visible-id"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hidden"));
    }
}
