use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported streaming sources.
///
/// The declaration order is the registration order, and therefore the lookup
/// precedence inside the host chain.
///
/// # Examples
///
/// ```
/// use core_sources::SourceKind;
///
/// assert_eq!(SourceKind::ALL[0], SourceKind::Spotify);
/// assert_eq!(SourceKind::AppleMusic.display_name(), "Apple Music");
/// assert_eq!(SourceKind::parse("yandexmusic"), Some(SourceKind::YandexMusic));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Spotify Web API (client credentials)
    Spotify,
    /// Apple Music API (media API token or MusicKit key)
    AppleMusic,
    /// Deezer (master decryption key)
    Deezer,
    /// Yandex Music (OAuth access token)
    YandexMusic,
}

impl SourceKind {
    /// Every kind, in registration order.
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Spotify,
        SourceKind::AppleMusic,
        SourceKind::Deezer,
        SourceKind::YandexMusic,
    ];

    /// Get the human-readable display name for this source
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::Spotify => "Spotify",
            SourceKind::AppleMusic => "Apple Music",
            SourceKind::Deezer => "Deezer",
            SourceKind::YandexMusic => "Yandex Music",
        }
    }

    /// Stable tag used by the host for dispatch and by the configuration
    /// document for section names.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Spotify => "spotify",
            SourceKind::AppleMusic => "applemusic",
            SourceKind::Deezer => "deezer",
            SourceKind::YandexMusic => "yandexmusic",
        }
    }

    /// Identifier prefix routing a search to this source.
    pub fn search_prefix(&self) -> &'static str {
        match self {
            SourceKind::Spotify => "spsearch:",
            SourceKind::AppleMusic => "amsearch:",
            SourceKind::Deezer => "dzsearch:",
            SourceKind::YandexMusic => "ymsearch:",
        }
    }

    /// Whether the source resolves audio by searching other sources.
    pub fn is_mirroring(&self) -> bool {
        matches!(self, SourceKind::Spotify | SourceKind::AppleMusic)
    }

    /// Parse a source kind from its tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spotify" => Some(SourceKind::Spotify),
            "applemusic" | "apple_music" => Some(SourceKind::AppleMusic),
            "deezer" => Some(SourceKind::Deezer),
            "yandexmusic" | "yandex_music" => Some(SourceKind::YandexMusic),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
