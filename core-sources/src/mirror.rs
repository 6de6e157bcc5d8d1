//! Mirror query expansion for sources that do not stream audio themselves.

use crate::kind::SourceKind;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Placeholder replaced by the track ISRC, dashes removed.
pub const ISRC_PATTERN: &str = "%ISRC%";

/// Placeholder replaced by `"<title> <author>"`.
pub const QUERY_PATTERN: &str = "%QUERY%";

/// Metadata a mirror search is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackIdentity {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isrc: Option<String>,
}

impl TrackIdentity {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isrc: None,
        }
    }

    pub fn with_isrc(mut self, isrc: impl Into<String>) -> Self {
        self.isrc = Some(isrc.into());
        self
    }
}

/// Expands the configured provider templates into search identifiers.
///
/// # Examples
///
/// ```
/// use core_sources::{MirroringResolver, TrackIdentity};
///
/// let resolver = MirroringResolver::new(["ytsearch:\"%ISRC%\"", "ytsearch:%QUERY%"]);
/// let track = TrackIdentity::new("One More Time", "Daft Punk").with_isrc("GB-DUW-0000059");
///
/// assert_eq!(
///     resolver.queries(&track),
///     vec![
///         "ytsearch:\"GBDUW0000059\"".to_string(),
///         "ytsearch:One More Time Daft Punk".to_string(),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirroringResolver {
    providers: Vec<String>,
}

impl MirroringResolver {
    /// Build a resolver, discarding templates that would search a mirroring
    /// source and loop back.
    pub fn new<I, S>(providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let providers = providers
            .into_iter()
            .map(Into::<String>::into)
            .filter(|template| {
                let looping = SourceKind::ALL
                    .iter()
                    .filter(|kind| kind.is_mirroring())
                    .any(|kind| template.starts_with(kind.search_prefix()));
                if looping {
                    warn!(
                        provider = template.as_str(),
                        "Mirror provider searches a mirroring source, ignoring it"
                    );
                }
                !looping
            })
            .collect();

        Self { providers }
    }

    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    /// Search identifiers for `track`, in provider order.
    pub fn queries(&self, track: &TrackIdentity) -> Vec<String> {
        let isrc = track
            .isrc
            .as_deref()
            .map(|isrc| isrc.replace('-', ""))
            .filter(|isrc| !isrc.trim().is_empty());
        let query = format!("{} {}", track.title, track.author);

        self.providers
            .iter()
            .filter_map(|template| {
                let expanded = if template.contains(ISRC_PATTERN) {
                    template.replace(ISRC_PATTERN, isrc.as_deref()?)
                } else {
                    template.clone()
                };
                Some(expanded.replace(QUERY_PATTERN, &query))
            })
            .collect()
    }
}
