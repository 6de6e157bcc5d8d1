//! Host registration surface.

use crate::kind::SourceKind;
use crate::source::SourceManager;
use bridge_traits::error::{BridgeError, Result};
use tracing::debug;

/// The host's registration operation.
///
/// Ownership of the source moves to the host. Return value and failure
/// semantics belong to the host implementation.
pub trait SourceRegistrar {
    fn register_source(&mut self, source: Box<dyn SourceManager>) -> Result<()>;
}

/// Ordered chain of registered sources.
///
/// Lookup walks the chain in registration order, so the first source that
/// handles an identifier wins. A second source of an already registered kind
/// is rejected.
#[derive(Debug, Default)]
pub struct SourceChain {
    sources: Vec<Box<dyn SourceManager>>,
}

impl SourceChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Kinds in registration order.
    pub fn kinds(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|source| source.kind()).collect()
    }

    pub fn get(&self, kind: SourceKind) -> Option<&dyn SourceManager> {
        self.sources
            .iter()
            .find(|source| source.kind() == kind)
            .map(|source| source.as_ref())
    }

    /// First source, in chain order, that handles the identifier.
    pub fn resolve(&self, identifier: &str) -> Option<&dyn SourceManager> {
        self.sources
            .iter()
            .find(|source| source.handles(identifier))
            .map(|source| source.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SourceManager> {
        self.sources.iter().map(|source| source.as_ref())
    }
}

impl SourceRegistrar for SourceChain {
    fn register_source(&mut self, source: Box<dyn SourceManager>) -> Result<()> {
        let kind = source.kind();
        if self.get(kind).is_some() {
            return Err(BridgeError::Duplicate(format!(
                "{} source is already registered",
                kind
            )));
        }

        debug!(source = kind.as_str(), position = self.sources.len(), "Source added to chain");
        self.sources.push(source);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_auth::{AuthStrategy, StaticCredential};

    #[derive(Debug)]
    struct TokenSource {
        kind: SourceKind,
        auth: AuthStrategy,
    }

    impl TokenSource {
        fn boxed(kind: SourceKind) -> Box<dyn SourceManager> {
            Box::new(Self {
                kind,
                auth: StaticCredential::BearerToken("token".to_string()).into(),
            })
        }
    }

    impl SourceManager for TokenSource {
        fn kind(&self) -> SourceKind {
            self.kind
        }

        fn auth(&self) -> &AuthStrategy {
            &self.auth
        }
    }

    #[test]
    fn test_register_keeps_order() {
        let mut chain = SourceChain::new();
        chain.register_source(TokenSource::boxed(SourceKind::YandexMusic)).unwrap();
        chain.register_source(TokenSource::boxed(SourceKind::Spotify)).unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.kinds(),
            vec![SourceKind::YandexMusic, SourceKind::Spotify]
        );
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let mut chain = SourceChain::new();
        chain.register_source(TokenSource::boxed(SourceKind::Deezer)).unwrap();

        let result = chain.register_source(TokenSource::boxed(SourceKind::Deezer));
        assert!(matches!(result, Err(BridgeError::Duplicate(_))));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_resolve_by_prefix() {
        let mut chain = SourceChain::new();
        chain.register_source(TokenSource::boxed(SourceKind::Spotify)).unwrap();
        chain.register_source(TokenSource::boxed(SourceKind::YandexMusic)).unwrap();

        let source = chain.resolve("ymsearch:kino").unwrap();
        assert_eq!(source.kind(), SourceKind::YandexMusic);
        assert!(chain.resolve("dzsearch:kino").is_none());
        assert!(chain.get(SourceKind::Spotify).is_some());
        assert!(chain.get(SourceKind::AppleMusic).is_none());
    }

    #[test]
    fn test_empty_chain() {
        let chain = SourceChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.iter().count(), 0);
    }
}
