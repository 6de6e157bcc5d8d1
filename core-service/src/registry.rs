//! # Source Registry
//!
//! Registers every enabled source with the host in a fixed order.
//!
//! A load runs in two phases. First every enabled source is built; the first
//! failure aborts the load before the host has seen anything. Only when all
//! sources were built are they handed to the host, in [`SourceKind::ALL`]
//! order. The order of sections in the configuration document never matters.
//!
//! The registry is one-shot: after a load has reached the host it is
//! `Configured` and further loads are refused.

use crate::error::{RegistryError, Result};
use crate::factory::{is_enabled, SourceFactory};
use core_auth::IdentityDeriver;
use core_runtime::config::SourcesConfig;
use core_sources::{MirroringResolver, SourceKind, SourceManager, SourceRegistrar};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Lifecycle of a [`SourceRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryState {
    #[default]
    Unconfigured,
    Configured,
}

/// Enables, builds and registers streaming sources.
///
/// # Example
///
/// ```
/// use core_service::config::{SourcesConfig, YandexMusicConfig};
/// use core_service::{SourceChain, SourceKind, SourceRegistry};
///
/// let config = SourcesConfig::default()
///     .with_yandex_music(YandexMusicConfig::new().with_access_token("abc"));
///
/// let mut chain = SourceChain::new();
/// let registered = SourceRegistry::default().load(&config, &mut chain).unwrap();
///
/// assert_eq!(registered, vec![SourceKind::YandexMusic]);
/// assert_eq!(chain.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SourceRegistry {
    factory: SourceFactory,
    state: RegistryState,
}

impl SourceRegistry {
    pub fn new(deriver: Arc<dyn IdentityDeriver>) -> Self {
        Self {
            factory: SourceFactory::new(deriver),
            state: RegistryState::Unconfigured,
        }
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    pub fn is_configured(&self) -> bool {
        self.state == RegistryState::Configured
    }

    /// Build and register every enabled source.
    ///
    /// Returns the registered kinds in registration order.
    ///
    /// # Errors
    ///
    /// Any build error aborts the load with nothing registered, and the
    /// registry stays `Unconfigured`. A host refusal stops the load at that
    /// source; sources registered before it stay with the host and the
    /// registry is `Configured`.
    #[instrument(skip_all)]
    pub fn load(
        &mut self,
        config: &SourcesConfig,
        registrar: &mut dyn SourceRegistrar,
    ) -> Result<Vec<SourceKind>> {
        if self.is_configured() {
            return Err(RegistryError::AlreadyConfigured);
        }

        let sources = self.build_enabled(config).map_err(|err| {
            error!(error = %err, "Source configuration rejected, nothing registered");
            err
        })?;

        self.state = RegistryState::Configured;

        let mut registered = Vec::with_capacity(sources.len());
        for source in sources {
            let kind = source.kind();
            info!("Registering {} source manager...", kind.display_name());
            registrar
                .register_source(source)
                .map_err(|source| RegistryError::Registration { kind, source })?;
            registered.push(kind);
        }

        info!(count = registered.len(), "Source registration complete");
        Ok(registered)
    }

    /// Parse the host's JSON document and [`load`](Self::load) it.
    pub fn load_json(
        &mut self,
        document: &str,
        registrar: &mut dyn SourceRegistrar,
    ) -> Result<Vec<SourceKind>> {
        let config = SourcesConfig::from_json(document)?;
        self.load(&config, registrar)
    }

    fn build_enabled(&self, config: &SourcesConfig) -> Result<Vec<Box<dyn SourceManager>>> {
        let enabled: Vec<SourceKind> = SourceKind::ALL
            .into_iter()
            .filter(|kind| is_enabled(*kind, &config.sources))
            .collect();

        let mirroring = Arc::new(if enabled.iter().any(SourceKind::is_mirroring) {
            MirroringResolver::new(config.providers.iter().map(String::as_str))
        } else {
            MirroringResolver::default()
        });

        enabled
            .into_iter()
            .map(|kind| self.factory.build(kind, config, &mirroring))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::BridgeError;
    use core_runtime::config::{DeezerConfig, SpotifyConfig, YandexMusicConfig};
    use core_sources::SourceChain;
    use mockall::mock;

    mock! {
        Registrar {}

        impl SourceRegistrar for Registrar {
            fn register_source(
                &mut self,
                source: Box<dyn SourceManager>,
            ) -> bridge_traits::error::Result<()>;
        }
    }

    fn three_sources() -> SourcesConfig {
        SourcesConfig::default()
            .with_yandex_music(YandexMusicConfig::new().with_access_token("abc"))
            .with_deezer(DeezerConfig::new().with_master_decryption_key("0123456789abcdef"))
            .with_spotify(SpotifyConfig::new().with_client_credentials("id", "secret"))
    }

    #[test]
    fn test_registration_follows_kind_order() {
        let mut chain = SourceChain::new();
        let registered = SourceRegistry::default()
            .load(&three_sources(), &mut chain)
            .unwrap();

        let expected = vec![
            SourceKind::Spotify,
            SourceKind::Deezer,
            SourceKind::YandexMusic,
        ];
        assert_eq!(registered, expected);
        assert_eq!(chain.kinds(), expected);
    }

    #[test]
    fn test_nothing_enabled_registers_nothing() {
        let mut registrar = MockRegistrar::new();
        registrar.expect_register_source().never();

        let mut registry = SourceRegistry::default();
        let registered = registry.load(&SourcesConfig::default(), &mut registrar).unwrap();
        assert!(registered.is_empty());
        assert!(registry.is_configured());
    }

    #[test]
    fn test_second_load_rejected() {
        let mut chain = SourceChain::new();
        let mut registry = SourceRegistry::default();
        registry.load(&three_sources(), &mut chain).unwrap();

        let result = registry.load(&three_sources(), &mut chain);
        assert!(matches!(result, Err(RegistryError::AlreadyConfigured)));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_build_failure_keeps_registry_unconfigured() {
        let mut config = three_sources();
        config.sources.apple_music = true;

        let mut registrar = MockRegistrar::new();
        registrar.expect_register_source().never();

        let mut registry = SourceRegistry::default();
        let result = registry.load(&config, &mut registrar);
        assert!(matches!(
            result,
            Err(RegistryError::MissingCredential {
                kind: SourceKind::AppleMusic,
                ..
            })
        ));
        assert_eq!(registry.state(), RegistryState::Unconfigured);
    }

    #[test]
    fn test_host_refusal_stops_registration() {
        let mut registrar = MockRegistrar::new();
        let mut calls = 0;
        registrar
            .expect_register_source()
            .times(2)
            .returning(move |source| {
                calls += 1;
                if calls == 2 {
                    assert_eq!(source.kind(), SourceKind::Deezer);
                    Err(BridgeError::OperationFailed("chain is frozen".to_string()))
                } else {
                    Ok(())
                }
            });

        let mut registry = SourceRegistry::default();
        let result = registry.load(&three_sources(), &mut registrar);
        match result {
            Err(RegistryError::Registration { kind, source }) => {
                assert_eq!(kind, SourceKind::Deezer);
                assert!(matches!(source, BridgeError::OperationFailed(_)));
            }
            other => panic!("expected registration error, got {:?}", other),
        }
        assert!(registry.is_configured());
    }

    #[test]
    fn test_load_json() {
        let mut chain = SourceChain::new();
        let registered = SourceRegistry::default()
            .load_json(
                r#"{
                    "sources": { "deezer": true },
                    "deezer": { "masterDecryptionKey": "0123456789abcdef" }
                }"#,
                &mut chain,
            )
            .unwrap();
        assert_eq!(registered, vec![SourceKind::Deezer]);
    }

    #[test]
    fn test_load_json_rejects_malformed_document() {
        let mut chain = SourceChain::new();
        let mut registry = SourceRegistry::default();
        let result = registry.load_json(r#"{ "sources": { "tidal": true } }"#, &mut chain);
        assert!(matches!(result, Err(RegistryError::Config(_))));
        assert!(!registry.is_configured());
    }

    #[test]
    fn test_mirroring_sources_share_resolver_templates() {
        let config = three_sources().with_providers(["spsearch:%QUERY%", "scsearch:%QUERY%"]);
        let mut chain = SourceChain::new();
        SourceRegistry::default().load(&config, &mut chain).unwrap();

        let spotify = chain.get(SourceKind::Spotify).unwrap();
        assert_eq!(
            spotify.mirroring().unwrap().providers(),
            &["scsearch:%QUERY%".to_string()]
        );
    }
}
