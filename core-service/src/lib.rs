//! # Source Registry Service
//!
//! Facade the host calls once at start-up to wire streaming sources into its
//! lookup chain.
//!
//! ## Overview
//!
//! - [`SourceRegistry`] - one-shot, two-phase load of every enabled source
//! - [`SourceFactory`] - per-kind construction and credential selection
//! - [`RegistryError`] - why a load was aborted, naming source and field
//!
//! ## Usage
//!
//! ```no_run
//! use core_service::config::SourcesConfig;
//! use core_service::logging::{init_logging, LoggingConfig};
//! use core_service::{SourceChain, SourceRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! init_logging(LoggingConfig::default())?;
//!
//! let config = SourcesConfig::from_json(&std::fs::read_to_string("sources.json")?)?;
//! let mut chain = SourceChain::new();
//! let registered = SourceRegistry::default().load(&config, &mut chain)?;
//! println!("registered {:?}", registered);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod factory;
pub mod registry;

pub use error::{RegistryError, Result};
pub use factory::{apply_page_limits, is_enabled, SourceFactory};
pub use registry::{RegistryState, SourceRegistry};

pub use core_runtime::{config, logging};
pub use core_sources::{
    MirroringResolver, PageLimits, PagedSource, SourceChain, SourceKind, SourceManager,
    SourceRegistrar, TrackIdentity,
};
