//! # Source Contract
//!
//! Shared vocabulary between the registry, the concrete source crates and the
//! host playback engine.
//!
//! ## Overview
//!
//! - [`SourceKind`] - the closed set of streaming services, in registration order
//! - [`SourceManager`] - what the host sees once a source is registered
//! - [`PagedSource`] - construction-time pagination setters
//! - [`SourceRegistrar`] - the host's single `register_source` operation
//! - [`SourceChain`] - an ordered in-memory chain implementing the registrar
//! - [`MirroringResolver`] - expands search templates for mirrored tracks

pub mod chain;
pub mod kind;
pub mod mirror;
pub mod source;

pub use chain::{SourceChain, SourceRegistrar};
pub use kind::SourceKind;
pub use mirror::{MirroringResolver, TrackIdentity, ISRC_PATTERN, QUERY_PATTERN};
pub use source::{PageLimits, PagedSource, SourceManager, DEFAULT_PAGE_LIMIT};
