//! # Host Bridge Traits
//!
//! Abstractions the host playback engine hands to the source registry.
//!
//! ## Overview
//!
//! The registry never talks to the outside world on its own. Anything it needs
//! from the host (a time source, a place to mirror log events) is expressed as
//! a trait here so tests can substitute deterministic implementations.
//!
//! ## Traits
//!
//! - [`Clock`](time::Clock) - Time source used when minting signed identities
//! - [`LoggerSink`](time::LoggerSink) - Forward structured logs to host logging
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Host
//! implementations should convert their own failures into it with an
//! actionable message.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so the host can share them after
//! start-up.

pub mod error;
pub mod time;

pub use error::BridgeError;

pub use time::{Clock, ConsoleLogger, FixedClock, LogEntry, LogLevel, LoggerSink, SystemClock};
