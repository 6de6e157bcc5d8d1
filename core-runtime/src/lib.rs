//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the source registry:
//! - Logging and tracing infrastructure
//! - Typed configuration for every streaming source
//!
//! ## Overview
//!
//! This crate contains the pieces every other crate leans on at start-up: the
//! configuration document the host hands over and the `tracing` setup used to
//! report what gets registered.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
