//! Workspace placeholder crate.
//!
//! Hosts that only need the registry can depend on `srcreg-workspace` and
//! reach everything through the [`core_service`] facade instead of wiring the
//! individual provider crates.

pub use core_service::*;
