//! # Authentication Module
//!
//! Credential strategies for streaming sources.
//!
//! ## Overview
//!
//! Every source is authenticated in exactly one way, picked when the source is
//! built and fixed for its lifetime:
//!
//! - a static credential taken verbatim from configuration (bearer token,
//!   client-credentials pair, symmetric key), or
//! - a derived identity: a private key that signs short-lived assertions on
//!   demand (Apple MusicKit developer tokens).
//!
//! ## Features
//!
//! - [`AuthStrategy`] / [`StaticCredential`] with redacting `Debug` output
//! - [`IdentityDeriver`] / [`IdentitySigner`] seams for signed-key identities
//! - [`MusicKitDeriver`], the ES256 implementation used for Apple Music
//!
//! Nothing in this crate performs network I/O.

pub mod error;
pub mod identity;
pub mod music_kit;
pub mod types;

pub use error::{AuthError, Result};
pub use identity::{IdentityDeriver, IdentitySigner, SignedAssertion};
pub use music_kit::{MusicKitDeriver, MusicKitSigner};
pub use types::{AuthStrategy, StaticCredential};
