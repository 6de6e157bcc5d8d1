//! # Apple Music Provider
//!
//! Metadata source for the Apple Music API.
//!
//! Requests are authorized with a developer token. The token is either a
//! pre-issued media API token taken from configuration, or minted on demand
//! by a MusicKit signer derived from the team's private key.

pub mod source;

pub use source::AppleMusicSource;
