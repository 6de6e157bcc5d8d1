//! # Spotify Provider
//!
//! Metadata source for the Spotify Web API.
//!
//! ## Overview
//!
//! This module provides:
//! - Client-credentials authentication (`Basic` header for the token grant)
//! - Market selection through an ISO 3166-1 alpha-2 country code
//! - Playlist and album pagination limits
//! - Mirroring: audio is resolved by searching the configured providers

pub mod source;

pub use source::{SpotifySource, TOKEN_ENDPOINT};
