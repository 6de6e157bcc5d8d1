//! # Deezer Provider
//!
//! Metadata source for Deezer.
//!
//! ## Overview
//!
//! Deezer serves encrypted audio. The source holds the 16-byte master
//! decryption key and derives the per-track Blowfish key from it; running the
//! cipher over the stream is left to the host.

pub mod error;
pub mod source;

pub use error::{DeezerError, Result};
pub use source::{DeezerSource, MasterDecryptionKey, KEY_LEN};
