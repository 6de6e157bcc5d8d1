//! Deezer source implementation

use crate::error::{DeezerError, Result};
use core_auth::{AuthStrategy, StaticCredential};
use core_sources::{SourceKind, SourceManager};
use std::fmt;
use tracing::debug;

/// Size of the master key and of every derived track key, in bytes
pub const KEY_LEN: usize = 16;

const ISRC_PREFIX: &str = "dzisrc:";
const WEB_HOST: &str = "deezer.com/";

/// Validated master decryption key.
#[derive(Clone, PartialEq, Eq)]
pub struct MasterDecryptionKey([u8; KEY_LEN]);

impl MasterDecryptionKey {
    /// Parse the key as written in configuration.
    ///
    /// Surrounding whitespace is ignored; what remains must be exactly
    /// [`KEY_LEN`] bytes.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DeezerError::BlankKey);
        }

        let bytes: [u8; KEY_LEN] = raw.as_bytes().try_into().map_err(|_| DeezerError::KeyLength {
            expected: KEY_LEN,
            actual: raw.len(),
        })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for MasterDecryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterDecryptionKey([REDACTED])")
    }
}

/// Deezer metadata source
pub struct DeezerSource {
    master_key: MasterDecryptionKey,
    auth: AuthStrategy,
}

impl DeezerSource {
    pub fn new(master_key: MasterDecryptionKey) -> Self {
        let material = String::from_utf8_lossy(master_key.as_bytes()).into_owned();
        debug!(key_len = KEY_LEN, "Deezer master decryption key loaded");
        Self {
            auth: StaticCredential::SymmetricKey(material).into(),
            master_key,
        }
    }

    /// Blowfish key for one track.
    ///
    /// `key[i] = h[i] ^ h[i + 16] ^ master[i]`, where `h` is the lowercase hex
    /// MD5 digest of the track id.
    pub fn track_key(&self, track_id: &str) -> [u8; KEY_LEN] {
        let digest = hex::encode(md5::compute(track_id.as_bytes()).0);
        let digest = digest.as_bytes();
        let master = self.master_key.as_bytes();

        let mut key = [0u8; KEY_LEN];
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = digest[i] ^ digest[i + KEY_LEN] ^ master[i];
        }
        key
    }
}

impl SourceManager for DeezerSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Deezer
    }

    fn auth(&self) -> &AuthStrategy {
        &self.auth
    }

    fn handles(&self, identifier: &str) -> bool {
        identifier.starts_with(SourceKind::Deezer.search_prefix())
            || identifier.starts_with(ISRC_PREFIX)
            || identifier.contains(WEB_HOST)
    }
}

impl fmt::Debug for DeezerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeezerSource")
            .field("master_key", &self.master_key)
            .finish()
    }
}
