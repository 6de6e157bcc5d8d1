//! Signed-key identity seams.
//!
//! An [`IdentityDeriver`] turns private key material plus its identifiers into
//! an [`IdentitySigner`]. The signer is what a source keeps: it mints a fresh,
//! time-bounded [`SignedAssertion`] whenever the source needs a bearer
//! credential. Refreshing is the caller's concern; neither trait caches.

use crate::error::Result;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// A signed, time-bounded bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedAssertion {
    /// Compact serialized token
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SignedAssertion {
    /// Whether the assertion is still usable at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.issued_at && now < self.expires_at
    }
}

impl fmt::Debug for SignedAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedAssertion")
            .field("token", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Capability to mint signed assertions with a fixed key.
pub trait IdentitySigner: Send + Sync {
    /// Mint a fresh assertion valid from now.
    fn mint(&self) -> Result<SignedAssertion>;

    /// Identifier of the signing key, as known to the remote service.
    fn key_id(&self) -> &str;

    /// Issuer placed in every assertion (the team identifier).
    fn issuer(&self) -> &str;
}

/// Turns private key material into a signer.
///
/// Implementations validate the identifiers before touching the key so that a
/// missing identifier is always reported as such, never as a key problem.
pub trait IdentityDeriver: Send + Sync {
    fn derive(
        &self,
        private_key_pem: &str,
        key_id: &str,
        team_id: &str,
    ) -> Result<Arc<dyn IdentitySigner>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_assertion_validity_window() {
        let issued_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let assertion = SignedAssertion {
            token: "header.claims.signature".to_string(),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
        };

        assert!(assertion.is_valid_at(issued_at));
        assert!(assertion.is_valid_at(issued_at + Duration::minutes(59)));
        assert!(!assertion.is_valid_at(issued_at + Duration::hours(1)));
        assert!(!assertion.is_valid_at(issued_at - Duration::seconds(1)));
    }

    #[test]
    fn test_assertion_debug_redacts_token() {
        let now = Utc::now();
        let assertion = SignedAssertion {
            token: "header.claims.signature".to_string(),
            issued_at: now,
            expires_at: now,
        };

        assert!(!format!("{:?}", assertion).contains("signature"));
    }
}
