use crate::identity::IdentitySigner;
use std::fmt;
use std::sync::Arc;

/// Credential taken verbatim from configuration.
///
/// # Security
///
/// Credentials must never be logged. The `Debug` implementation redacts every
/// secret value; only non-secret identifiers (the Spotify client id) are shown.
///
/// # Examples
///
/// ```
/// use core_auth::StaticCredential;
///
/// let credential = StaticCredential::BearerToken("abc".to_string());
/// assert_eq!(credential.kind(), "bearer_token");
/// assert!(!format!("{:?}", credential).contains("abc"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum StaticCredential {
    /// Long-lived token presented as-is on every request
    BearerToken(String),
    /// OAuth client-credentials pair exchanged for short-lived tokens
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
    /// Symmetric key material used locally, never sent over the wire
    SymmetricKey(String),
}

impl StaticCredential {
    /// Short identifier used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StaticCredential::BearerToken(_) => "bearer_token",
            StaticCredential::ClientCredentials { .. } => "client_credentials",
            StaticCredential::SymmetricKey(_) => "symmetric_key",
        }
    }
}

impl fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticCredential::BearerToken(_) => f.write_str("BearerToken([REDACTED])"),
            StaticCredential::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"[REDACTED]")
                .finish(),
            StaticCredential::SymmetricKey(_) => f.write_str("SymmetricKey([REDACTED])"),
        }
    }
}

/// How a source authenticates against its remote service.
///
/// Exactly one strategy is chosen per source instance and it never changes
/// afterwards.
#[derive(Clone)]
pub enum AuthStrategy {
    StaticCredential(StaticCredential),
    DerivedIdentity(Arc<dyn IdentitySigner>),
}

impl AuthStrategy {
    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            AuthStrategy::StaticCredential(_) => "static_credential",
            AuthStrategy::DerivedIdentity(_) => "derived_identity",
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, AuthStrategy::DerivedIdentity(_))
    }

    pub fn static_credential(&self) -> Option<&StaticCredential> {
        match self {
            AuthStrategy::StaticCredential(credential) => Some(credential),
            AuthStrategy::DerivedIdentity(_) => None,
        }
    }

    pub fn signer(&self) -> Option<&Arc<dyn IdentitySigner>> {
        match self {
            AuthStrategy::StaticCredential(_) => None,
            AuthStrategy::DerivedIdentity(signer) => Some(signer),
        }
    }
}

impl From<StaticCredential> for AuthStrategy {
    fn from(credential: StaticCredential) -> Self {
        AuthStrategy::StaticCredential(credential)
    }
}

impl fmt::Debug for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthStrategy::StaticCredential(credential) => f
                .debug_tuple("StaticCredential")
                .field(credential)
                .finish(),
            AuthStrategy::DerivedIdentity(signer) => f
                .debug_struct("DerivedIdentity")
                .field("key_id", &signer.key_id())
                .field("issuer", &signer.issuer())
                .finish(),
        }
    }
}
