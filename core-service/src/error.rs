use bridge_traits::error::BridgeError;
use core_sources::SourceKind;
use thiserror::Error;

/// Reasons a configuration load is aborted.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{kind}: invalid configuration for `{field}`: {message}")]
    Configuration {
        kind: SourceKind,
        field: &'static str,
        message: String,
    },

    #[error("{kind}: unusable key material in `{field}`: {reason}")]
    KeyFormat {
        kind: SourceKind,
        field: &'static str,
        reason: String,
    },

    #[error("{kind}: enabled but no credential configured (expected {expected})")]
    MissingCredential {
        kind: SourceKind,
        expected: &'static str,
    },

    #[error("{kind}: host refused the source: {source}")]
    Registration {
        kind: SourceKind,
        #[source]
        source: BridgeError,
    },

    #[error("Sources have already been configured")]
    AlreadyConfigured,

    #[error(transparent)]
    Config(#[from] core_runtime::Error),
}

impl RegistryError {
    /// Source the error is about, when there is one.
    pub fn kind(&self) -> Option<SourceKind> {
        match self {
            RegistryError::Configuration { kind, .. }
            | RegistryError::KeyFormat { kind, .. }
            | RegistryError::MissingCredential { kind, .. }
            | RegistryError::Registration { kind, .. } => Some(*kind),
            RegistryError::AlreadyConfigured | RegistryError::Config(_) => None,
        }
    }

    /// Configuration field the operator has to fix, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RegistryError::Configuration { field, .. } | RegistryError::KeyFormat { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_source_and_field() {
        let error = RegistryError::Configuration {
            kind: SourceKind::AppleMusic,
            field: "teamId",
            message: "required when musicKitKey is set".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Apple Music"));
        assert!(message.contains("teamId"));
        assert_eq!(error.kind(), Some(SourceKind::AppleMusic));
        assert_eq!(error.field(), Some("teamId"));
    }

    #[test]
    fn test_missing_credential_has_no_field() {
        let error = RegistryError::MissingCredential {
            kind: SourceKind::YandexMusic,
            expected: "accessToken",
        };
        assert!(error.to_string().contains("accessToken"));
        assert_eq!(error.field(), None);
    }

    #[test]
    fn test_config_error_converts() {
        let error: RegistryError = core_runtime::Error::Config("bad".to_string()).into();
        assert!(matches!(error, RegistryError::Config(_)));
        assert_eq!(error.kind(), None);
    }
}
