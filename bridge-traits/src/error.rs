use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Duplicate registration: {0}")]
    Duplicate(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BridgeError::OperationFailed("chain is frozen".to_string()).to_string(),
            "Bridge operation failed: chain is frozen"
        );
        assert_eq!(
            BridgeError::Duplicate("spotify".to_string()).to_string(),
            "Duplicate registration: spotify"
        );
    }
}
