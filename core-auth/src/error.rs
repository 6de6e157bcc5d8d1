use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("`{field}` is required for signed-key authentication")]
    MissingField { field: &'static str },

    #[error("Invalid signing key: {0}")]
    KeyFormat(String),

    #[error("Failed to sign identity assertion: {0}")]
    SigningFailed(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
