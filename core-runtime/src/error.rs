use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for `{field}`: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
