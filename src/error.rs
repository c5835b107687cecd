//! Error types for tsrep

use thiserror::Error;

/// Errors that can occur during representation computation
#[derive(Debug, Error)]
pub enum ReprError {
    #[error("Empty input series: {0}")]
    EmptyInput(String),

    #[error("Insufficient series length: {0}")]
    InsufficientLength(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid method configuration: {0}")]
    ConfigError(#[from] serde_json::Error),
}
