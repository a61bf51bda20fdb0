//! Error types for SignCheck.

use signcheck_core::{CoreError, VerifyError};
use thiserror::Error;

/// Errors that can occur during signing or verification.
#[derive(Debug, Error)]
pub enum SigncheckError {
    /// Payload could not be built.
    #[error("payload error: {0}")]
    Core(#[from] CoreError),

    /// Signature did not verify.
    #[error("verification failed: {0}")]
    Verify(#[from] VerifyError),

    /// Configuration could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for SignCheck operations.
pub type Result<T> = std::result::Result<T, SigncheckError>;
