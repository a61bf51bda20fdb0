//! Error types for SignCheck Core.

use thiserror::Error;

/// Core errors that can occur while building payloads or parsing digests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

/// Verification failures.
///
/// [`crate::verify_signature`] collapses all of these to `false`; use
/// [`crate::check_signature`] when the caller needs to tell them apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("payload has no `{field}` field")]
    MissingSign { field: String },

    /// The computed digest is never carried here, so the error text is safe
    /// to return to the requester.
    #[error("`{field}` does not match the payload")]
    Mismatch { field: String },
}
