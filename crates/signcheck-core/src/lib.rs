//! # SignCheck Core
//!
//! Pure primitives for shared-secret payload signing: payloads, canonical
//! strings, and MD5 digests.
//!
//! This crate contains no I/O and no logging. It is pure computation over
//! string maps.
//!
//! ## Key Types
//!
//! - [`Payload`] - Field name to field value mapping, always in canonical key order
//! - [`Digest`] - MD5 output rendered as 32 uppercase hex characters
//!
//! ## Canonicalization
//!
//! A payload is signed over `k1=v1&k2=v2&...&kN=vN` followed directly by the
//! shared secret. See [`canonical`] module.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod payload;
pub mod verify;

pub use canonical::{canonical_string, canonical_string_excluding};
pub use digest::Digest;
pub use error::{CoreError, VerifyError};
pub use payload::Payload;
pub use verify::{
    attach_signature, attach_with_field, check_signature, check_with_field, compute_signature,
    query_with_field, sign_excluding, signed_query, verify_signature, SIGN_FIELD,
};
