//! # SignCheck
//!
//! Shared-secret request signing for key-value payloads.
//!
//! ## Overview
//!
//! A payload is signed by sorting its fields, rendering them as
//! `k1=v1&...&kN=vN`, appending the shared secret, and hashing with MD5. The
//! signature travels in the payload's `sign` field as 32 uppercase hex
//! characters.
//!
//! ## Usage
//!
//! ```rust
//! use signcheck::{Payload, Signer, SignerConfig};
//!
//! let signer = Signer::new(SignerConfig::new("321")).unwrap();
//!
//! let payload = Payload::from([("appid", "123"), ("viewId", "321")]);
//! let signed = signer.attach(&payload);
//!
//! assert!(signer.verify(&signed));
//! ```
//!
//! Requests that arrive as JSON go through [`Signer::verify_json`], which
//! stringifies typed values before checking (see [`Payload::from_json`]).
//!
//! ## Re-exports
//!
//! - `signcheck::core` - Core primitives (Payload, Digest, canonicalization)

pub mod config;
pub mod error;
pub mod signer;

pub use signcheck_core as core;

pub use config::SignerConfig;
pub use error::{Result, SigncheckError};
pub use signer::Signer;

pub use signcheck_core::{
    canonical_string, compute_signature, verify_signature, CoreError, Digest, Payload,
    VerifyError, SIGN_FIELD,
};
