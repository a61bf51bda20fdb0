//! # SignCheck Testkit
//!
//! Testing utilities for SignCheck.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known payloads with expected canonical strings and digests
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Golden Vectors
//!
//! ```rust
//! use signcheck_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for (name, ok, hex) in verify_all_vectors() {
//!     assert!(ok, "{name}: got {hex}");
//! }
//! assert!(!all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use signcheck_testkit::generators::{payload, secret};
//!
//! proptest! {
//!     #[test]
//!     fn signature_is_deterministic(p in payload(8), s in secret()) {
//!         prop_assert_eq!(compute_signature(&p, &s), compute_signature(&p, &s));
//!     }
//! }
//! ```

pub mod generators;
pub mod vectors;

pub use generators::{payload, secret, SignedParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
