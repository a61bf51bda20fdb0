//! Signature computation and verification.

use subtle::ConstantTimeEq;

use crate::canonical::{canonical_string, canonical_string_excluding, render_pairs};
use crate::digest::Digest;
use crate::error::VerifyError;
use crate::payload::Payload;

/// Name of the field that carries the claimed digest.
pub const SIGN_FIELD: &str = "sign";

/// Compute the signature of a payload.
///
/// The payload is signed exactly as given; strip [`SIGN_FIELD`] first if it
/// may be present.
pub fn compute_signature(payload: &Payload, secret: &str) -> Digest {
    Digest::hash(canonical_string(payload, secret).as_bytes())
}

/// Check the `sign` field of a payload against the expected digest.
///
/// The claimed value is compared exactly as supplied, so a lowercase hex
/// rendering of the correct digest is a mismatch.
pub fn check_signature(payload: &Payload, secret: &str) -> Result<(), VerifyError> {
    check_with_field(payload, SIGN_FIELD, secret)
}

/// [`check_signature`] with a caller-chosen signature field name.
pub fn check_with_field(payload: &Payload, field: &str, secret: &str) -> Result<(), VerifyError> {
    let claimed = payload.get(field).ok_or_else(|| VerifyError::MissingSign {
        field: field.to_string(),
    })?;

    let canonical = canonical_string_excluding(payload, field, secret);
    let expected = Digest::hash(canonical.as_bytes()).to_hex();

    if hex_eq(&expected, claimed) {
        Ok(())
    } else {
        Err(VerifyError::Mismatch {
            field: field.to_string(),
        })
    }
}

/// Verify the `sign` field of a payload. Every failure is `false`.
pub fn verify_signature(payload: &Payload, secret: &str) -> bool {
    check_signature(payload, secret).is_ok()
}

/// Return a copy of the payload with `sign` set to its signature.
///
/// Any existing `sign` value is ignored when signing and then replaced.
pub fn attach_signature(payload: &Payload, secret: &str) -> Payload {
    attach_with_field(payload, SIGN_FIELD, secret)
}

/// [`attach_signature`] with a caller-chosen signature field name.
pub fn attach_with_field(payload: &Payload, field: &str, secret: &str) -> Payload {
    let digest = sign_excluding(payload, field, secret);
    let mut signed = payload.clone();
    signed.insert(field, digest.to_hex());
    signed
}

/// Render the payload as a parameter string with the signature last:
/// `k1=v1&...&kN=vN&sign=DIGEST`. The secret is not included.
pub fn signed_query(payload: &Payload, secret: &str) -> String {
    query_with_field(payload, SIGN_FIELD, secret)
}

/// [`signed_query`] with a caller-chosen signature field name.
pub fn query_with_field(payload: &Payload, field: &str, secret: &str) -> String {
    let digest = sign_excluding(payload, field, secret);
    let mut query = render_pairs(payload.iter().filter(|(k, _)| *k != field));
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(field);
    query.push('=');
    query.push_str(&digest.to_hex());
    query
}

/// Sign a payload while skipping the field named `field`.
pub fn sign_excluding(payload: &Payload, field: &str, secret: &str) -> Digest {
    Digest::hash(canonical_string_excluding(payload, field, secret).as_bytes())
}

/// Exact byte equality without early exit on the first differing byte.
fn hex_eq(expected: &str, claimed: &str) -> bool {
    expected.len() == claimed.len() && bool::from(expected.as_bytes().ct_eq(claimed.as_bytes()))
}
