//! Proptest generators for property-based testing.

use proptest::prelude::*;

use signcheck_core::{Payload, SIGN_FIELD};

/// Generate a field name. Never the reserved `sign` field.
pub fn field_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}".prop_filter("reserved field", |k| k != SIGN_FIELD)
}

/// Generate a field value, including empty and non-ASCII text.
pub fn field_value() -> impl Strategy<Value = String> {
    "\\PC{0,24}".prop_map(String::from)
}

/// Generate a shared secret.
pub fn secret() -> impl Strategy<Value = String> {
    "\\PC{0,32}".prop_map(String::from)
}

/// Generate a payload with up to `max_fields` fields.
pub fn payload(max_fields: usize) -> impl Strategy<Value = Payload> {
    prop::collection::vec((field_name(), field_value()), 0..=max_fields)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Generate a payload with at least one field.
pub fn non_empty_payload(max_fields: usize) -> impl Strategy<Value = Payload> {
    prop::collection::vec((field_name(), field_value()), 1..=max_fields.max(1))
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Parameters for a signing round.
#[derive(Debug, Clone)]
pub struct SignedParams {
    pub payload: Payload,
    pub secret: String,
}

impl Arbitrary for SignedParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (payload(12), secret())
            .prop_map(|(payload, secret)| SignedParams { payload, secret })
            .boxed()
    }
}
