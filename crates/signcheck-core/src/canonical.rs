//! Canonical string construction.
//!
//! The signed message is:
//! - every field rendered as `key=value`, values verbatim
//! - fields in ascending key order (code point order)
//! - fields joined by `&`, never with a trailing separator
//! - the shared secret appended directly, with no separator
//!
//! An empty payload therefore canonicalizes to the secret alone.

use crate::payload::Payload;

/// Pair separator.
const PAIR_SEP: char = '&';

/// Key/value separator.
const KV_SEP: char = '=';

/// Build the canonical string for a payload and secret.
pub fn canonical_string(payload: &Payload, secret: &str) -> String {
    render(payload.iter(), secret)
}

/// Build the canonical string, skipping the field named `excluded`.
///
/// The payload is only borrowed; the excluded field stays in place.
pub fn canonical_string_excluding(payload: &Payload, excluded: &str, secret: &str) -> String {
    render(payload.iter().filter(|(k, _)| *k != excluded), secret)
}

/// Render `k1=v1&...&kN=vN` for pairs already in key order.
pub(crate) fn render_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut buf = String::new();
    for (i, (key, value)) in pairs.enumerate() {
        if i > 0 {
            buf.push(PAIR_SEP);
        }
        buf.push_str(key);
        buf.push(KV_SEP);
        buf.push_str(value);
    }
    buf
}

fn render<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>, secret: &str) -> String {
    let mut buf = render_pairs(pairs);
    buf.push_str(secret);
    buf
}
