//! Golden test vectors for deterministic verification.
//!
//! Digests were cross-checked against an independent MD5 implementation.

use serde_json::{json, Value};
use signcheck_core::{compute_signature, Payload};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Request body as received, before stringification.
    pub request: Value,
    /// Shared secret.
    pub secret: &'static str,
    /// Expected canonical string.
    pub expected_canonical: &'static str,
    /// Expected digest (uppercase hex).
    pub expected_digest: &'static str,
}

impl GoldenVector {
    /// Payload built from the request.
    ///
    /// # Panics
    ///
    /// Panics if the request is not a JSON object.
    pub fn payload(&self) -> Payload {
        Payload::from_json(&self.request).expect("golden vector request must be an object")
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "reference request with CJK value",
            request: json!({
                "appid": "123",
                "isIntegral": "0",
                "viewId": "321",
                "description": "乱丢垃圾",
            }),
            secret: "321",
            expected_canonical: "appid=123&description=乱丢垃圾&isIntegral=0&viewId=321321",
            expected_digest: "F5CAE43E929C456A99CC5B14A890E712",
        },
        GoldenVector {
            name: "device command with empty values",
            request: json!({
                "cmdId": "",
                "name": "前厅灯光",
                "type": "control",
                "subType": "灯光",
                "command": "开机",
                "param": "",
                "resource": "",
                "view": "左上角区域",
            }),
            secret: "cE0aM0qC0dB4aD2",
            expected_canonical: "cmdId=&command=开机&name=前厅灯光&param=&resource=&subType=灯光&type=control&view=左上角区域cE0aM0qC0dB4aD2",
            expected_digest: "FB060C850205A2BAA0033AE77609C739",
        },
        GoldenVector {
            name: "typed JSON values",
            request: json!({
                "amount": 10,
                "flag": true,
                "name": "x",
                "note": null,
                "tags": ["a", "b"],
            }),
            secret: "k",
            expected_canonical: r#"amount=10&flag=true&name=x&tags=["a","b"]k"#,
            expected_digest: "B090FC88772627796A5D860B8ACFF3FC",
        },
        GoldenVector {
            name: "uppercase key sorts first",
            request: json!({"a": "2", "B": "1"}),
            secret: "x",
            expected_canonical: "B=1&a=2x",
            expected_digest: "F0132646424095E49A8E783F7F004DF7",
        },
        GoldenVector {
            name: "single pair",
            request: json!({"a": "1"}),
            secret: "s",
            expected_canonical: "a=1s",
            expected_digest: "ACD5F557E3B8DA52B8AAEC0623D7725E",
        },
        GoldenVector {
            name: "empty payload",
            request: json!({}),
            secret: "s",
            expected_canonical: "s",
            expected_digest: "03C7C0ACE395D80182DB07AE2C30F034",
        },
    ]
}

/// Check every golden vector's digest.
///
/// Returns `(name, matches, computed_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let hex = compute_signature(&v.payload(), v.secret).to_hex();
            let matches = hex == v.expected_digest;
            (v.name.to_string(), matches, hex)
        })
        .collect()
}
