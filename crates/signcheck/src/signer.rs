//! The Signer: a secret and field name bound together.
//!
//! Wraps the core functions with configuration and logging. The secret and
//! computed digests never appear in log output.

use serde_json::Value;

use signcheck_core::{
    attach_with_field, check_with_field, query_with_field, sign_excluding, Digest, Payload,
    VerifyError,
};

use crate::config::SignerConfig;
use crate::error::Result;

/// Signs and verifies payloads with one shared secret.
#[derive(Debug, Clone)]
pub struct Signer {
    config: SignerConfig,
}

impl Signer {
    /// Create a signer, validating the config.
    pub fn new(config: SignerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SignerConfig {
        &self.config
    }

    /// Name of the signature field.
    pub fn sign_field(&self) -> &str {
        &self.config.sign_field
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Signing
    // ─────────────────────────────────────────────────────────────────────────

    /// Compute the signature of a payload, skipping the signature field.
    pub fn sign(&self, payload: &Payload) -> Digest {
        tracing::debug!(fields = payload.len(), "signing payload");
        sign_excluding(payload, &self.config.sign_field, &self.config.secret)
    }

    /// Return a copy of the payload with its signature attached.
    pub fn attach(&self, payload: &Payload) -> Payload {
        tracing::debug!(fields = payload.len(), "attaching signature");
        attach_with_field(payload, &self.config.sign_field, &self.config.secret)
    }

    /// Render `k1=v1&...&kN=vN&sign=DIGEST` for the payload.
    pub fn signed_query(&self, payload: &Payload) -> String {
        query_with_field(payload, &self.config.sign_field, &self.config.secret)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Check the payload's signature, reporting why it failed.
    pub fn check(&self, payload: &Payload) -> std::result::Result<(), VerifyError> {
        let result = check_with_field(payload, &self.config.sign_field, &self.config.secret);
        match &result {
            Ok(()) => tracing::debug!(fields = payload.len(), "signature verified"),
            Err(VerifyError::MissingSign { field }) => {
                tracing::warn!(field = %field, "payload has no signature field");
            }
            Err(VerifyError::Mismatch { .. }) => {
                tracing::warn!(fields = payload.len(), "signature mismatch");
            }
        }
        result
    }

    /// Verify the payload's signature. Every failure is `false`.
    pub fn verify(&self, payload: &Payload) -> bool {
        self.check(payload).is_ok()
    }

    /// Check a JSON object request.
    ///
    /// Fails with [`crate::SigncheckError::Core`] if `value` is not an object
    /// and [`crate::SigncheckError::Verify`] if the signature does not match.
    pub fn check_json(&self, value: &Value) -> Result<()> {
        let payload = Payload::from_json(value)?;
        self.check(&payload)?;
        Ok(())
    }

    /// Verify a JSON object request.
    ///
    /// Only a non-object `value` is an error; signature failures are `Ok(false)`.
    pub fn verify_json(&self, value: &Value) -> Result<bool> {
        let payload = Payload::from_json(value)?;
        Ok(self.verify(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SigncheckError;
    use serde_json::json;
    use signcheck_core::CoreError;

    fn signer() -> Signer {
        Signer::new(SignerConfig::new("321")).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(matches!(
            Signer::new(SignerConfig::new("k").sign_field("")),
            Err(SigncheckError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_attach_then_verify() {
        let signer = signer();
        let payload = Payload::from([("appid", "123"), ("viewId", "321")]);
        let signed = signer.attach(&payload);

        assert_eq!(signed.get("sign"), Some(signer.sign(&payload).to_hex().as_str()));
        assert!(signer.verify(&signed));
        assert!(!signer.verify(&payload));
    }

    #[test]
    fn test_sign_ignores_existing_signature() {
        let signer = signer();
        let payload = Payload::from([("a", "1")]);
        let with_junk = payload.clone().with("sign", "junk");
        assert_eq!(signer.sign(&payload), signer.sign(&with_junk));
    }

    #[test]
    fn test_check_distinguishes_failures() {
        let signer = signer();
        let payload = Payload::from([("a", "1")]);

        assert!(matches!(
            signer.check(&payload),
            Err(VerifyError::MissingSign { .. })
        ));
        assert!(matches!(
            signer.check(&payload.clone().with("sign", "BAD")),
            Err(VerifyError::Mismatch { .. })
        ));
    }

    #[test]
    fn test_custom_sign_field() {
        let signer = Signer::new(SignerConfig::new("321").sign_field("signature")).unwrap();
        let signed = signer.attach(&Payload::from([("a", "1")]));
        assert!(signed.contains_key("signature"));
        assert!(!signed.contains_key("sign"));
        assert!(signer.verify(&signed));
        assert!(signer.signed_query(&signed).contains("&signature="));
    }

    #[test]
    fn test_verify_json_typed_values() {
        let signer = signer();
        let payload = Payload::from([("amount", "10"), ("flag", "true"), ("name", "x")]);
        let digest = signer.sign(&payload);

        let request = json!({
            "amount": 10,
            "flag": true,
            "name": "x",
            "note": null,
            "sign": digest.to_hex(),
        });
        assert!(signer.verify_json(&request).unwrap());
        assert!(signer.check_json(&request).is_ok());
    }

    #[test]
    fn test_verify_json_rejects_non_object() {
        let signer = signer();
        assert!(matches!(
            signer.verify_json(&json!(["sign"])),
            Err(SigncheckError::Core(CoreError::NotAnObject("array")))
        ));
    }

    #[test]
    fn test_mismatch_error_text_omits_digest() {
        let signer = Signer::new(SignerConfig::new("unknown-secret")).unwrap();
        let request = json!({"amount": "1000000", "to": "attacker", "sign": "X"});
        let expected = signer
            .sign(&Payload::from_json(&request).unwrap())
            .to_hex();

        let err = signer.check_json(&request).unwrap_err();
        assert!(!err.to_string().contains(&expected));
        assert!(!format!("{:?}", err).contains(&expected));

        let replayed = json!({"amount": "1000000", "to": "attacker", "sign": err.to_string()});
        assert!(!signer.verify_json(&replayed).unwrap());
    }

    #[test]
    fn test_check_json_mismatch_is_error() {
        let signer = signer();
        let request = json!({"a": "1", "sign": "00000000000000000000000000000000"});
        assert!(!signer.verify_json(&request).unwrap());
        assert!(matches!(
            signer.check_json(&request),
            Err(SigncheckError::Verify(VerifyError::Mismatch { .. }))
        ));
    }
}
