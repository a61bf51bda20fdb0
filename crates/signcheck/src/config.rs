//! Signer configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use signcheck_core::SIGN_FIELD;

use crate::error::{Result, SigncheckError};

/// Configuration for a [`crate::Signer`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Shared secret appended to the canonical string.
    pub secret: String,
    /// Name of the field carrying the signature.
    #[serde(default = "default_sign_field")]
    pub sign_field: String,
}

fn default_sign_field() -> String {
    SIGN_FIELD.to_string()
}

impl SignerConfig {
    /// Config with the given secret and the default `sign` field.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            sign_field: default_sign_field(),
        }
    }

    /// Use a different signature field name.
    pub fn sign_field(mut self, field: impl Into<String>) -> Self {
        self.sign_field = field.into();
        self
    }

    /// Parse from JSON, e.g. `{"secret": "...", "sign_field": "sign"}`.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot sign anything meaningfully.
    ///
    /// An empty secret is allowed.
    pub fn validate(&self) -> Result<()> {
        if self.sign_field.is_empty() {
            return Err(SigncheckError::InvalidConfig(
                "sign_field must not be empty".into(),
            ));
        }
        if self.sign_field.contains(['=', '&']) {
            return Err(SigncheckError::InvalidConfig(format!(
                "sign_field {:?} contains a separator",
                self.sign_field
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("secret", &"<redacted>")
            .field("sign_field", &self.sign_field)
            .finish()
    }
}
