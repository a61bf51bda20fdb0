//! MD5 digest type.
//!
//! Wraps the `md5` crate with a strong type whose textual form is the
//! uppercase hex used on the wire.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A 16-byte MD5 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; 16]);

impl Digest {
    /// Length of the hex rendering.
    pub const HEX_LEN: usize = 32;

    /// Compute the MD5 digest of the given data.
    pub fn hash(data: &[u8]) -> Self {
        Self(md5::compute(data).0)
    }

    /// Convert to uppercase hex string (32 characters).
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Parse from hex string. Either letter case is accepted.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s).map_err(|e| CoreError::InvalidDigest(e.to_string()))?;
        let arr: [u8; 16] = bytes
            .try_into()
            .map_err(|_| CoreError::InvalidDigest(format!("expected 16 bytes, got {}", s.len() / 2)))?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md5({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_known_values() {
        assert_eq!(Digest::hash(b"").to_hex(), "D41D8CD98F00B204E9800998ECF8427E");
        assert_eq!(Digest::hash(b"321").to_hex(), "CAF1A3DFB505FFED0D024130F58C5CFA");
    }

    #[test]
    fn test_hex_is_uppercase_and_fixed_length() {
        let hex = Digest::hash(b"test data").to_hex();
        assert_eq!(hex.len(), Digest::HEX_LEN);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_from_hex_accepts_lowercase() {
        let d = Digest::hash(b"abc");
        let parsed = Digest::from_hex(&d.to_hex().to_lowercase()).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(matches!(
            Digest::from_hex("ABCD"),
            Err(CoreError::InvalidDigest(_))
        ));
        assert!(matches!(
            Digest::from_hex("not hex at all"),
            Err(CoreError::InvalidDigest(_))
        ));
    }

    #[test]
    fn test_display_matches_hex() {
        let d = Digest::hash(b"display");
        assert_eq!(d.to_string(), d.to_hex());
        assert_eq!(format!("{:?}", d), format!("Md5({})", d.to_hex()));
    }
}
