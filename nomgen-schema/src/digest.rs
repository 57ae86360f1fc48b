//! Package identity.

use crate::error::SchemaError;
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "sha1-";
const DIGEST_LEN: usize = 20;

/// Content identity of a built package.
///
/// Textual form is `sha1-` followed by 40 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Ref {
    digest: [u8; DIGEST_LEN],
}

impl Ref {
    /// Creates a ref from a raw digest.
    #[must_use]
    pub const fn from_digest(digest: [u8; DIGEST_LEN]) -> Self {
        Self { digest }
    }

    /// Returns the raw digest.
    #[must_use]
    pub const fn digest(&self) -> &[u8; DIGEST_LEN] {
        &self.digest
    }

    /// Returns true for the all-zero ref.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digest.iter().all(|&b| b == 0)
    }

    /// Parses a ref from its textual form.
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidRef` if the prefix or digest is malformed.
    pub fn parse(s: &str) -> Result<Self, SchemaError> {
        let hex_part = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| SchemaError::invalid_ref(s, "missing sha1- prefix"))?;
        let mut digest = [0u8; DIGEST_LEN];
        hex::decode_to_slice(hex_part, &mut digest)
            .map_err(|e| SchemaError::invalid_ref(s, e.to_string()))?;
        Ok(Self { digest })
    }
}

impl FromStr for Ref {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, hex::encode(self.digest))
    }
}
