//! The closed registry of MAC algorithms.
//!
//! The lower-case name of each member is both its configuration value and
//! its on-wire tag. Lookup by name never falls back to a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A supported MAC primitive.
///
/// Every member is used as an HMAC over the named hash function.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// CRC-32/BZIP2. Kept for wire compatibility; offers no integrity.
    Crc32,
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Whirlpool,
}

impl Algorithm {
    /// Every registered algorithm, in order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Crc32,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Whirlpool,
    ];

    /// The wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Crc32 => "crc32",
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::Whirlpool => "whirlpool",
        }
    }

    /// Look up a member by its exact wire name.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str() == name)
            .ok_or_else(|| CoreError::UnknownAlgorithm(name.to_string()))
    }

    /// Length of the MAC output in bytes.
    pub const fn output_len(&self) -> usize {
        match self {
            Algorithm::Crc32 => 4,
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 | Algorithm::Whirlpool => 64,
        }
    }

    /// Whether the underlying function is a cryptographic hash.
    pub const fn is_cryptographic(&self) -> bool {
        !matches!(self, Algorithm::Crc32)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for alg in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(alg.as_str()).unwrap(), alg);
            assert_eq!(alg.to_string(), alg.as_str());
        }
    }

    #[test]
    fn test_unknown_name_fails() {
        assert!(matches!(
            "sha3-256".parse::<Algorithm>(),
            Err(CoreError::UnknownAlgorithm(name)) if name == "sha3-256"
        ));
        // Names are matched exactly, never case-folded.
        assert!("MD5".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_registry_is_ordered() {
        let mut sorted = Algorithm::ALL;
        sorted.sort();
        assert_eq!(sorted, Algorithm::ALL);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Algorithm::Sha384).unwrap();
        assert_eq!(json, "\"sha384\"");
        let parsed: Algorithm = serde_json::from_str("\"whirlpool\"").unwrap();
        assert_eq!(parsed, Algorithm::Whirlpool);
    }

    #[test]
    fn test_only_crc32_is_non_cryptographic() {
        let weak: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|alg| !alg.is_cryptographic())
            .collect();
        assert_eq!(weak, vec![Algorithm::Crc32]);
    }
}
