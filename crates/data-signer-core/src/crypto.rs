//! Key material and signature bytes.
//!
//! Wraps the caller's secret, the optional domain label and the raw MAC
//! output with strong types. Secret material never appears in `Debug`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Length of secrets produced by [`Secret::generate`].
pub const GENERATED_SECRET_LEN: usize = 32;

/// The caller-supplied signing secret. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Wrap secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, CoreError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CoreError::EmptySecret);
        }
        Ok(Self(bytes))
    }

    /// Generate a new random secret.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = vec![0u8; GENERATED_SECRET_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}

/// A label that separates keyspaces derived from one secret. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Domain(String);

impl Domain {
    /// Create a domain label.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::EmptyDomain);
        }
        Ok(Self(name))
    }

    /// Get the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Domain {
    type Error = CoreError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<&str> for Domain {
    type Error = CoreError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.0
    }
}

/// The MAC key: `secret ++ domain`.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Derive the key for an optional domain.
    pub fn derive(secret: &Secret, domain: Option<&Domain>) -> Self {
        let mut key = secret.0.clone();
        if let Some(domain) = domain {
            key.extend_from_slice(domain.as_str().as_bytes());
        }
        Self(key)
    }

    /// Get the raw key bytes.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

/// Raw MAC output. Base64 only on the wire.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode with the standard padded base64 alphabet.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Decode from standard padded base64.
    pub fn from_base64(s: &str) -> Result<Self, CoreError> {
        STANDARD
            .decode(s)
            .map(Self)
            .map_err(|e| CoreError::InvalidSignatureEncoding(e.to_string()))
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        write!(f, "Signature({}...)", &hex[..hex.len().min(16)])
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Signature {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(Secret::new(""), Err(CoreError::EmptySecret)));
        assert!(matches!(Secret::new(Vec::new()), Err(CoreError::EmptySecret)));
    }

    #[test]
    fn test_empty_domain_rejected() {
        assert!(matches!(Domain::new(""), Err(CoreError::EmptyDomain)));
        assert!(serde_json::from_str::<Domain>("\"\"").is_err());
        let parsed: Domain = serde_json::from_str("\"tenant-a\"").unwrap();
        assert_eq!(parsed.as_str(), "tenant-a");
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = Secret::new("hunter2").unwrap();
        let key = SigningKey::derive(&secret, None);
        assert_eq!(format!("{secret:?}"), "Secret(..)");
        assert!(!format!("{key:?}").contains("hunter2"));
    }

    #[test]
    fn test_generated_secrets_differ() {
        let a = Secret::generate();
        let b = Secret::generate();
        assert_eq!(a.len(), GENERATED_SECRET_LEN);
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_concatenates_domain() {
        let secret = Secret::new("secret").unwrap();
        let domain = Domain::new("A").unwrap();
        assert_eq!(SigningKey::derive(&secret, None).as_bytes(), b"secret");
        assert_eq!(
            SigningKey::derive(&secret, Some(&domain)).as_bytes(),
            b"secretA"
        );
    }

    #[test]
    fn test_signature_base64_roundtrip() {
        let sig = Signature::from_base64("7TJ3nATVM5bTQ9Zg6Ie/sg==").unwrap();
        assert_eq!(sig.len(), 16);
        assert_eq!(sig.to_base64(), "7TJ3nATVM5bTQ9Zg6Ie/sg==");
    }

    #[test]
    fn test_signature_rejects_bad_base64() {
        assert!(matches!(
            Signature::from_base64("not base64!"),
            Err(CoreError::InvalidSignatureEncoding(_))
        ));
    }
}
