//! Error types for the data signer core.

use thiserror::Error;

use crate::types::Timestamp;

/// Core errors raised while building keys or decoding envelopes.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("secret must not be empty")]
    EmptySecret,

    #[error("domain must not be empty")]
    EmptyDomain,

    #[error("time-to-live must be a positive number of seconds")]
    InvalidTtl,

    #[error("expiry timestamp overflows")]
    TimestampOverflow,

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    #[error("key initialization failed: {0}")]
    KeyInit(String),
}

/// Outcome of a failed envelope verification.
///
/// Every variant is terminal: the envelope must not be trusted.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The input could not be read as an envelope.
    #[error("corrupted data: {0}")]
    CorruptedData(String),

    /// The signature does not match the payload.
    #[error("untrusted data: signature mismatch")]
    UntrustedData { payload: String },

    /// The signature is valid but the envelope is past its expiry.
    #[error("expired data: expired at {expires_at}, now {now}")]
    ExpiredData {
        payload: String,
        expires_at: Timestamp,
        now: Timestamp,
    },
}

impl VerifyError {
    /// The offending payload, when the envelope could be parsed.
    pub fn payload(&self) -> Option<&str> {
        match self {
            VerifyError::CorruptedData(_) => None,
            VerifyError::UntrustedData { payload } | VerifyError::ExpiredData { payload, .. } => {
                Some(payload)
            }
        }
    }
}

impl From<CoreError> for VerifyError {
    fn from(e: CoreError) -> Self {
        VerifyError::CorruptedData(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_becomes_corrupted_data() {
        let err = VerifyError::from(CoreError::UnknownAlgorithm("rot13".into()));
        match err {
            VerifyError::CorruptedData(msg) => assert_eq!(msg, "unknown algorithm: rot13"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_payload_accessor() {
        let untrusted = VerifyError::UntrustedData {
            payload: "p".into(),
        };
        assert_eq!(untrusted.payload(), Some("p"));

        let corrupted = VerifyError::CorruptedData("bad".into());
        assert_eq!(corrupted.payload(), None);
    }
}
