//! Error types for the Signer.

use data_signer_core::{CoreError, VerifyError};
use thiserror::Error;

/// Errors that can occur during Signer operations.
#[derive(Debug, Error)]
pub enum SignerError {
    /// Verification rejected the envelope.
    #[error(transparent)]
    Verify(#[from] VerifyError),

    /// Invalid configuration or signing input.
    #[error("invalid input: {0}")]
    Core(#[from] CoreError),

    /// The payload codec failed.
    #[error("codec error: {0}")]
    Codec(String),
}

impl SignerError {
    /// The input could not be parsed as an envelope.
    pub fn is_corrupted(&self) -> bool {
        matches!(self, SignerError::Verify(VerifyError::CorruptedData(_)))
    }

    /// The signature did not match.
    pub fn is_untrusted(&self) -> bool {
        matches!(self, SignerError::Verify(VerifyError::UntrustedData { .. }))
    }

    /// The signature matched but the envelope expired.
    pub fn is_expired(&self) -> bool {
        matches!(self, SignerError::Verify(VerifyError::ExpiredData { .. }))
    }

    /// The rejected payload, for diagnostics.
    pub fn payload(&self) -> Option<&str> {
        match self {
            SignerError::Verify(e) => e.payload(),
            _ => None,
        }
    }
}

/// Result type for Signer operations.
pub type Result<T> = std::result::Result<T, SignerError>;
