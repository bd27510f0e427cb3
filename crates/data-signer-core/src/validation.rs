//! Envelope validation: algorithm, signature and expiry checks.

use crate::algorithm::Algorithm;
use crate::crypto::SigningKey;
use crate::envelope::Envelope;
use crate::error::VerifyError;
use crate::mac::check_signature;
use crate::types::Timestamp;

/// Validate an envelope against the verifier's key material and clock.
///
/// Checks run in this order, and the first failure wins:
/// 1. The envelope's algorithm must be `algorithm`
/// 2. The signature must match (constant-time)
/// 3. The envelope must not be expired at `now`
///
/// Expiry is only reported for authentic envelopes.
pub fn validate_envelope(
    envelope: &Envelope,
    algorithm: Algorithm,
    key: &SigningKey,
    now: Timestamp,
) -> Result<(), VerifyError> {
    validate_signature(envelope, algorithm, key)?;

    match envelope.expires_at() {
        Some(expires_at) if envelope.is_expired_at(now) => Err(VerifyError::ExpiredData {
            payload: envelope.payload().to_string(),
            expires_at,
            now,
        }),
        _ => Ok(()),
    }
}

/// Validate only the signature, ignoring expiry.
pub fn validate_signature(
    envelope: &Envelope,
    algorithm: Algorithm,
    key: &SigningKey,
) -> Result<(), VerifyError> {
    // A different algorithm is never retried with the envelope's own tag.
    if envelope.algorithm() != algorithm {
        return Err(untrusted(envelope));
    }

    let matches = check_signature(
        algorithm,
        key,
        envelope.payload(),
        envelope.expires_at(),
        envelope.signature(),
    )?;

    if !matches {
        return Err(untrusted(envelope));
    }

    Ok(())
}

fn untrusted(envelope: &Envelope) -> VerifyError {
    VerifyError::UntrustedData {
        payload: envelope.payload().to_string(),
    }
}
