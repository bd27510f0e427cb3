//! The signed envelope.
//!
//! An [`Envelope`] carries the serialized payload, the algorithm tag, the
//! raw signature and an optional expiry. It is immutable once built; the
//! only ways to obtain one are signing and decoding (see [`crate::wire`]).

use std::fmt;
use std::str::FromStr;

use crate::algorithm::Algorithm;
use crate::crypto::Signature;
use crate::error::CoreError;
use crate::mac::signed_message;
use crate::types::Timestamp;
use crate::wire;

/// A payload with its authentication tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    payload: String,
    algorithm: Algorithm,
    signature: Signature,
    expires_at: Option<Timestamp>,
}

impl Envelope {
    /// Assemble an envelope from its parts.
    ///
    /// No check is made that `signature` matches; that is the verifier's job.
    pub fn new(
        payload: impl Into<String>,
        algorithm: Algorithm,
        signature: Signature,
        expires_at: Option<Timestamp>,
    ) -> Self {
        Self {
            payload: payload.into(),
            algorithm,
            signature,
            expires_at,
        }
    }

    /// The serialized payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Consume the envelope, returning the payload.
    pub fn into_payload(self) -> String {
        self.payload
    }

    /// The algorithm tag.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The raw signature bytes.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The expiry, if any.
    pub fn expires_at(&self) -> Option<Timestamp> {
        self.expires_at
    }

    /// Whether the envelope has expired at `now`.
    ///
    /// The expiry instant itself is still valid.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        matches!(self.expires_at, Some(expires_at) if now > expires_at)
    }

    /// The exact bytes the signature covers.
    pub fn signed_message(&self) -> Vec<u8> {
        signed_message(&self.payload, self.expires_at)
    }

    /// Encode to the compact wire form.
    pub fn to_wire(&self) -> String {
        wire::encode(self)
    }

    /// Decode from the compact wire form.
    pub fn from_wire(s: &str) -> Result<Self, CoreError> {
        wire::decode(s)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl FromStr for Envelope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}
