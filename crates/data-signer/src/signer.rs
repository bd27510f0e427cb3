//! The Signer: sign values into envelopes and verify them on return.
//!
//! A Signer is immutable. Every `with_*` method returns a new Signer and
//! leaves the receiver untouched, so one base Signer can be shared across
//! threads and specialised per domain or clock.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use data_signer_core::{
    generate_signature, validate_envelope, Algorithm, Domain, Envelope, Secret, SigningKey,
    Timestamp, Ttl, VerifyError,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::codec::{JsonCodec, PayloadCodec};
use crate::config::SignerConfig;
use crate::error::{Result, SignerError};

/// Input accepted by verification: a wire string or a decoded envelope.
#[derive(Debug, Clone, Copy)]
pub enum Signed<'a> {
    /// The compact wire form.
    Wire(&'a str),
    /// An envelope already in memory.
    Envelope(&'a Envelope),
}

impl<'a> From<&'a str> for Signed<'a> {
    fn from(wire: &'a str) -> Self {
        Signed::Wire(wire)
    }
}

impl<'a> From<&'a String> for Signed<'a> {
    fn from(wire: &'a String) -> Self {
        Signed::Wire(wire)
    }
}

impl<'a> From<&'a Envelope> for Signed<'a> {
    fn from(envelope: &'a Envelope) -> Self {
        Signed::Envelope(envelope)
    }
}

/// Signs and verifies envelopes with one secret, algorithm and domain.
#[derive(Clone)]
pub struct Signer<C = JsonCodec> {
    /// Algorithm used to sign, and required when verifying.
    algorithm: Algorithm,
    /// Base secret, kept so the key can be re-derived per domain.
    secret: Secret,
    /// Optional domain label.
    domain: Option<Domain>,
    /// `secret ++ domain`.
    key: SigningKey,
    /// Time source for expiry.
    clock: Arc<dyn Clock>,
    /// Payload codec.
    codec: C,
}

impl Signer<JsonCodec> {
    /// Create a Signer with the system clock and the JSON codec.
    pub fn new(secret: Secret, config: SignerConfig) -> Self {
        let key = SigningKey::derive(&secret, config.domain.as_ref());
        Self {
            algorithm: config.algorithm,
            secret,
            domain: config.domain,
            key,
            clock: Arc::new(SystemClock),
            codec: JsonCodec,
        }
    }
}

impl<C: PayloadCodec> Signer<C> {
    // ─────────────────────────────────────────────────────────────────────────
    // Derivation
    // ─────────────────────────────────────────────────────────────────────────

    /// A copy of this Signer using another payload codec.
    pub fn with_codec<D: PayloadCodec>(&self, codec: D) -> Signer<D> {
        Signer {
            algorithm: self.algorithm,
            secret: self.secret.clone(),
            domain: self.domain.clone(),
            key: self.key.clone(),
            clock: Arc::clone(&self.clock),
            codec,
        }
    }

    /// A copy of this Signer using another algorithm.
    pub fn with_algorithm(&self, algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..self.clone()
        }
    }

    /// A copy of this Signer keyed for `name`.
    ///
    /// An empty name is rejected; use [`Signer::without_domain`] to clear.
    pub fn with_domain(&self, name: &str) -> Result<Self> {
        let domain = Domain::new(name)?;
        Ok(self.rekey(Some(domain)))
    }

    /// A copy of this Signer keyed by the bare secret.
    pub fn without_domain(&self) -> Self {
        self.rekey(None)
    }

    /// A copy of this Signer whose clock is frozen at `now`.
    pub fn with_now(&self, now: Timestamp) -> Self {
        self.with_clock(FixedClock(now))
    }

    /// A copy of this Signer reading time from `clock`.
    pub fn with_clock<K: Clock + 'static>(&self, clock: K) -> Self {
        Self {
            clock: Arc::new(clock),
            ..self.clone()
        }
    }

    fn rekey(&self, domain: Option<Domain>) -> Self {
        let key = SigningKey::derive(&self.secret, domain.as_ref());
        Self {
            domain,
            key,
            ..self.clone()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// The configured algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The configured domain, if any.
    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()
    }

    /// The current time according to this Signer's clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// The payload codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Signing
    // ─────────────────────────────────────────────────────────────────────────

    /// Serialize `value` and sign it.
    ///
    /// With `ttl` set, the envelope expires `ttl` seconds from now.
    pub fn sign<T: Serialize + ?Sized>(&self, value: &T, ttl: Option<u64>) -> Result<Envelope> {
        let payload = self.codec.encode(value)?;
        self.sign_payload(payload, ttl)
    }

    /// Sign payload text that is already serialized.
    pub fn sign_payload(&self, payload: impl Into<String>, ttl: Option<u64>) -> Result<Envelope> {
        let payload = payload.into();

        let expires_at = match ttl {
            Some(secs) => Some(self.clock.now().checked_add(Ttl::from_secs(secs)?)?),
            None => None,
        };

        let signature = generate_signature(self.algorithm, &self.key, &payload, expires_at)?;

        tracing::debug!(
            algorithm = %self.algorithm,
            payload_len = payload.len(),
            expires_at = ?expires_at,
            "signed payload"
        );

        Ok(Envelope::new(payload, self.algorithm, signature, expires_at))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify an envelope and deserialize its payload.
    pub fn verify<'a, T: DeserializeOwned>(&self, signed: impl Into<Signed<'a>>) -> Result<T> {
        let payload = self.verify_payload(signed)?;
        self.codec.decode(&payload)
    }

    /// Verify an envelope and return its payload text.
    pub fn verify_payload<'a>(&self, signed: impl Into<Signed<'a>>) -> Result<String> {
        let envelope = self.open(signed.into())?;
        let now = self.clock.now();

        if let Err(e) = validate_envelope(&envelope, self.algorithm, &self.key, now) {
            tracing::warn!(
                algorithm = %envelope.algorithm(),
                expected = %self.algorithm,
                "Rejected envelope: {}",
                e
            );
            return Err(e.into());
        }

        tracing::debug!(
            algorithm = %self.algorithm,
            payload_len = envelope.payload().len(),
            "verified envelope"
        );

        Ok(envelope.into_owned().into_payload())
    }

    fn open<'a>(&self, signed: Signed<'a>) -> Result<Cow<'a, Envelope>> {
        match signed {
            Signed::Envelope(envelope) => Ok(Cow::Borrowed(envelope)),
            Signed::Wire(wire) => Envelope::from_wire(wire).map(Cow::Owned).map_err(|e| {
                tracing::warn!("Corrupted envelope: {}", e);
                SignerError::Verify(VerifyError::from(e))
            }),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Signer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("algorithm", &self.algorithm)
            .field("domain", &self.domain)
            .field("clock", &self.clock)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
