//! # Data Signer Core
//!
//! Pure primitives for tamper-evident envelopes: the algorithm registry,
//! key material, MAC computation, the envelope type and its wire encoding.
//!
//! This crate contains no I/O, no clock and no logging. Callers pass the
//! current time in explicitly.
//!
//! ## Key Types
//!
//! - [`Algorithm`] - Closed registry of MAC primitives
//! - [`Secret`] / [`Domain`] / [`SigningKey`] - Key material
//! - [`Signature`] - Raw MAC output
//! - [`Envelope`] - Payload, algorithm, signature and optional expiry
//!
//! ## Wire Format
//!
//! Envelopes travel as a positional JSON array. See the [`wire`] module.

pub mod algorithm;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod mac;
pub mod types;
pub mod validation;
pub mod wire;

pub use algorithm::Algorithm;
pub use crypto::{Domain, Secret, Signature, SigningKey};
pub use envelope::Envelope;
pub use error::{CoreError, VerifyError};
pub use mac::{check_signature, generate_signature, signed_message};
pub use types::{Timestamp, Ttl};
pub use validation::{validate_envelope, validate_signature};
