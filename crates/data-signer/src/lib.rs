//! # Data Signer
//!
//! Attach a tamper-evident, optionally expiring tag to a serialized value
//! so it can leave the trust boundary (cookie, URL parameter, cache key,
//! queue message) and be revalidated when it comes back.
//!
//! ## Overview
//!
//! - **Signer**: Owns the secret, algorithm, optional domain and clock
//! - **Envelope**: Payload text, algorithm tag, signature, optional expiry
//! - **Wire form**: `[payload, algorithm, base64(signature), expires_at?]`
//!
//! ## Key Concepts
//!
//! - **Domain separation**: `with_domain("x")` keys the MAC with
//!   `secret ++ "x"`, so envelopes from one domain never verify in another.
//! - **Expiry**: bound into the signed message, checked only after the
//!   signature is known to be good. `now == expires_at` is still valid.
//! - **Failures**: corrupted input, untrusted signature and expired
//!   envelopes are distinct error kinds. None is ever retried.
//!
//! ## Usage
//!
//! ```rust
//! use data_signer::{Algorithm, Secret, Signer, SignerConfig};
//!
//! let signer = Signer::new(
//!     Secret::new("correct horse battery staple").unwrap(),
//!     SignerConfig::new(Algorithm::Sha256),
//! );
//!
//! // Sign a value for one hour
//! let envelope = signer.sign(&vec![1, 2, 3], Some(3600)).unwrap();
//! let wire = envelope.to_wire();
//!
//! // ...later, when the wire string comes back
//! let value: Vec<u32> = signer.verify(wire.as_str()).unwrap();
//! assert_eq!(value, vec![1, 2, 3]);
//!
//! // Another domain rejects it
//! let other = signer.with_domain("other").unwrap();
//! assert!(other.verify::<Vec<u32>>(wire.as_str()).unwrap_err().is_untrusted());
//! ```
//!
//! ## Re-exports
//!
//! The core crate is re-exported as `data_signer::core`.

pub mod clock;
pub mod codec;
pub mod config;
pub mod error;
pub mod signer;

// Re-export the core crate
pub use data_signer_core as core;

// Re-export main types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{JsonCodec, PayloadCodec};
pub use config::SignerConfig;
pub use error::{Result, SignerError};
pub use signer::{Signed, Signer};

// Re-export commonly used core types
pub use data_signer_core::{
    Algorithm, CoreError, Domain, Envelope, Secret, Signature, Timestamp, VerifyError,
};
