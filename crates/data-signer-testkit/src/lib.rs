//! # Data Signer Testkit
//!
//! Testing utilities for the data signer.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known signatures for every algorithm, with and without expiry and domain
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Signers pinned to a fixed clock
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the MAC output across implementations:
//!
//! ```rust
//! use data_signer_testkit::vectors::{all_vectors, generate_envelope_from_vector};
//!
//! for vector in all_vectors() {
//!     let envelope = generate_envelope_from_vector(&vector).unwrap();
//!     assert_eq!(envelope.signature().to_base64(), vector.expected_signature);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use data_signer_testkit::generators::{signer_from_params, SignParams};
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip(params: SignParams) {
//!         let signer = signer_from_params(&params);
//!         let envelope = signer.sign_payload(params.payload.clone(), params.ttl).unwrap();
//!         prop_assert_eq!(signer.verify_payload(&envelope).unwrap(), params.payload);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use data_signer_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let envelope = fixture.make_mortal("\"data\"", 60);
//! assert!(fixture.at(100).verify_payload(&envelope).unwrap_err().is_expired());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_domain_fixtures, TestFixture};
pub use generators::{signer_from_params, SignParams};
pub use vectors::{
    all_vectors, generate_envelope_from_vector, vectors_json, verify_all_vectors, GoldenVector,
};
