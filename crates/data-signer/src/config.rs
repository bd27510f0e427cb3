//! Signer configuration.
//!
//! Everything here is safe to keep in a config file. The secret is never
//! part of it and is handed to [`Signer::new`](crate::Signer::new) directly.

use data_signer_core::{Algorithm, Domain};
use serde::{Deserialize, Serialize};

/// Configuration for a Signer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignerConfig {
    /// MAC algorithm used for signing and required on verification.
    pub algorithm: Algorithm,
    /// Optional domain label appended to the secret.
    pub domain: Option<Domain>,
}

impl SignerConfig {
    /// Configuration with the given algorithm and no domain.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            domain: None,
        }
    }

    /// Set the domain label.
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }
}
