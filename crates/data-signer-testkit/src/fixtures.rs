//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use data_signer::{Algorithm, Envelope, FixedClock, Secret, Signer, SignerConfig, Timestamp};

/// Secret used by [`TestFixture::new`].
pub const FIXTURE_SECRET: &str = "secret";

/// Clock reading used by [`TestFixture::new`].
pub const FIXTURE_NOW: Timestamp = Timestamp(2);

/// A test fixture with a signer pinned to a fixed clock.
pub struct TestFixture {
    pub signer: Signer,
}

impl TestFixture {
    /// MD5 signer with secret `"secret"` at `now = 2`.
    pub fn new() -> Self {
        Self::with_algorithm(Algorithm::Md5)
    }

    /// Fixture secret and clock with another algorithm.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self::with_secret(FIXTURE_SECRET, algorithm)
    }

    /// A fixture with its own secret.
    ///
    /// Panics if `secret` is empty.
    pub fn with_secret(secret: &str, algorithm: Algorithm) -> Self {
        let secret = Secret::new(secret).expect("fixture secret must be non-empty");
        let signer = Signer::new(secret, SignerConfig::new(algorithm))
            .with_clock(FixedClock(FIXTURE_NOW));
        Self { signer }
    }

    /// The same fixture with a domain.
    ///
    /// Panics if `domain` is empty.
    pub fn in_domain(&self, domain: &str) -> Self {
        let signer = self
            .signer
            .with_domain(domain)
            .expect("fixture domain must be non-empty");
        Self { signer }
    }

    /// Sign `payload` with no expiry.
    pub fn make_immortal(&self, payload: &str) -> Envelope {
        self.signer
            .sign_payload(payload, None)
            .expect("immortal signing cannot fail")
    }

    /// Sign `payload` expiring `ttl` seconds after the fixture clock.
    ///
    /// Panics if `ttl` is zero.
    pub fn make_mortal(&self, payload: &str, ttl: u64) -> Envelope {
        self.signer
            .sign_payload(payload, Some(ttl))
            .expect("ttl must be non-zero")
    }

    /// The fixture signer with its clock moved to `now`.
    pub fn at(&self, now: i64) -> Signer {
        self.signer.with_now(Timestamp::from_secs(now))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create fixtures sharing one secret, each in its own domain.
pub fn multi_domain_fixtures(count: usize) -> Vec<TestFixture> {
    let base = TestFixture::new();
    (0..count)
        .map(|i| base.in_domain(&format!("domain-{}", i)))
        .collect()
}
