//! Proptest generators for property-based testing.

use proptest::prelude::*;

use data_signer::{Signer, SignerConfig};
use data_signer_core::{Algorithm, Domain, Secret, Signature, Timestamp};

/// Generate any supported algorithm.
pub fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

/// Generate a non-empty secret.
pub fn secret() -> impl Strategy<Value = Secret> {
    prop::collection::vec(any::<u8>(), 1..=128)
        .prop_filter_map("secret must be non-empty", |bytes| Secret::new(bytes).ok())
}

/// Generate a domain label.
pub fn domain() -> impl Strategy<Value = Domain> {
    "[a-z][a-z0-9._-]{0,31}".prop_filter_map("domain must be non-empty", |s| Domain::new(s).ok())
}

/// Generate a random signature of the given length.
pub fn signature(len: usize) -> impl Strategy<Value = Signature> {
    prop::collection::vec(any::<u8>(), len).prop_map(Signature::from_bytes)
}

/// Generate arbitrary payload text, including quotes and slashes.
pub fn payload() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,256}",
        "[a-z]:[0-9]+:\"[^\"]{0,32}\";",
        Just(String::new()),
        Just("\"/\\\\\u{0}\u{2028}".to_string()),
    ]
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = Timestamp> {
    (0i64..=i64::MAX / 2).prop_map(Timestamp::from_secs)
}

/// Generate a TTL that cannot overflow from a [`timestamp`].
pub fn ttl() -> impl Strategy<Value = u64> {
    1u64..=(u32::MAX as u64)
}

/// Parameters for generating a signer and a signing request.
#[derive(Debug, Clone)]
pub struct SignParams {
    pub secret: Secret,
    pub algorithm: Algorithm,
    pub domain: Option<Domain>,
    pub now: Timestamp,
    pub payload: String,
    pub ttl: Option<u64>,
}

impl Arbitrary for SignParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            secret(),
            algorithm(),
            prop::option::of(domain()),
            timestamp(),
            payload(),
            prop::option::of(ttl()),
        )
            .prop_map(|(secret, algorithm, domain, now, payload, ttl)| SignParams {
                secret,
                algorithm,
                domain,
                now,
                payload,
                ttl,
            })
            .boxed()
    }
}

/// Build a Signer pinned at `params.now`.
pub fn signer_from_params(params: &SignParams) -> Signer {
    let mut config = SignerConfig::new(params.algorithm);
    config.domain = params.domain.clone();
    Signer::new(params.secret.clone(), config).with_now(params.now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_signer_core::Envelope;

    proptest! {
        #[test]
        fn test_sign_verify_roundtrip(params: SignParams) {
            let signer = signer_from_params(&params);
            let envelope = signer.sign_payload(params.payload.clone(), params.ttl).unwrap();

            prop_assert_eq!(signer.verify_payload(&envelope).unwrap(), params.payload.clone());
            let wire = envelope.to_wire();
            prop_assert_eq!(signer.verify_payload(wire.as_str()).unwrap(), params.payload);
        }

        #[test]
        fn test_signature_deterministic(params: SignParams) {
            let e1 = signer_from_params(&params).sign_payload(params.payload.clone(), params.ttl).unwrap();
            let e2 = signer_from_params(&params).sign_payload(params.payload.clone(), params.ttl).unwrap();

            prop_assert_eq!(e1.to_wire(), e2.to_wire());
        }

        #[test]
        fn test_wire_roundtrip(params: SignParams) {
            let envelope = signer_from_params(&params).sign_payload(params.payload, params.ttl).unwrap();
            let decoded = Envelope::from_wire(&envelope.to_wire()).unwrap();

            prop_assert_eq!(decoded, envelope);
        }

        #[test]
        fn test_tampered_payload_untrusted(params in any::<SignParams>(), extra in "[a-z]{1,8}") {
            let signer = signer_from_params(&params);
            let envelope = signer.sign_payload(params.payload.clone(), params.ttl).unwrap();

            let tampered = Envelope::new(
                format!("{}{}", params.payload, extra),
                envelope.algorithm(),
                envelope.signature().clone(),
                envelope.expires_at(),
            );
            prop_assert!(signer.verify_payload(&tampered).unwrap_err().is_untrusted());
        }

        #[test]
        fn test_random_signature_untrusted(params in any::<SignParams>(), seed in any::<u64>()) {
            let signer = signer_from_params(&params);
            let envelope = signer.sign_payload(params.payload.clone(), params.ttl).unwrap();

            let mut bytes = envelope.signature().as_bytes().to_vec();
            let idx = (seed as usize) % bytes.len();
            bytes[idx] ^= 1 << (seed % 8);

            let forged = Envelope::new(
                params.payload,
                envelope.algorithm(),
                Signature::from_bytes(bytes),
                envelope.expires_at(),
            );
            prop_assert!(signer.verify_payload(&forged).unwrap_err().is_untrusted());
        }

        #[test]
        fn test_expired_after_ttl(params in any::<SignParams>(), ttl_secs in ttl()) {
            let signer = signer_from_params(&params);
            let envelope = signer.sign_payload(params.payload, Some(ttl_secs)).unwrap();
            let expires_at = envelope.expires_at().unwrap();

            prop_assert!(signer.with_now(expires_at).verify_payload(&envelope).is_ok());
            let later = Timestamp::from_secs(expires_at.as_secs() + 1);
            prop_assert!(signer.with_now(later).verify_payload(&envelope).unwrap_err().is_expired());
        }

        #[test]
        fn test_other_domain_untrusted(params in any::<SignParams>(), other in domain()) {
            prop_assume!(params.domain.as_ref() != Some(&other));

            let signer = signer_from_params(&params);
            let envelope = signer.sign_payload(params.payload, params.ttl).unwrap();
            let foreign = signer.with_domain(other.as_str()).unwrap();

            prop_assert!(foreign.verify_payload(&envelope).unwrap_err().is_untrusted());
        }
    }
}
