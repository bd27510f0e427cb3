//! Compact positional wire encoding for envelopes.
//!
//! An envelope travels as a JSON array read strictly by position:
//!
//! ```text
//! [payload, algorithm, base64(signature)]
//! [payload, algorithm, base64(signature), expires_at]
//! ```
//!
//! Decoding rules:
//! - The outer value must be an array of at least three elements
//! - Elements 0 to 2 must be strings
//! - Element 3, when present, must be an integer or `null` (no expiry)
//! - Elements past index 3 are ignored
//! - The algorithm must be in the registry and the signature valid base64

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::algorithm::Algorithm;
use crate::crypto::Signature;
use crate::envelope::Envelope;
use crate::error::CoreError;
use crate::types::Timestamp;

/// Element positions in the wire array.
mod positions {
    pub const PAYLOAD: usize = 0;
    pub const ALGORITHM: usize = 1;
    pub const SIGNATURE: usize = 2;
    pub const EXPIRES_AT: usize = 3;

    /// Elements that must always be present.
    pub const REQUIRED: usize = 3;
}

/// Encode an envelope to its wire string.
pub fn encode(envelope: &Envelope) -> String {
    let mut fields = Vec::with_capacity(positions::EXPIRES_AT + 1);
    fields.push(Value::String(envelope.payload().to_string()));
    fields.push(Value::String(envelope.algorithm().as_str().to_string()));
    fields.push(Value::String(envelope.signature().to_base64()));
    if let Some(expires_at) = envelope.expires_at() {
        fields.push(Value::from(expires_at.as_secs()));
    }
    Value::Array(fields).to_string()
}

/// Decode a wire string into an envelope.
pub fn decode(s: &str) -> Result<Envelope, CoreError> {
    let raw: RawEnvelope =
        serde_json::from_str(s).map_err(|e| CoreError::MalformedEnvelope(e.to_string()))?;
    Envelope::try_from(raw)
}

/// The wire array with its fields still untyped.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawEnvelope {
    payload: String,
    algorithm: String,
    signature: String,
    expires_at: Option<i64>,
}

impl TryFrom<RawEnvelope> for Envelope {
    type Error = CoreError;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        let algorithm = Algorithm::from_name(&raw.algorithm)?;
        let signature = Signature::from_base64(&raw.signature)?;
        Ok(Envelope::new(
            raw.payload,
            algorithm,
            signature,
            raw.expires_at.map(Timestamp::from_secs),
        ))
    }
}

struct RawEnvelopeVisitor;

impl<'de> Visitor<'de> for RawEnvelopeVisitor {
    type Value = RawEnvelope;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "an array of at least {} elements [payload, algorithm, signature, expires_at?]",
            positions::REQUIRED
        )
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RawEnvelope, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let payload: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(positions::PAYLOAD, &self))?;
        let algorithm: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(positions::ALGORITHM, &self))?;
        let signature: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(positions::SIGNATURE, &self))?;
        let expires_at: Option<i64> = seq.next_element::<Option<i64>>()?.flatten();

        // Trailing elements are tolerated but never interpreted.
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(RawEnvelope {
            payload,
            algorithm,
            signature,
            expires_at,
        })
    }
}

impl<'de> Deserialize<'de> for RawEnvelope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RawEnvelopeVisitor)
    }
}

impl Serialize for Envelope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = positions::REQUIRED + usize::from(self.expires_at().is_some());
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(self.payload())?;
        seq.serialize_element(self.algorithm().as_str())?;
        seq.serialize_element(&self.signature().to_base64())?;
        if let Some(expires_at) = self.expires_at() {
            seq.serialize_element(&expires_at.as_secs())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEnvelope::deserialize(deserializer)?;
        Envelope::try_from(raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B64: &str = "7TJ3nATVM5bTQ9Zg6Ie/sg==";

    fn envelope(expires_at: Option<i64>) -> Envelope {
        Envelope::new(
            "s:4:\"data\";",
            Algorithm::Md5,
            Signature::from_base64(B64).unwrap(),
            expires_at.map(Timestamp::from_secs),
        )
    }

    #[test]
    fn test_encode_immortal() {
        assert_eq!(
            encode(&envelope(None)),
            r#"["s:4:\"data\";","md5","7TJ3nATVM5bTQ9Zg6Ie/sg=="]"#
        );
    }

    #[test]
    fn test_encode_mortal() {
        assert_eq!(
            encode(&envelope(Some(123))),
            r#"["s:4:\"data\";","md5","7TJ3nATVM5bTQ9Zg6Ie/sg==",123]"#
        );
    }

    #[test]
    fn test_decode_accepts_escaped_slashes() {
        let wire = r#"["s:4:\"data\";","md5","7TJ3nATVM5bTQ9Zg6Ie\/sg==",123]"#;
        assert_eq!(decode(wire).unwrap(), envelope(Some(123)));
    }

    #[test]
    fn test_decode_null_expiry_is_absent() {
        let wire = r#"["s:4:\"data\";","md5","7TJ3nATVM5bTQ9Zg6Ie/sg==",null]"#;
        assert_eq!(decode(wire).unwrap(), envelope(None));
    }

    #[test]
    fn test_decode_ignores_trailing_elements() {
        let wire = r#"["s:4:\"data\";","md5","7TJ3nATVM5bTQ9Zg6Ie/sg==",123,{"x":[1,2]},"y"]"#;
        assert_eq!(decode(wire).unwrap(), envelope(Some(123)));
    }

    #[test]
    fn test_decode_rejects_short_arrays() {
        for wire in [r#"[]"#, r#"["p"]"#, r#"["p","md5"]"#] {
            assert!(
                matches!(decode(wire), Err(CoreError::MalformedEnvelope(_))),
                "accepted {wire}"
            );
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let inputs = [
            "",
            "not json",
            r#"{"d":"s:4:\"data\";","a":"md5","s":"7TJ3nATVM5bTQ9Zg6Ie/sg=="}"#,
            r#"["s:4:\"data\";","md5","7TJ3nATVM5bTQ9Zg6Ie/sg==""#,
            r#"[1,"md5","7TJ3nATVM5bTQ9Zg6Ie/sg=="]"#,
            r#"["p",["md5"],"7TJ3nATVM5bTQ9Zg6Ie/sg=="]"#,
            r#"["p","md5","7TJ3nATVM5bTQ9Zg6Ie/sg==","123"]"#,
            r#"["p","md5","7TJ3nATVM5bTQ9Zg6Ie/sg==",1.5]"#,
            r#"["p","md5","7TJ3nATVM5bTQ9Zg6Ie/sg=="] trailing"#,
        ];
        for wire in inputs {
            assert!(
                matches!(decode(wire), Err(CoreError::MalformedEnvelope(_))),
                "accepted {wire:?}"
            );
        }
    }

    #[test]
    fn test_decode_unknown_algorithm() {
        let wire = r#"["p","rot13","7TJ3nATVM5bTQ9Zg6Ie/sg=="]"#;
        assert!(matches!(
            decode(wire),
            Err(CoreError::UnknownAlgorithm(name)) if name == "rot13"
        ));
    }

    #[test]
    fn test_decode_bad_signature_encoding() {
        let wire = r#"["p","md5","%%%"]"#;
        assert!(matches!(
            decode(wire),
            Err(CoreError::InvalidSignatureEncoding(_))
        ));
    }

    #[test]
    fn test_serde_embeds_positional_array() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Cookie {
            session: Envelope,
        }

        let cookie = Cookie {
            session: envelope(Some(5)),
        };
        let json = serde_json::to_string(&cookie).unwrap();
        assert_eq!(
            json,
            r#"{"session":["s:4:\"data\";","md5","7TJ3nATVM5bTQ9Zg6Ie/sg==",5]}"#
        );
        let back: Cookie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cookie);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decode_never_panics(input in ".{0,128}") {
                let _ = decode(&input);
            }

            #[test]
            fn encode_decode_identity(
                payload in ".{0,64}",
                sig in prop::collection::vec(any::<u8>(), 0..64),
                expires_at in prop::option::of(any::<i64>()),
            ) {
                let envelope = Envelope::new(
                    payload,
                    Algorithm::Sha256,
                    Signature::from_bytes(sig),
                    expires_at.map(Timestamp::from_secs),
                );
                prop_assert_eq!(decode(&encode(&envelope)).unwrap(), envelope);
            }
        }
    }
}
