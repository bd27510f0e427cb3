//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the exact MAC output for every algorithm, with and
//! without expiry and domain, so that any implementation of the envelope
//! protocol can be checked against them.

use data_signer_core::{
    generate_signature, Algorithm, CoreError, Domain, Envelope, Secret, SigningKey, Timestamp,
};
use serde::Serialize;

/// PHP-serialized string `"data"`, the payload most vectors sign.
pub const SERIALIZED_DATA: &str = "s:4:\"data\";";

/// PHP-serialized empty string.
pub const SERIALIZED_EMPTY: &str = "s:0:\"\";";

/// JSON string `"data"`.
pub const JSON_DATA: &str = "\"data\"";

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// MAC algorithm.
    pub algorithm: Algorithm,
    /// Secret bytes (as text).
    pub secret: &'static str,
    /// Optional domain label.
    pub domain: Option<&'static str>,
    /// Payload text.
    pub payload: &'static str,
    /// Absolute expiry in seconds.
    pub expires_at: Option<i64>,
    /// Expected signature (standard base64).
    pub expected_signature: &'static str,
}

const fn vector(
    name: &'static str,
    algorithm: Algorithm,
    expires_at: Option<i64>,
    expected_signature: &'static str,
) -> GoldenVector {
    GoldenVector {
        name,
        algorithm,
        secret: "secret",
        domain: None,
        payload: SERIALIZED_DATA,
        expires_at,
        expected_signature,
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        vector("md5", Algorithm::Md5, None, "7TJ3nATVM5bTQ9Zg6Ie/sg=="),
        vector("md5 expires 1", Algorithm::Md5, Some(1), "Tr1i3kRJwXGxGidqm7oWtg=="),
        vector("md5 expires 3", Algorithm::Md5, Some(3), "LEl4MqEXlUH7fqJ10vZ17Q=="),
        vector("md5 expires 5", Algorithm::Md5, Some(5), "O5FtDRTCx5VPs+RQB1Mbiw=="),
        vector("md5 expires -1", Algorithm::Md5, Some(-1), "0fiNSHKqJtPp+gPd8fTe1g=="),
        vector("sha1", Algorithm::Sha1, None, "rZhsdKv1/VVFRRLMMjXqbBMzvFY="),
        vector("sha1 expires 1", Algorithm::Sha1, Some(1), "KwaSbe2/NU83li1SqnCytfhYYuo="),
        vector(
            "sha256",
            Algorithm::Sha256,
            None,
            "dlDY5cb2myAVOBi7EWPr5fAnGpIgywPdX3cA8boXsos=",
        ),
        vector(
            "sha256 expires 1",
            Algorithm::Sha256,
            Some(1),
            "LAiPZKAIw5gheBYGzbKATWOyFEamkAcgJeVo9Ww6YKM=",
        ),
        vector(
            "sha384",
            Algorithm::Sha384,
            None,
            "iKvKxN6l/tt4t5QOmN826873vyyUYNpREBBL+V/W9PObaYuIJ/gve0cM7MTfTVt8",
        ),
        vector(
            "sha384 expires 1",
            Algorithm::Sha384,
            Some(1),
            "Z2o0P06vOWNux8hf3E7A+5iqik1BrAqSyQksnP+yObe6mZg3ERbtFByzpfWxXMiK",
        ),
        vector(
            "sha512",
            Algorithm::Sha512,
            None,
            "LC91vK9wCvFsvgmWXrOTjRsuz0OwEutALU+iG+PrOF+M580h5GXy4eIHAgDH+7wTStiWOXnr+PFyRmut3koShw==",
        ),
        vector(
            "sha512 expires 1",
            Algorithm::Sha512,
            Some(1),
            "lHQ6v3JJUrjTk0duQhJPDd1p3LJZiXA20x8zgPWbUGeeQCizQZOHdoQJaa6TyvkQRJ3PPxBt45QvTGnsbZB/ZQ==",
        ),
        vector(
            "whirlpool",
            Algorithm::Whirlpool,
            None,
            "CuQ0i2+3m6wwmDzp/qrRAzc+K/FjA6SLSxWaYnxwswGRwvb8OZ+NGWMQLhI8EnLtzHKBK31tC8cw2eIA/RqwEQ==",
        ),
        vector(
            "whirlpool expires 1",
            Algorithm::Whirlpool,
            Some(1),
            "xRpSDcEJE2+ZHpO0UFzFVaEt2XdmSFVPwfv8VCgkuEF0bDKDOHQQT/DyjJGiTM6UI0uIolj59cY3BmdfUORaHg==",
        ),
        vector("crc32", Algorithm::Crc32, None, "JCVcbQ=="),
        vector("crc32 expires 1", Algorithm::Crc32, Some(1), "O6XitA=="),
        GoldenVector {
            name: "crc32 key shorter than block",
            secret: "abc",
            ..vector("", Algorithm::Crc32, None, "wih+Nw==")
        },
        // Produced by PHP hash_hmac() and base64_encode().
        GoldenVector {
            name: "crc32 php empty string",
            payload: SERIALIZED_EMPTY,
            ..vector("", Algorithm::Crc32, None, "U3iGng==")
        },
        GoldenVector {
            name: "sha1 php empty string",
            payload: SERIALIZED_EMPTY,
            ..vector("", Algorithm::Sha1, None, "XD+VGNBrMTz7RibfIAn+icyVDr0=")
        },
        GoldenVector {
            name: "sha256 php empty string",
            payload: SERIALIZED_EMPTY,
            ..vector(
                "",
                Algorithm::Sha256,
                None,
                "79nnfiu+oOz5L8vBntu+QtxEU4hk4HFaQiWuKaGkidM=",
            )
        },
        GoldenVector {
            name: "sha384 php empty string",
            payload: SERIALIZED_EMPTY,
            ..vector(
                "",
                Algorithm::Sha384,
                None,
                "s8sfF9TUaNxe5aFRc3y8c3SfwlKCCClAyE+G3hBetcHXnh4lVESdq/L0JKmpyYGt",
            )
        },
        GoldenVector {
            name: "sha512 php empty string",
            payload: SERIALIZED_EMPTY,
            ..vector(
                "",
                Algorithm::Sha512,
                None,
                "Y4K9erMW62MV36W5RhFD7iIJn2V+rAthjNnqiGz+XVx8M+5qBAHNNYt73hGWtGnDym8aRjSgbSiRlC1FwbyKsg==",
            )
        },
        GoldenVector {
            name: "whirlpool php empty string",
            payload: SERIALIZED_EMPTY,
            ..vector(
                "",
                Algorithm::Whirlpool,
                None,
                "rdOL3cqJpYYbkKK3FZhlIGdL2v3NgQJXly4Sj9C33RBam4DX6yMvqGQFYP0A15FlcxGch/00wk0d7CltYQUn9g==",
            )
        },
        GoldenVector {
            name: "md5 php null",
            payload: "N;",
            ..vector("", Algorithm::Md5, None, "IeV2LaJR49V6Gc/tEHMunA==")
        },
        GoldenVector {
            name: "md5 php int",
            payload: "i:123;",
            ..vector("", Algorithm::Md5, None, "zBAsOYHoeRikD0k8IvnhWA==")
        },
        GoldenVector {
            name: "md5 php array",
            payload: "a:2:{i:0;i:1;i:1;i:2;}",
            ..vector("", Algorithm::Md5, None, "i3xbgkKBJZCPbGvFIxO05A==")
        },
        GoldenVector {
            name: "md5 domain A",
            domain: Some("A"),
            ..vector("", Algorithm::Md5, None, "/yYSjt33OKIVi2/qTUwCNg==")
        },
        GoldenVector {
            name: "md5 domain B",
            domain: Some("B"),
            ..vector("", Algorithm::Md5, None, "fpiS/l8JyzX81QTE+d23BQ==")
        },
        GoldenVector {
            name: "md5 json payload",
            payload: JSON_DATA,
            ..vector("", Algorithm::Md5, None, "f1DNspHOESk7g7ADB3AGmQ==")
        },
        GoldenVector {
            name: "sha256 json payload expires 3",
            payload: JSON_DATA,
            ..vector(
                "",
                Algorithm::Sha256,
                Some(3),
                "aQlfcbGxwudpym7Hc41DQIdWeLKZp7udL6VY47by6BA=",
            )
        },
    ]
}

/// All golden vectors as pretty-printed JSON, for other implementations.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}

/// Sign the vector's payload and wrap it in an envelope.
pub fn generate_envelope_from_vector(vector: &GoldenVector) -> Result<Envelope, CoreError> {
    let secret = Secret::new(vector.secret)?;
    let domain = vector.domain.map(Domain::new).transpose()?;
    let key = SigningKey::derive(&secret, domain.as_ref());
    let expires_at = vector.expires_at.map(Timestamp::from_secs);

    let signature = generate_signature(vector.algorithm, &key, vector.payload, expires_at)?;
    Ok(Envelope::new(
        vector.payload,
        vector.algorithm,
        signature,
        expires_at,
    ))
}

/// Verify all golden vectors against their expected signatures.
///
/// Returns `(name, matches, actual_signature)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match generate_envelope_from_vector(v) {
            Ok(envelope) => {
                let actual = envelope.signature().to_base64();
                (v.name.to_string(), actual == v.expected_signature, actual)
            }
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}
