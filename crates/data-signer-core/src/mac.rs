//! Signature computation and constant-time checking.
//!
//! The signed message is `payload ++ decimal(expires_at)`, with nothing
//! appended when the envelope never expires. The key is
//! `secret ++ domain` (see [`SigningKey`]).

use crc::{Crc, CRC_32_BZIP2};
use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::{Digest, KeyInit};
use hmac::{Mac, SimpleHmac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use whirlpool::Whirlpool;

use crate::algorithm::Algorithm;
use crate::crypto::{Signature, SigningKey};
use crate::error::CoreError;
use crate::types::Timestamp;

/// Block size used when CRC32 is keyed as an HMAC.
const CRC32_BLOCK_LEN: usize = 4;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

static CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_BZIP2);

/// Construct the signed message.
pub fn signed_message(payload: &str, expires_at: Option<Timestamp>) -> Vec<u8> {
    let mut message = payload.as_bytes().to_vec();
    if let Some(expires_at) = expires_at {
        message.extend_from_slice(expires_at.to_string().as_bytes());
    }
    message
}

/// Compute the signature for a payload and optional expiry.
pub fn generate_signature(
    algorithm: Algorithm,
    key: &SigningKey,
    payload: &str,
    expires_at: Option<Timestamp>,
) -> Result<Signature, CoreError> {
    let message = signed_message(payload, expires_at);
    compute_mac(algorithm, key.as_bytes(), &message).map(Signature::from_bytes)
}

/// Recompute the signature and compare it to `signature` in constant time.
pub fn check_signature(
    algorithm: Algorithm,
    key: &SigningKey,
    payload: &str,
    expires_at: Option<Timestamp>,
    signature: &Signature,
) -> Result<bool, CoreError> {
    let expected = generate_signature(algorithm, key, payload, expires_at)?;
    Ok(expected.as_bytes().ct_eq(signature.as_bytes()).into())
}

/// Compute the raw MAC for `message`.
pub fn compute_mac(algorithm: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, CoreError> {
    match algorithm {
        Algorithm::Crc32 => Ok(hmac_crc32(key, message)),
        Algorithm::Md5 => hmac_digest::<Md5>(key, message),
        Algorithm::Sha1 => hmac_digest::<Sha1>(key, message),
        Algorithm::Sha256 => hmac_digest::<Sha256>(key, message),
        Algorithm::Sha384 => hmac_digest::<Sha384>(key, message),
        Algorithm::Sha512 => hmac_digest::<Sha512>(key, message),
        Algorithm::Whirlpool => hmac_digest::<Whirlpool>(key, message),
    }
}

fn hmac_digest<D>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, CoreError>
where
    D: Digest + BlockSizeUser,
{
    let mut mac = <SimpleHmac<D> as KeyInit>::new_from_slice(key)
        .map_err(|e| CoreError::KeyInit(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// CRC32 digest, emitted little-endian.
fn crc32(parts: &[&[u8]]) -> [u8; 4] {
    let mut digest = CRC32.digest();
    for part in parts {
        digest.update(part);
    }
    digest.finalize().to_le_bytes()
}

/// RFC 2104 construction over CRC32 with a 4-byte block.
fn hmac_crc32(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut block = [0u8; CRC32_BLOCK_LEN];
    if key.len() > CRC32_BLOCK_LEN {
        block = crc32(&[key]);
    } else {
        block[..key.len()].copy_from_slice(key);
    }

    let inner_pad = block.map(|b| b ^ IPAD);
    let outer_pad = block.map(|b| b ^ OPAD);

    let inner = crc32(&[&inner_pad[..], message]);
    crc32(&[&outer_pad[..], &inner[..]]).to_vec()
}
