//! Payload codecs: turning caller values into signable text and back.
//!
//! The signer never interprets payloads. A codec is the only component
//! that knows how values are represented.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::error::{Result, SignerError};

/// Converts values to and from payload text.
pub trait PayloadCodec: Clone + Send + Sync + fmt::Debug {
    /// Serialize a value into payload text.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String>;

    /// Deserialize payload text into a value.
    fn decode<T: DeserializeOwned>(&self, payload: &str) -> Result<T>;
}

/// Compact JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(|e| SignerError::Codec(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, payload: &str) -> Result<T> {
        serde_json::from_str(payload).map_err(|e| SignerError::Codec(e.to_string()))
    }
}
