//! JSON text encoding and decoding
//!
//! Thin wrappers around serde_json. Errors are serde_json's own and are
//! never wrapped, so callers can inspect `classify()`, line and column.

pub mod config;

pub use config::{CodecConfig, CodecConfigBuilder};

use crate::option::Opt;
use log::{debug, trace};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Encode an option as compact JSON
pub fn encode<A: Serialize>(value: &Opt<A>) -> serde_json::Result<String> {
    Codec::default().encode(value)
}

/// Encode an option as indented JSON
pub fn encode_pretty<A: Serialize>(value: &Opt<A>) -> serde_json::Result<String> {
    Codec::new(CodecConfig::builder().pretty(true).build()).encode(value)
}

/// Decode an option from JSON text
pub fn decode<A: DeserializeOwned>(text: &str) -> serde_json::Result<Opt<A>> {
    Codec::default().decode(text)
}

/// Decode an option from an already-parsed JSON value
pub fn decode_value<A: DeserializeOwned>(value: Value) -> serde_json::Result<Opt<A>> {
    trace!("Decoding option from JSON value");
    serde_json::from_value(value)
}

/// JSON codec driven by a [`CodecConfig`]
///
/// Works on any serializable type, so records embedding `Opt` fields go
/// through the same path as bare options.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode<T>(&self, value: &T) -> serde_json::Result<String>
    where
        T: Serialize + ?Sized,
    {
        let text = if self.config.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        if self.config.log_payloads {
            debug!("Encoded JSON: {}", text);
        } else {
            trace!("Encoded {} bytes of JSON", text.len());
        }

        Ok(text)
    }

    pub fn decode<T>(&self, text: &str) -> serde_json::Result<T>
    where
        T: DeserializeOwned,
    {
        if self.config.log_payloads {
            debug!("Decoding JSON: {}", text);
        } else {
            trace!("Decoding {} bytes of JSON", text.len());
        }

        serde_json::from_str(text).map_err(|e| {
            debug!("JSON decode failed: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encode(&Opt::some(1)).unwrap(), "1");
        assert_eq!(encode(&Opt::<i32>::none()).unwrap(), "null");
    }

    #[test]
    fn test_encode_pretty() {
        let text = encode_pretty(&Opt::some(vec![1, 2])).unwrap();
        assert_eq!(text, "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode::<i32>("7").unwrap(), Opt::some(7));
        assert_eq!(decode::<i32>("null").unwrap(), Opt::none());
        assert!(decode::<i32>("\"seven\"").is_err());
    }

    #[test]
    fn test_decode_value() {
        assert_eq!(decode_value::<String>(json!("abc")).unwrap(), Opt::some("abc".to_string()));
        assert_eq!(decode_value::<String>(Value::Null).unwrap(), Opt::none());
    }

    #[test]
    fn test_codec_uses_config() {
        let codec = Codec::new(CodecConfig::builder().pretty(true).log_payloads(true).build());
        assert!(codec.config().pretty);

        let text = codec.encode(&json!({ "phone": Opt::<String>::none() })).unwrap();
        assert_eq!(text, "{\n  \"phone\": null\n}");

        let back: Value = codec.decode(&text).unwrap();
        assert_eq!(back, json!({ "phone": null }));
    }
}
