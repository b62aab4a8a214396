//! Content-type consumers.
//!
//! A [`Consumer`] decodes a response body stream into a destination value.
//! Consumers are stateless capabilities chosen by content-type negotiation
//! upstream and injected per call; they are never owned by a response.

use std::io::Read;

use bytes::Bytes;

use crate::DecodeError;

/// Content type a consumer decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain`).
    PlainText,
    /// Binary content type (`application/octet-stream`).
    OctetStream,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

/// Decoder from a body stream into a destination value.
///
/// The contract mirrors what generated operation readers need:
///
/// - the stream is read to completion in one blocking pass;
/// - a stream yielding zero bytes is success, and the destination is the
///   type's [`Default`] value — never an error;
/// - any other read or parse failure is a [`DecodeError`], propagated
///   unchanged to the caller of the operation read.
pub trait Consumer: Send + Sync {
    /// Content type this consumer decodes.
    fn content_type(&self) -> ContentType;

    /// Decode the body stream into a value of the requested shape.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if reading the stream fails or the bytes
    /// cannot be interpreted as `T`.
    fn consume<T>(&self, body: &mut dyn Read) -> Result<T, DecodeError>
    where
        T: serde::de::DeserializeOwned + Default;
}

/// JSON consumer backed by `serde_json`.
///
/// Decode errors carry the path to the offending field via
/// `serde_path_to_error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConsumer;

impl Consumer for JsonConsumer {
    fn content_type(&self) -> ContentType {
        ContentType::Json
    }

    fn consume<T>(&self, body: &mut dyn Read) -> Result<T, DecodeError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let bytes = read_all(body)?;
        if bytes.is_empty() {
            return Ok(T::default());
        }
        from_json(&bytes)
    }
}

/// Read a body stream to completion.
///
/// # Errors
///
/// Returns a [`DecodeError::Io`] if the stream fails mid-read.
pub fn read_all(body: &mut dyn Read) -> Result<Bytes, DecodeError> {
    let mut buffer = Vec::new();
    body.read_to_end(&mut buffer)?;
    Ok(Bytes::from(buffer))
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// # Errors
///
/// Returns a [`DecodeError::Json`] if deserialization fails, with the error
/// message including the path to the problematic field (e.g., "error.message").
///
/// # Example
///
/// ```
/// use riposte_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct RuntimeError { message: String }
///
/// let bytes = br#"{"message":"boom"}"#;
/// let err: RuntimeError = from_json(bytes).expect("deserialize");
/// assert_eq!(err, RuntimeError { message: "boom".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| DecodeError::json(err.path().to_string(), err.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert2::{check, let_assert};

    use super::*;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct RuntimeError {
        message: String,
    }

    #[test]
    fn content_type_as_str() {
        check!(ContentType::Json.as_str() == "application/json");
        check!(ContentType::PlainText.as_str() == "text/plain");
        check!(ContentType::OctetStream.as_str() == "application/octet-stream");
        check!(ContentType::Json.to_string() == "application/json");
    }

    #[test]
    fn json_consumer_decodes_typed() {
        let mut body = Cursor::new(r#"{"message":"boom"}"#);
        let decoded: RuntimeError = JsonConsumer.consume(&mut body).expect("decode");
        check!(
            decoded
                == RuntimeError {
                    message: "boom".to_string()
                }
        );
    }

    #[test]
    fn json_consumer_decodes_untyped() {
        let mut body = Cursor::new(r#"{"detail":"forbidden"}"#);
        let decoded: serde_json::Value = JsonConsumer.consume(&mut body).expect("decode");
        check!(decoded == serde_json::json!({"detail": "forbidden"}));
    }

    #[test]
    fn json_consumer_empty_stream_is_default() {
        let mut body = Cursor::new("");
        let decoded: serde_json::Value = JsonConsumer.consume(&mut body).expect("decode");
        check!(decoded == serde_json::Value::Null);

        let mut body = Cursor::new("");
        let decoded: RuntimeError = JsonConsumer.consume(&mut body).expect("decode");
        check!(decoded == RuntimeError::default());
    }

    #[test]
    fn json_consumer_malformed_body() {
        let mut body = Cursor::new("not json");
        let result: Result<RuntimeError, _> = JsonConsumer.consume(&mut body);
        let_assert!(Err(DecodeError::Json { .. }) = result);
    }

    #[test]
    fn json_consumer_missing_field_has_path() {
        #[derive(Debug, Default, serde::Deserialize)]
        struct Outer {
            #[allow(dead_code)]
            error: RuntimeError,
        }

        let mut body = Cursor::new(r#"{"error":{}}"#);
        let result: Result<Outer, _> = JsonConsumer.consume(&mut body);
        let_assert!(Err(err) = result);
        let message = err.to_string();
        check!(message.contains("error"), "path missing in: {message}");
        check!(message.contains("message"), "field missing in: {message}");
    }

    #[test]
    fn io_failure_surfaces_as_decode_error() {
        struct BrokenStream;

        impl Read for BrokenStream {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionAborted,
                    "transport aborted",
                ))
            }
        }

        let result: Result<serde_json::Value, _> = JsonConsumer.consume(&mut BrokenStream);
        let_assert!(Err(DecodeError::Io(_)) = result);
    }

    #[test]
    fn read_all_consumes_stream() {
        let mut body = Cursor::new("abc");
        let bytes = read_all(&mut body).expect("read");
        check!(bytes.as_ref() == b"abc");
        check!(read_all(&mut body).expect("read").is_empty());
    }
}
