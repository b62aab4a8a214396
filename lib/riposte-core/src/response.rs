//! HTTP response handling.
//!
//! [`Response`] represents a completed HTTP exchange as produced by a
//! transport layer: a status code, headers, and a readable body stream.
//! The body is consumed at most once, by the handler that dispatch selects.

use std::collections::HashMap;
use std::fmt;
use std::io::{Cursor, Read};

use bytes::Bytes;

/// A readable response body stream, as handed over by the transport layer.
pub type BodyReader = Box<dyn Read + Send>;

/// HTTP response with status, headers, and a body stream.
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: BodyReader,
}

impl Response {
    /// Creates a new response over a transport-produced body stream.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: BodyReader) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates a response over an in-memory body.
    #[must_use]
    pub fn from_bytes(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self::new(status, headers, Box::new(Cursor::new(body)))
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Canonical reason phrase for the status code, if one exists.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        canonical_reason(self.status)
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, BodyReader) {
        (self.status, self.headers, self.body)
    }

    /// Consume into the body stream.
    #[must_use]
    pub fn into_body(self) -> BodyReader {
        self.body
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &"<stream>")
            .finish()
    }
}

/// Canonical reason phrase for a numeric status code.
pub(crate) fn canonical_reason(status: u16) -> Option<&'static str> {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
}
