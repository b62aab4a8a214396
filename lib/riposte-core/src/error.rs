//! Error types for riposte.

use std::fmt;

use derive_more::{Display, Error, From};

use crate::payload::Payload;
use crate::response::canonical_reason;

// ============================================================================
// Decode Errors
// ============================================================================

/// Error produced while decoding a response body.
///
/// A decode error always aborts dispatch: the caller sees it undecorated,
/// with no partial payload constructed.
#[derive(Debug, Display, Error, From)]
pub enum DecodeError {
    /// The body stream failed mid-read (premature termination, transport abort).
    #[display("I/O error reading response body: {_0}")]
    Io(std::io::Error),

    /// The body bytes could not be interpreted as the declared shape.
    #[display("JSON decode error at '{path}': {message}")]
    #[from(skip)]
    Json {
        /// JSON path to the offending field (e.g., "error.details").
        path: String,
        /// Error message.
        message: String,
    },
}

impl DecodeError {
    /// Create a JSON decode error with path context.
    #[must_use]
    pub fn json(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Json {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// API Failures
// ============================================================================

/// How a failure status code was classified during dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The status code had an explicit entry in the status table.
    Mapped,
    /// The status code fell through to the default handler and was not 2xx.
    Unmapped,
}

/// A non-success response, structurally decoded.
///
/// This is the expected error channel of an operation read: a recognized
/// (or default-handled) failure status with its decoded payload. It is not
/// control flow; callers inspect it like any other error value.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure<E> {
    operation: String,
    status: u16,
    kind: FailureKind,
    payload: Payload<E>,
}

impl<E> ApiFailure<E> {
    /// Creates a new failure for the given operation and status code.
    #[must_use]
    pub fn new(
        operation: impl Into<String>,
        status: u16,
        kind: FailureKind,
        payload: Payload<E>,
    ) -> Self {
        Self {
            operation: operation.into(),
            status,
            kind,
            payload,
        }
    }

    /// Name of the operation that produced this failure.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Originating HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status code was explicitly mapped or default-handled.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Decoded failure payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload<E> {
        &self.payload
    }

    /// Consume into the decoded payload.
    #[must_use]
    pub fn into_payload(self) -> Payload<E> {
        self.payload
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
}

impl<E> fmt::Display for ApiFailure<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = canonical_reason(self.status).unwrap_or("Unknown");
        write!(
            formatter,
            "[{}] HTTP error {} {reason}",
            self.operation, self.status
        )
    }
}

impl<E: fmt::Debug> std::error::Error for ApiFailure<E> {}

// ============================================================================
// Read Errors
// ============================================================================

/// Error side of an operation read.
///
/// Either the body could not be decoded at all ([`ReadError::Decode`]), or
/// the server answered with a failure status ([`ReadError::Api`]).
#[derive(Debug)]
pub enum ReadError<E> {
    /// Body decoding failed; dispatch was aborted.
    Decode(DecodeError),
    /// The server returned a failure status with a decoded payload.
    Api(ApiFailure<E>),
}

impl<E> ReadError<E> {
    /// Originating HTTP status code, if this is an API failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Decode(_) => None,
            Self::Api(failure) => Some(failure.status()),
        }
    }

    /// Returns the API failure, if any.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiFailure<E>> {
        match self {
            Self::Decode(_) => None,
            Self::Api(failure) => Some(failure),
        }
    }

    /// Consume into the API failure, if any.
    #[must_use]
    pub fn into_api(self) -> Option<ApiFailure<E>> {
        match self {
            Self::Decode(_) => None,
            Self::Api(failure) => Some(failure),
        }
    }

    /// Returns `true` if this is a decode error.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl<E> fmt::Display for ReadError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(formatter, "{err}"),
            Self::Api(failure) => write!(formatter, "{failure}"),
        }
    }
}

impl<E: fmt::Debug + 'static> std::error::Error for ReadError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Api(failure) => Some(failure),
        }
    }
}

impl<E> From<DecodeError> for ReadError<E> {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        let err = DecodeError::json("error.details", "missing field `details`");
        assert_eq!(
            err.to_string(),
            "JSON decode error at 'error.details': missing field `details`"
        );

        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream aborted");
        let err = DecodeError::from(io);
        assert_eq!(
            err.to_string(),
            "I/O error reading response body: stream aborted"
        );
    }

    #[test]
    fn api_failure_display() {
        let failure: ApiFailure<serde_json::Value> =
            ApiFailure::new("collectRunLogs", 403, FailureKind::Mapped, Payload::None);
        assert_eq!(
            failure.to_string(),
            "[collectRunLogs] HTTP error 403 Forbidden"
        );

        let failure: ApiFailure<serde_json::Value> =
            ApiFailure::new("collectRunLogs", 599, FailureKind::Unmapped, Payload::None);
        assert_eq!(
            failure.to_string(),
            "[collectRunLogs] HTTP error 599 Unknown"
        );
    }

    #[test]
    fn api_failure_status_checks() {
        let failure: ApiFailure<()> = ApiFailure::new("op", 404, FailureKind::Mapped, Payload::None);
        assert_eq!(failure.status(), 404);
        assert!(failure.is_client_error());
        assert!(!failure.is_server_error());

        let failure: ApiFailure<()> =
            ApiFailure::new("op", 503, FailureKind::Unmapped, Payload::None);
        assert!(failure.is_server_error());
        assert_eq!(failure.kind(), FailureKind::Unmapped);
    }

    #[test]
    fn read_error_accessors() {
        let err: ReadError<()> = ReadError::Api(ApiFailure::new(
            "op",
            500,
            FailureKind::Unmapped,
            Payload::None,
        ));
        assert_eq!(err.status(), Some(500));
        assert!(err.as_api().is_some());
        assert!(!err.is_decode());

        let err: ReadError<()> = DecodeError::json("", "syntax error").into();
        assert_eq!(err.status(), None);
        assert!(err.is_decode());
        assert!(err.into_api().is_none());
    }
}
