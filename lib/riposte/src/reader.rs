//! Operation readers.
//!
//! An [`OperationReader`] is the single entry point generated API clients
//! invoke after a request completes. It is built once per API operation from
//! a declarative table of `(status code, payload shape, outcome)` entries,
//! and thereafter dispatches any number of responses concurrently: the table
//! is read-only and the reader holds no per-call state.

use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::{debug, warn};

use riposte_core::{
    ApiFailure, Consumer, FailureKind, Outcome, Payload, PayloadKind, ReadError, Response,
};

use crate::handler::{Handler, HandlerResult, decode_payload};

/// Typed response dispatcher for one API operation.
///
/// `E` is the operation's declared error structure, decoded by the default
/// handler (and any status mapped with [`PayloadKind::Typed`]).
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use riposte::{JsonConsumer, OperationReader, PayloadKind, Response};
/// use serde::Deserialize;
/// use std::collections::HashMap;
///
/// #[derive(Debug, Default, Deserialize)]
/// struct RuntimeError {
///     message: String,
/// }
///
/// let reader = OperationReader::<RuntimeError>::builder("collectRunLogs")
///     .success(200, PayloadKind::None)
///     .success(204, PayloadKind::Untyped)
///     .failure(403, PayloadKind::Untyped)
///     .failure(404, PayloadKind::Untyped)
///     .build();
///
/// let response = Response::from_bytes(200, HashMap::new(), Bytes::new());
/// let payload = reader.read(response, &JsonConsumer).expect("success");
/// assert!(payload.is_none());
/// ```
#[derive(Debug)]
pub struct OperationReader<E> {
    operation: String,
    table: HashMap<u16, Handler>,
    default_kind: PayloadKind,
    _marker: PhantomData<fn() -> E>,
}

impl<E> OperationReader<E> {
    /// Creates a new [`OperationReaderBuilder`] for the named operation.
    #[must_use]
    pub fn builder(operation: impl Into<String>) -> OperationReaderBuilder<E> {
        OperationReaderBuilder::new(operation)
    }

    /// Name of the operation this reader serves.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Handler mapped to an exact status code, if any.
    #[must_use]
    pub fn handler(&self, status: u16) -> Option<&Handler> {
        self.table.get(&status)
    }

    /// Payload shape used by the default handler.
    #[must_use]
    pub const fn default_kind(&self) -> PayloadKind {
        self.default_kind
    }
}

impl<E> OperationReader<E>
where
    E: serde::de::DeserializeOwned + Default,
{
    /// Dispatch a completed response to its status handler.
    ///
    /// An exact status-table match always wins, even over the 2xx range
    /// check. Unmapped codes go to the default handler, which decodes per
    /// the default shape and then classifies: 2xx is success, anything else
    /// is an unmapped failure carrying the status code.
    ///
    /// # Errors
    ///
    /// [`ReadError::Decode`] if the body could not be decoded (dispatch is
    /// aborted, no partial result); [`ReadError::Api`] for mapped or
    /// unmapped failure statuses, with the decoded payload.
    pub fn read<C>(&self, response: Response, consumer: &C) -> Result<Payload<E>, ReadError<E>>
    where
        C: Consumer,
    {
        let (status, _headers, mut body) = response.into_parts();
        let mapped = self.table.contains_key(&status);
        debug!(operation = %self.operation, status, mapped, "dispatching response");

        if let Some(handler) = self.table.get(&status) {
            return match handler.handle(&mut body, consumer)? {
                HandlerResult::Success(payload) => Ok(payload),
                HandlerResult::Failure(payload) => Err(ReadError::Api(ApiFailure::new(
                    self.operation.clone(),
                    status,
                    FailureKind::Mapped,
                    payload,
                ))),
            };
        }

        let payload = decode_payload(self.default_kind, &mut body, consumer)?;
        if status / 100 == 2 {
            Ok(payload)
        } else {
            warn!(operation = %self.operation, status, "unmapped failure status");
            Err(ReadError::Api(ApiFailure::new(
                self.operation.clone(),
                status,
                FailureKind::Unmapped,
                payload,
            )))
        }
    }
}

/// Builder for [`OperationReader`] instances.
#[derive(Debug)]
pub struct OperationReaderBuilder<E> {
    operation: String,
    table: HashMap<u16, Handler>,
    default_kind: PayloadKind,
    _marker: PhantomData<fn() -> E>,
}

impl<E> OperationReaderBuilder<E> {
    /// Creates a builder for the named operation.
    ///
    /// The default handler starts with [`PayloadKind::Typed`], matching the
    /// usual generated "unexpected error response" case.
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            table: HashMap::new(),
            default_kind: PayloadKind::Typed,
            _marker: PhantomData,
        }
    }

    /// Maps a status code to a payload shape and outcome.
    ///
    /// Remapping a code replaces the previous entry.
    #[must_use]
    pub fn on(mut self, status: u16, kind: PayloadKind, outcome: Outcome) -> Self {
        self.table.insert(status, Handler::new(kind, outcome));
        self
    }

    /// Maps a status code as a success with the given payload shape.
    #[must_use]
    pub fn success(self, status: u16, kind: PayloadKind) -> Self {
        self.on(status, kind, Outcome::Success)
    }

    /// Maps a status code as a failure with the given payload shape.
    #[must_use]
    pub fn failure(self, status: u16, kind: PayloadKind) -> Self {
        self.on(status, kind, Outcome::Failure)
    }

    /// Sets the payload shape decoded by the default handler.
    #[must_use]
    pub fn default_kind(mut self, kind: PayloadKind) -> Self {
        self.default_kind = kind;
        self
    }

    /// Builds the immutable reader.
    #[must_use]
    pub fn build(self) -> OperationReader<E> {
        OperationReader {
            operation: self.operation,
            table: self.table,
            default_kind: self.default_kind,
            _marker: PhantomData,
        }
    }
}
