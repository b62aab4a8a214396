//! Typed HTTP response dispatch for generated API clients.
//!
//! Generated client SDKs contain one response reader per API operation, each
//! a mechanical mapping from status code to payload shape. This crate
//! replaces that per-operation boilerplate with a single data-driven
//! [`OperationReader`]: declare the operation's status table once, then
//! dispatch completed responses through it.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use riposte::prelude::*;
//! use serde::Deserialize;
//! use std::collections::HashMap;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct RuntimeError {
//!     message: String,
//! }
//!
//! // Status table for one generated operation.
//! let reader = OperationReader::<RuntimeError>::builder("collectRunLogs")
//!     .success(200, PayloadKind::None)
//!     .success(204, PayloadKind::Untyped)
//!     .failure(403, PayloadKind::Untyped)
//!     .failure(404, PayloadKind::Untyped)
//!     .build();
//!
//! // After the transport completes an exchange:
//! let response = Response::from_bytes(
//!     403,
//!     HashMap::new(),
//!     Bytes::from(r#"{"detail":"forbidden"}"#),
//! );
//! let err = reader.read(response, &JsonConsumer).expect_err("failure status");
//! assert_eq!(err.status(), Some(403));
//! ```

mod handler;
pub mod prelude;
mod reader;

pub use handler::{Handler, HandlerResult};
pub use reader::{OperationReader, OperationReaderBuilder};

// Re-export core types
pub use riposte_core::{
    ApiFailure, BodyReader, Consumer, ContentType, DecodeError, FailureKind, JsonConsumer,
    Outcome, Payload, PayloadKind, ReadError, Response, from_json, read_all,
};

// Re-export http type for status codes
pub use riposte_core::StatusCode;
