//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use riposte::prelude::*;
//! ```

pub use crate::{
    ApiFailure, Consumer, ContentType, DecodeError, FailureKind, Handler, HandlerResult,
    JsonConsumer, OperationReader, OperationReaderBuilder, Outcome, Payload, PayloadKind,
    ReadError, Response, from_json,
};
