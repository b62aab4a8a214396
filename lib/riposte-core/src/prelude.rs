//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use riposte_core::prelude::*;
//! ```

pub use crate::{
    ApiFailure, BodyReader, Consumer, ContentType, DecodeError, FailureKind, JsonConsumer,
    Outcome, Payload, PayloadKind, ReadError, Response, from_json, read_all,
};
