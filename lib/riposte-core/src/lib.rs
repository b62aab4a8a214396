//! Core types for riposte typed HTTP response dispatch.
//!
//! This crate provides the primitives that operation readers are built on:
//! - [`Response`] - a completed HTTP exchange with a readable body stream
//! - [`Consumer`] and [`JsonConsumer`] - content-type decoders
//! - [`Payload`], [`PayloadKind`], [`Outcome`] - declared body shapes
//! - [`DecodeError`], [`ApiFailure`], [`ReadError`] - error handling
//! - [`StatusCode`] - HTTP status codes (re-exported from the `http` crate)
//!
//! Most users depend on the `riposte` crate, which adds the status table and
//! operation reader on top of these types.

mod consumer;
mod error;
mod payload;
pub mod prelude;
mod response;

pub use consumer::{Consumer, ContentType, JsonConsumer, from_json, read_all};
pub use error::{ApiFailure, DecodeError, FailureKind, ReadError};
pub use payload::{Outcome, Payload, PayloadKind};
pub use response::{BodyReader, Response};

// Re-export http crate type for status codes
pub use http::StatusCode;
