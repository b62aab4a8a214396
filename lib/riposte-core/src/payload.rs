//! Payload shapes and outcomes.
//!
//! The shape a status code's body decodes into, and whether that status is
//! modeled as success or failure, are fixed when the operation is defined —
//! they never vary at runtime. [`Payload`] is the decoded result, created
//! fresh per response and handed straight back to the caller.

use serde_json::Value;

/// Declared shape of a response body for one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// The body is discarded without being read.
    None,
    /// The body decodes into a generic JSON value.
    Untyped,
    /// The body decodes into the operation's typed error structure.
    Typed,
}

/// Whether a mapped status code is modeled as success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The payload is returned on the success channel.
    Success,
    /// The payload is returned on the error channel.
    Failure,
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<E> {
    /// No payload; the body was not read.
    None,
    /// Generic JSON payload.
    Untyped(Value),
    /// Typed payload of the operation's declared error shape.
    Typed(E),
}

impl<E> Payload<E> {
    /// Returns `true` if there is no payload.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the generic JSON payload, if any.
    #[must_use]
    pub const fn as_untyped(&self) -> Option<&Value> {
        match self {
            Self::Untyped(value) => Some(value),
            Self::None | Self::Typed(_) => None,
        }
    }

    /// Returns the typed payload, if any.
    #[must_use]
    pub const fn as_typed(&self) -> Option<&E> {
        match self {
            Self::Typed(value) => Some(value),
            Self::None | Self::Untyped(_) => None,
        }
    }

    /// Consume into the generic JSON payload, if any.
    #[must_use]
    pub fn into_untyped(self) -> Option<Value> {
        match self {
            Self::Untyped(value) => Some(value),
            Self::None | Self::Typed(_) => None,
        }
    }

    /// Consume into the typed payload, if any.
    #[must_use]
    pub fn into_typed(self) -> Option<E> {
        match self {
            Self::Typed(value) => Some(value),
            Self::None | Self::Untyped(_) => None,
        }
    }
}

impl<E> Default for Payload<E> {
    fn default() -> Self {
        Self::None
    }
}
