//! Per-status response handlers.
//!
//! A [`Handler`] is the unit a status table is built from: the payload shape
//! declared for one status code, and whether that status is modeled as
//! success or failure. Handlers are configured once at reader construction
//! and never mutated; each invocation is independent and side-effect-free
//! beyond consuming the body stream.

use std::io::Read;

use riposte_core::{Consumer, DecodeError, Outcome, Payload, PayloadKind};

/// Result of running one handler: the decoded payload, tagged with the
/// handler's configured outcome. Exactly one variant is ever populated.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult<E> {
    /// The response is modeled as success.
    Success(Payload<E>),
    /// The response is modeled as failure.
    Failure(Payload<E>),
}

/// Handler for a single status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handler {
    kind: PayloadKind,
    outcome: Outcome,
}

impl Handler {
    /// Creates a handler with the given payload shape and outcome.
    #[must_use]
    pub const fn new(kind: PayloadKind, outcome: Outcome) -> Self {
        Self { kind, outcome }
    }

    /// Declared payload shape.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Configured outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Decode the body per the declared shape and tag it with the outcome.
    ///
    /// A `None` shape leaves the body stream untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the consumer fails; no partial result is
    /// constructed.
    pub fn handle<E, C>(
        &self,
        body: &mut dyn Read,
        consumer: &C,
    ) -> Result<HandlerResult<E>, DecodeError>
    where
        E: serde::de::DeserializeOwned + Default,
        C: Consumer,
    {
        let payload = decode_payload(self.kind, body, consumer)?;
        Ok(match self.outcome {
            Outcome::Success => HandlerResult::Success(payload),
            Outcome::Failure => HandlerResult::Failure(payload),
        })
    }
}

/// Decode a body stream into a payload of the given shape.
pub(crate) fn decode_payload<E, C>(
    kind: PayloadKind,
    body: &mut dyn Read,
    consumer: &C,
) -> Result<Payload<E>, DecodeError>
where
    E: serde::de::DeserializeOwned + Default,
    C: Consumer,
{
    match kind {
        PayloadKind::None => Ok(Payload::None),
        PayloadKind::Untyped => consumer.consume(body).map(Payload::Untyped),
        PayloadKind::Typed => consumer.consume(body).map(Payload::Typed),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert2::{check, let_assert};
    use riposte_core::JsonConsumer;

    use super::*;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct RuntimeError {
        message: String,
    }

    #[test]
    fn none_shape_leaves_body_untouched() {
        let handler = Handler::new(PayloadKind::None, Outcome::Success);
        // Not valid JSON; must not be read at all.
        let mut body = Cursor::new("!!!");

        let result: HandlerResult<RuntimeError> =
            handler.handle(&mut body, &JsonConsumer).expect("handle");
        let_assert!(HandlerResult::Success(payload) = result);
        check!(payload.is_none());
        check!(body.position() == 0);
    }

    #[test]
    fn untyped_shape_decodes_json_value() {
        let handler = Handler::new(PayloadKind::Untyped, Outcome::Failure);
        let mut body = Cursor::new(r#"{"detail":"forbidden"}"#);

        let result: HandlerResult<RuntimeError> =
            handler.handle(&mut body, &JsonConsumer).expect("handle");
        let_assert!(HandlerResult::Failure(payload) = result);
        check!(payload.as_untyped() == Some(&serde_json::json!({"detail": "forbidden"})));
    }

    #[test]
    fn typed_shape_decodes_declared_error() {
        let handler = Handler::new(PayloadKind::Typed, Outcome::Failure);
        let mut body = Cursor::new(r#"{"message":"boom"}"#);

        let result: HandlerResult<RuntimeError> =
            handler.handle(&mut body, &JsonConsumer).expect("handle");
        let_assert!(HandlerResult::Failure(payload) = result);
        check!(
            payload.as_typed()
                == Some(&RuntimeError {
                    message: "boom".to_string()
                })
        );
    }

    #[test]
    fn decode_error_yields_no_result() {
        let handler = Handler::new(PayloadKind::Typed, Outcome::Success);
        let mut body = Cursor::new("truncated{");

        let result: Result<HandlerResult<RuntimeError>, _> =
            handler.handle(&mut body, &JsonConsumer);
        let_assert!(Err(DecodeError::Json { .. }) = result);
    }
}
