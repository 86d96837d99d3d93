//! Error types for labhook.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`LabhookError`] - Top-level error type for a full receive/decode/dispatch pass
//! - [`DecodeError`] - Token resolution, disambiguation and payload decoding errors
//! - [`DispatchError`] - Errors raised while fanning an event out to listeners
//! - [`TransportError`] - Errors extracting the token or payload from a request

use thiserror::Error;

/// A boxed error type returned by listener callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all labhook operations.
#[derive(Error, Debug)]
pub enum LabhookError {
    /// The payload could not be turned into an [`Event`](crate::Event).
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The decoded event could not be delivered.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The inbound request did not carry a usable token or body.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl LabhookError {
    /// Returns `true` when the request named a hook type nobody can decode.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, LabhookError::Decode(DecodeError::UnknownToken(_)))
    }

    /// Returns the listener failure, if that is what stopped the dispatch.
    pub fn listener_error(&self) -> Option<&BoxError> {
        match self {
            LabhookError::Dispatch(DispatchError::Listener(err)) => Some(err),
            _ => None,
        }
    }
}

/// Errors that can occur while turning a token and payload into an event.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The type token is not part of the hook vocabulary.
    #[error("unsupported event type: {0}")]
    UnknownToken(String),

    /// A note payload carried an `object_kind` other than `note`.
    #[error("unexpected object kind {0}")]
    UnexpectedObjectKind(String),

    /// A note payload commented on a resource type we do not know.
    #[error("unexpected noteable type {0}")]
    UnexpectedNoteableType(String),

    /// A system hook payload named an event we do not know.
    #[error("unexpected system hook type {0}")]
    UnexpectedSystemEvent(String),

    /// The payload did not match the selected event shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during event dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A listener callback failed. Only the first failure is reported.
    #[error("listener error: {0}")]
    Listener(#[source] BoxError),
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Listener(err)
    }
}

/// Errors that can occur while reading an inbound request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The header carrying the type token is absent.
    #[error("missing {0} header")]
    MissingHeader(String),

    /// The header carrying the type token is not valid visible ASCII.
    #[error("invalid {0} header value")]
    InvalidHeader(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_is_unsupported() {
        let err = LabhookError::from(DecodeError::UnknownToken("Bogus Hook".into()));
        assert!(err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "decode error: unsupported event type: Bogus Hook"
        );
    }

    #[test]
    fn listener_error_is_exposed() {
        let err = LabhookError::from(DispatchError::from(BoxError::from("boom")));
        assert!(!err.is_unsupported());
        assert_eq!(err.listener_error().map(|e| e.to_string()).as_deref(), Some("boom"));
    }
}
