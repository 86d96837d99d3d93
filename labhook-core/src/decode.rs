//! # Decoder
//!
//! Deserializes a payload into the shape selected by the registry and
//! disambiguator. Either the whole payload parses or the call fails; serde
//! errors are passed through untouched.

use crate::{
    disambiguate::disambiguate,
    error::DecodeError,
    event::{Event, EventKind, decode_kind},
    token::{HookType, resolve},
};

/// Decode a payload as the given event kind.
pub fn decode(kind: EventKind, payload: &[u8]) -> Result<Event, DecodeError> {
    decode_kind(kind, payload)
}

/// Disambiguate and decode a payload delivered under `hook`.
pub fn decode_hook(hook: HookType, payload: &[u8]) -> Result<Event, DecodeError> {
    let kind = disambiguate(hook, payload)?;
    decode(kind, payload)
}

/// Resolve a type token, disambiguate and decode in one step.
///
/// # Example
///
/// ```rust
/// let event = labhook_core::parse(
///     "Push Hook",
///     br#"{"object_kind":"push","project_id":15,"user_name":"John Smith"}"#,
/// )?;
/// assert_eq!(event.kind(), labhook_core::EventKind::Push);
/// # Ok::<(), labhook_core::DecodeError>(())
/// ```
pub fn parse(token: &str, payload: &[u8]) -> Result<Event, DecodeError> {
    decode_hook(resolve(token)?, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_fails_whole_decode() {
        let err = decode(EventKind::Push, br#"{"object_kind":"push","project_id":"fifteen"}"#)
            .unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn decode_does_not_check_discriminator() {
        // The token picked the shape; a mismatching marker is still data.
        let event = decode(EventKind::Release, br#"{"object_kind":"tag_push"}"#).unwrap();
        assert_eq!(event.kind(), EventKind::Release);
        assert_eq!(event.discriminator(), "tag_push");
    }

    #[test]
    fn parse_rejects_unknown_token_before_reading_payload() {
        let err = parse("Bogus Hook", b"garbage").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownToken(_)));
    }
}
