//! # Disambiguator
//!
//! Chooses the concrete [`EventKind`] for the hook types whose token alone
//! does not name a shape. A shallow read pulls just the discriminator fields
//! out of the payload; the full decode happens afterwards.

use crate::{error::DecodeError, event::EventKind, token::HookType};
use serde::Deserialize;

const NOTE_OBJECT_KIND: &str = "note";
const MERGE_REQUEST_OBJECT_KIND: &str = "merge_request";

#[derive(Deserialize, Default)]
#[serde(default)]
struct NoteFields {
    object_kind: String,
    object_attributes: NoteableFields,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct NoteableFields {
    noteable_type: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SystemFields {
    event_name: String,
    object_kind: String,
}

/// Resolve a hook type and payload to exactly one event kind.
///
/// Hook types with a fixed shape never look at the payload.
pub fn disambiguate(hook: HookType, payload: &[u8]) -> Result<EventKind, DecodeError> {
    if let Some(kind) = hook.fixed_kind() {
        return Ok(kind);
    }
    match hook {
        HookType::Note | HookType::ConfidentialNote => note_kind(payload),
        _ => system_kind(payload),
    }
}

fn note_kind(payload: &[u8]) -> Result<EventKind, DecodeError> {
    let fields: NoteFields = serde_json::from_slice(payload)?;
    if fields.object_kind != NOTE_OBJECT_KIND {
        return Err(DecodeError::UnexpectedObjectKind(fields.object_kind));
    }
    match fields.object_attributes.noteable_type.as_str() {
        "Commit" => Ok(EventKind::CommitComment),
        "MergeRequest" => Ok(EventKind::MergeComment),
        "Issue" => Ok(EventKind::IssueComment),
        "Snippet" => Ok(EventKind::SnippetComment),
        _ => Err(DecodeError::UnexpectedNoteableType(
            fields.object_attributes.noteable_type,
        )),
    }
}

fn system_kind(payload: &[u8]) -> Result<EventKind, DecodeError> {
    let fields: SystemFields = serde_json::from_slice(payload)?;
    let kind = match fields.event_name.as_str() {
        "push" => EventKind::PushSystem,
        "tag_push" => EventKind::TagPushSystem,
        "repository_update" => EventKind::RepositoryUpdateSystem,
        "project_create" | "project_update" | "project_destroy" | "project_transfer"
        | "project_rename" => EventKind::ProjectSystem,
        "group_create" | "group_destroy" | "group_rename" => EventKind::GroupSystem,
        "key_create" | "key_destroy" => EventKind::KeySystem,
        "user_create" | "user_destroy" | "user_rename" | "user_failed_login" => {
            EventKind::UserSystem
        }
        "user_add_to_group" | "user_remove_from_group" | "user_update_for_group" => {
            EventKind::UserGroupSystem
        }
        "user_add_to_team" | "user_remove_from_team" | "user_update_for_team" => {
            EventKind::UserTeamSystem
        }
        _ if fields.object_kind == MERGE_REQUEST_OBJECT_KIND => EventKind::MergeRequest,
        _ => return Err(DecodeError::UnexpectedSystemEvent(fields.event_name)),
    };
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(object_kind: &str, noteable_type: &str) -> Vec<u8> {
        format!(
            r#"{{"object_kind":"{object_kind}","object_attributes":{{"noteable_type":"{noteable_type}"}}}}"#
        )
        .into_bytes()
    }

    #[test]
    fn note_maps_each_noteable_type() {
        let cases = [
            ("Commit", EventKind::CommitComment),
            ("MergeRequest", EventKind::MergeComment),
            ("Issue", EventKind::IssueComment),
            ("Snippet", EventKind::SnippetComment),
        ];
        for (noteable, expected) in cases {
            assert_eq!(disambiguate(HookType::Note, &note("note", noteable)).unwrap(), expected);
            assert_eq!(
                disambiguate(HookType::ConfidentialNote, &note("note", noteable)).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn note_rejects_wrong_object_kind() {
        let err = disambiguate(HookType::Note, &note("push", "Commit")).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedObjectKind(ref v) if v == "push"));
        assert_eq!(err.to_string(), "unexpected object kind push");
    }

    #[test]
    fn note_rejects_unknown_noteable_type() {
        let err = disambiguate(HookType::Note, &note("note", "Epic")).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedNoteableType(ref v) if v == "Epic"));
        assert_eq!(err.to_string(), "unexpected noteable type Epic");
    }

    #[test]
    fn note_disambiguation_surfaces_malformed_json() {
        let err = disambiguate(HookType::Note, b"{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn fixed_kinds_ignore_payload() {
        // A payload that would fail the note checks is irrelevant here.
        let payload = note("push", "Epic");
        assert_eq!(disambiguate(HookType::Push, &payload).unwrap(), EventKind::Push);
        assert_eq!(disambiguate(HookType::Build, b"not even json").unwrap(), EventKind::Job);
    }

    #[test]
    fn system_hooks_route_by_event_name() {
        let cases = [
            ("push", EventKind::PushSystem),
            ("tag_push", EventKind::TagPushSystem),
            ("repository_update", EventKind::RepositoryUpdateSystem),
            ("project_transfer", EventKind::ProjectSystem),
            ("group_rename", EventKind::GroupSystem),
            ("key_destroy", EventKind::KeySystem),
            ("user_failed_login", EventKind::UserSystem),
            ("user_update_for_group", EventKind::UserGroupSystem),
            ("user_remove_from_team", EventKind::UserTeamSystem),
        ];
        for (name, expected) in cases {
            let payload = format!(r#"{{"event_name":"{name}"}}"#);
            assert_eq!(
                disambiguate(HookType::System, payload.as_bytes()).unwrap(),
                expected,
                "event_name {name}"
            );
        }
    }

    #[test]
    fn system_merge_request_falls_back_to_object_kind() {
        let payload = br#"{"object_kind":"merge_request","event_type":"merge_request"}"#;
        assert_eq!(
            disambiguate(HookType::System, payload).unwrap(),
            EventKind::MergeRequest
        );
    }

    #[test]
    fn system_rejects_unknown_event_name() {
        let err = disambiguate(HookType::System, br#"{"event_name":"bogus"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedSystemEvent(ref v) if v == "bogus"));
    }
}
