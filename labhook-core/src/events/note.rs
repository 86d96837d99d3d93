//! Note payloads.
//!
//! GitLab delivers every comment under the single `Note Hook` token. The
//! commented-on resource (`object_attributes.noteable_type`) decides which of
//! the four shapes below the payload decodes to.

use super::{
    common::{CommitAuthor, EventProject, EventRepository, EventUser},
    issue::IssueAttributes,
    merge_request::MergeRequestAttributes,
};
use serde::{Deserialize, Serialize};

/// The note itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteAttributes {
    pub id: u64,
    pub note: String,
    pub noteable_type: String,
    pub noteable_id: Option<u64>,
    pub author_id: u64,
    pub project_id: u64,
    pub commit_id: Option<String>,
    pub line_code: Option<String>,
    pub attachment: Option<String>,
    pub system: bool,
    pub created_at: String,
    pub updated_at: String,
    pub url: String,
}

/// The commit a note was left on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteCommit {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub url: String,
    pub author: CommitAuthor,
}

/// The snippet a note was left on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteSnippet {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author_id: u64,
    pub project_id: u64,
    pub file_name: String,
    pub visibility_level: u32,
    pub created_at: String,
    pub updated_at: String,
    pub url: String,
}

/// A note on a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitCommentEvent {
    pub object_kind: String,
    pub event_type: String,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    pub repository: EventRepository,
    pub object_attributes: NoteAttributes,
    pub commit: Option<NoteCommit>,
}

/// A note on a merge request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeCommentEvent {
    pub object_kind: String,
    pub event_type: String,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    pub repository: EventRepository,
    pub object_attributes: NoteAttributes,
    pub merge_request: Option<MergeRequestAttributes>,
}

/// A note on an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueCommentEvent {
    pub object_kind: String,
    pub event_type: String,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    pub repository: EventRepository,
    pub object_attributes: NoteAttributes,
    pub issue: Option<IssueAttributes>,
}

/// A note on a snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetCommentEvent {
    pub object_kind: String,
    pub event_type: String,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    pub repository: EventRepository,
    pub object_attributes: NoteAttributes,
    pub snippet: Option<NoteSnippet>,
}
