//! Shapes shared by several events.

use serde::{Deserialize, Serialize};

/// The user that triggered an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventUser {
    pub id: Option<u64>,
    pub name: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub email: Option<String>,
}

/// The project an event belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventProject {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub web_url: String,
    pub avatar_url: Option<String>,
    pub git_ssh_url: String,
    pub git_http_url: String,
    pub namespace: String,
    pub visibility_level: u32,
    pub path_with_namespace: String,
    pub default_branch: String,
    pub ci_config_path: Option<String>,
    pub homepage: Option<String>,
    pub url: Option<String>,
    pub ssh_url: Option<String>,
    pub http_url: Option<String>,
}

/// The repository an event belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRepository {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub git_ssh_url: Option<String>,
    pub git_http_url: Option<String>,
    pub visibility_level: Option<u32>,
}

/// A label attached to an issue or merge request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventLabel {
    pub id: u64,
    pub title: String,
    pub color: String,
    pub project_id: Option<u64>,
    pub created_at: String,
    pub updated_at: String,
    pub template: bool,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub label_type: String,
    pub group_id: Option<u64>,
}

/// Name and email of a commit author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

/// A commit as it appears in push and note payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventCommit {
    pub id: String,
    pub message: String,
    pub title: String,
    pub timestamp: String,
    pub url: String,
    pub author: CommitAuthor,
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
}

/// A before/after pair as found in the `changes` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Change<T> {
    pub previous: Option<T>,
    pub current: Option<T>,
}

/// Fields that changed on an issue or merge request.
///
/// Only the commonly consumed changes are typed; the rest are kept in
/// `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventChanges {
    pub title: Option<Change<String>>,
    pub description: Option<Change<String>>,
    pub state_id: Option<Change<u64>>,
    pub labels: Option<Change<Vec<EventLabel>>>,
    pub assignees: Option<Change<Vec<EventUser>>>,
    pub updated_at: Option<Change<String>>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
