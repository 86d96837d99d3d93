//! System hook payloads.
//!
//! System hooks arrive under the single `System Hook` token and are told
//! apart by their `event_name`.

use super::common::{EventCommit, EventProject, EventRepository};
use serde::{Deserialize, Serialize};

/// System hook: a push to any project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushSystemEvent {
    pub event_name: String,
    pub before: String,
    pub after: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub checkout_sha: Option<String>,
    pub user_id: u64,
    pub user_name: String,
    pub user_username: String,
    pub user_email: Option<String>,
    pub user_avatar: Option<String>,
    pub project_id: u64,
    pub project: EventProject,
    pub repository: EventRepository,
    pub commits: Vec<EventCommit>,
    pub total_commits_count: u64,
}

/// System hook: a tag push to any project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPushSystemEvent {
    pub event_name: String,
    pub before: String,
    pub after: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub checkout_sha: Option<String>,
    pub user_id: u64,
    pub user_name: String,
    pub user_username: String,
    pub user_email: Option<String>,
    pub user_avatar: Option<String>,
    pub project_id: u64,
    pub project: EventProject,
    pub repository: EventRepository,
    pub commits: Vec<EventCommit>,
    pub total_commits_count: u64,
}

/// One ref update inside a repository update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefChange {
    pub before: String,
    pub after: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
}

/// System hook: refs of a repository changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryUpdateSystemEvent {
    pub event_name: String,
    pub user_id: u64,
    pub user_name: String,
    pub user_email: String,
    pub user_avatar: Option<String>,
    pub project_id: u64,
    pub project: EventProject,
    pub changes: Vec<RefChange>,
    pub refs: Vec<String>,
}

/// System hook: `project_create`, `project_update`, `project_destroy`,
/// `project_transfer` or `project_rename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSystemEvent {
    pub event_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub path: String,
    pub path_with_namespace: String,
    pub project_id: u64,
    pub owner_name: String,
    pub owner_email: String,
    pub project_visibility: String,
    pub old_path_with_namespace: Option<String>,
}

/// System hook: `group_create`, `group_destroy` or `group_rename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSystemEvent {
    pub event_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub path: String,
    pub full_path: String,
    pub group_id: u64,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub old_path: Option<String>,
    pub old_full_path: Option<String>,
}

/// System hook: `key_create` or `key_destroy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySystemEvent {
    pub event_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub id: u64,
    pub username: String,
    pub key: String,
}

/// System hook: `user_create`, `user_destroy`, `user_rename` or
/// `user_failed_login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSystemEvent {
    pub event_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: u64,
    pub name: String,
    pub username: String,
    pub old_username: Option<String>,
    pub email: String,
    pub state: Option<String>,
}

/// System hook: `user_add_to_group`, `user_remove_from_group` or
/// `user_update_for_group`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroupSystemEvent {
    pub event_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub group_id: u64,
    pub group_name: String,
    pub group_path: String,
    pub group_access: String,
    pub user_id: u64,
    pub user_name: String,
    pub user_username: String,
    pub user_email: String,
}

/// System hook: `user_add_to_team`, `user_remove_from_team` or
/// `user_update_for_team`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTeamSystemEvent {
    pub event_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub access_level: String,
    pub project_id: u64,
    pub project_name: String,
    pub project_path: String,
    pub project_path_with_namespace: String,
    pub project_visibility: String,
    pub user_id: u64,
    pub user_name: String,
    pub user_username: String,
    pub user_email: String,
}
