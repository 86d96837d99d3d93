use super::common::{EventCommit, EventProject, EventRepository};
use serde::{Deserialize, Serialize};

/// Payload of a `Push Hook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushEvent {
    pub object_kind: String,
    pub event_name: String,
    pub before: String,
    pub after: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub ref_protected: bool,
    pub checkout_sha: Option<String>,
    pub message: Option<String>,
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

/// Payload of a `Tag Push Hook`.
///
/// A deleted tag has an `after` of all zeroes and no `checkout_sha`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPushEvent {
    pub object_kind: String,
    pub event_name: String,
    pub before: String,
    pub after: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub ref_protected: bool,
    pub checkout_sha: Option<String>,
    pub message: Option<String>,
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

impl PushEvent {
    /// The branch name, without the `refs/heads/` prefix.
    pub fn branch(&self) -> Option<&str> {
        self.ref_name.strip_prefix("refs/heads/")
    }
}

impl TagPushEvent {
    /// The tag name, without the `refs/tags/` prefix.
    pub fn tag(&self) -> Option<&str> {
        self.ref_name.strip_prefix("refs/tags/")
    }

    /// Whether this push removed the tag.
    pub fn is_deletion(&self) -> bool {
        self.checkout_sha.is_none() && self.after.bytes().all(|b| b == b'0')
    }
}
