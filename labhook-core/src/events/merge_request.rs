use super::common::{CommitAuthor, EventChanges, EventLabel, EventProject, EventRepository, EventUser};
use serde::{Deserialize, Serialize};

/// Payload of a `Merge Request Hook`.
///
/// System hooks deliver the same shape for merge request events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeEvent {
    pub object_kind: String,
    pub event_type: String,
    pub user: EventUser,
    pub project: EventProject,
    pub repository: EventRepository,
    pub object_attributes: MergeRequestAttributes,
    pub labels: Vec<EventLabel>,
    pub assignees: Vec<EventUser>,
    pub reviewers: Vec<EventUser>,
    pub changes: EventChanges,
}

/// The merge request itself, as embedded in merge, note and emoji payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeRequestAttributes {
    pub id: u64,
    pub iid: u64,
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    pub action: Option<String>,
    pub merge_status: String,
    pub detailed_merge_status: Option<String>,
    pub target_branch: String,
    pub source_branch: String,
    pub source_project_id: u64,
    pub target_project_id: u64,
    pub author_id: u64,
    pub assignee_id: Option<u64>,
    pub merge_commit_sha: Option<String>,
    pub draft: bool,
    pub work_in_progress: bool,
    pub created_at: String,
    pub updated_at: String,
    pub url: String,
    pub source: Option<EventProject>,
    pub target: Option<EventProject>,
    pub last_commit: Option<LastCommit>,
}

/// Head commit of a merge request's source branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastCommit {
    pub id: String,
    pub message: String,
    pub title: String,
    pub timestamp: String,
    pub url: String,
    pub author: CommitAuthor,
}
