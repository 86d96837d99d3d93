use super::common::{EventChanges, EventLabel, EventProject, EventRepository, EventUser};
use serde::{Deserialize, Serialize};

/// Payload of an `Issue Hook` or `Confidential Issue Hook`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueEvent {
    pub object_kind: String,
    pub event_type: String,
    pub user: EventUser,
    pub project: EventProject,
    pub repository: EventRepository,
    pub object_attributes: IssueAttributes,
    pub assignees: Vec<EventUser>,
    pub labels: Vec<EventLabel>,
    pub changes: EventChanges,
}

/// The issue itself, as embedded in issue, note and emoji payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueAttributes {
    pub id: u64,
    pub iid: u64,
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    pub action: Option<String>,
    pub author_id: u64,
    pub assignee_ids: Vec<u64>,
    pub project_id: u64,
    pub milestone_id: Option<u64>,
    pub confidential: bool,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
    pub url: String,
}
