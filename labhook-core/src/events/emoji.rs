use super::{
    common::{EventProject, EventRepository, EventUser},
    issue::IssueAttributes,
    merge_request::MergeRequestAttributes,
    note::NoteAttributes,
};
use serde::{Deserialize, Serialize};

/// Payload of an `Emoji Hook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiEvent {
    pub object_kind: String,
    pub event_type: String,
    pub user: EventUser,
    pub project_id: u64,
    pub project: EventProject,
    pub repository: EventRepository,
    pub object_attributes: EmojiAttributes,
    pub note: Option<NoteAttributes>,
    pub issue: Option<IssueAttributes>,
    pub merge_request: Option<MergeRequestAttributes>,
}

/// The award itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiAttributes {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub awardable_type: String,
    pub awardable_id: u64,
    pub created_at: String,
    pub updated_at: String,
}
