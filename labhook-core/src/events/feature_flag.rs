use super::common::{EventProject, EventUser};
use serde::{Deserialize, Serialize};

/// Payload of a `Feature Flag Hook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlagEvent {
    pub object_kind: String,
    pub project: EventProject,
    pub user: EventUser,
    pub user_url: String,
    pub object_attributes: FeatureFlagAttributes,
}

/// The flag that was toggled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlagAttributes {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub active: bool,
}
