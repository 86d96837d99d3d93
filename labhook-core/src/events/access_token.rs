use super::common::EventProject;
use serde::{Deserialize, Serialize};

/// Payload of a `Resource Access Token Hook`.
///
/// The same token delivers project and group tokens; exactly one of
/// `project` and `group` is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceAccessTokenEvent {
    pub object_kind: String,
    pub event_name: String,
    pub object_attributes: AccessTokenAttributes,
    pub project: Option<EventProject>,
    pub group: Option<AccessTokenGroup>,
}

/// The expiring token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessTokenAttributes {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub created_at: String,
    pub expires_at: String,
}

/// The group owning a group access token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessTokenGroup {
    pub group_id: u64,
    pub group_name: String,
    pub group_path: String,
}
