use serde::{Deserialize, Serialize};

/// Payload of a `Member Hook`.
///
/// Group membership events carry no `object_kind`; `event_name` is one of
/// `user_add_to_group`, `user_update_for_group`, `user_remove_from_group`
/// or `user_access_request_to_group`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberEvent {
    pub event_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub group_name: String,
    pub group_path: String,
    pub group_id: u64,
    pub group_plan: Option<String>,
    pub group_access: String,
    pub expires_at: Option<String>,
    pub user_username: String,
    pub user_name: String,
    pub user_email: String,
    pub user_id: u64,
}

/// Payload of a `Subgroup Hook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubGroupEvent {
    pub event_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub path: String,
    pub full_path: String,
    pub group_id: u64,
    pub parent_group_id: u64,
    pub parent_name: String,
    pub parent_path: String,
    pub parent_full_path: String,
}
