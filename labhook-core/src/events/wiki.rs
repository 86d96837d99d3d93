use super::common::{EventProject, EventUser};
use serde::{Deserialize, Serialize};

/// Payload of a `Wiki Page Hook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiPageEvent {
    pub object_kind: String,
    pub user: EventUser,
    pub project: EventProject,
    pub wiki: Wiki,
    pub object_attributes: WikiPageAttributes,
}

/// The wiki repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wiki {
    pub web_url: String,
    pub git_ssh_url: String,
    pub git_http_url: String,
    pub path_with_namespace: String,
    pub default_branch: String,
}

/// The page that changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiPageAttributes {
    pub title: String,
    pub content: String,
    pub format: String,
    pub message: String,
    pub slug: String,
    pub url: String,
    pub action: String,
    pub diff_url: Option<String>,
    pub version_id: Option<String>,
}
