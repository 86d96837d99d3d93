use super::common::{EventProject, EventUser};
use serde::{Deserialize, Serialize};

/// Payload of a `Deployment Hook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentEvent {
    pub object_kind: String,
    pub status: String,
    pub status_changed_at: String,
    pub deployment_id: u64,
    pub deployable_id: Option<u64>,
    pub deployable_url: Option<String>,
    pub environment: String,
    pub environment_tier: Option<String>,
    pub environment_slug: Option<String>,
    pub environment_external_url: Option<String>,
    pub project: EventProject,
    pub short_sha: String,
    pub user: EventUser,
    pub user_url: String,
    pub commit_url: String,
    pub commit_title: String,
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
}
