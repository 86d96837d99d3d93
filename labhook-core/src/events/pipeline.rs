use super::{
    common::{CommitAuthor, EventProject, EventRepository, EventUser},
    merge_request::MergeRequestAttributes,
};
use serde::{Deserialize, Serialize};

/// Payload of a `Pipeline Hook`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineEvent {
    pub object_kind: String,
    pub object_attributes: PipelineAttributes,
    pub merge_request: Option<MergeRequestAttributes>,
    pub user: EventUser,
    pub project: EventProject,
    pub commit: Option<PipelineCommit>,
    pub builds: Vec<PipelineBuild>,
}

/// The pipeline itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineAttributes {
    pub id: u64,
    pub iid: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub tag: bool,
    pub sha: String,
    pub before_sha: String,
    pub source: String,
    pub status: String,
    pub detailed_status: String,
    pub stages: Vec<String>,
    pub created_at: String,
    pub finished_at: Option<String>,
    pub duration: Option<f64>,
    pub queued_duration: Option<f64>,
    pub url: Option<String>,
}

/// The commit a pipeline ran for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineCommit {
    pub id: String,
    pub message: String,
    pub title: String,
    pub timestamp: String,
    pub url: String,
    pub author: CommitAuthor,
}

/// One job as summarised in a pipeline payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineBuild {
    pub id: u64,
    pub stage: String,
    pub name: String,
    pub status: String,
    pub created_at: String,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub duration: Option<f64>,
    pub queued_duration: Option<f64>,
    pub failure_reason: Option<String>,
    pub when: String,
    pub manual: bool,
    pub allow_failure: bool,
    pub user: EventUser,
}

/// Payload of a `Job Hook` (`Build Hook` on older instances).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobEvent {
    pub object_kind: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub tag: bool,
    pub before_sha: String,
    pub sha: String,
    pub retries_count: u64,
    pub build_id: u64,
    pub build_name: String,
    pub build_stage: String,
    pub build_status: String,
    pub build_created_at: String,
    pub build_started_at: Option<String>,
    pub build_finished_at: Option<String>,
    pub build_duration: Option<f64>,
    pub build_queued_duration: Option<f64>,
    pub build_allow_failure: bool,
    pub build_failure_reason: String,
    pub pipeline_id: u64,
    pub project_id: u64,
    pub project_name: String,
    pub user: EventUser,
    pub commit: JobCommit,
    pub repository: EventRepository,
}

/// The commit a job ran for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobCommit {
    pub id: u64,
    pub name: Option<String>,
    pub sha: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    pub author_url: Option<String>,
    pub status: String,
    pub duration: Option<u64>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}
