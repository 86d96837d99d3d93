use super::common::{CommitAuthor, EventProject};
use serde::{Deserialize, Serialize};

/// Payload of a `Release Hook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseEvent {
    pub object_kind: String,
    pub id: u64,
    pub name: String,
    pub description: String,
    pub tag: String,
    pub action: String,
    pub url: String,
    pub created_at: String,
    pub released_at: String,
    pub project: EventProject,
    pub assets: ReleaseAssets,
    pub commit: ReleaseCommit,
}

/// Downloadable assets of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseAssets {
    pub count: u64,
    pub links: Vec<ReleaseLink>,
    pub sources: Vec<ReleaseSource>,
}

/// A link attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseLink {
    pub id: u64,
    pub external: bool,
    pub link_type: String,
    pub name: String,
    pub url: String,
}

/// A source archive of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSource {
    pub format: String,
    pub url: String,
}

/// The commit a release points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseCommit {
    pub id: String,
    pub message: String,
    pub title: String,
    pub timestamp: String,
    pub url: String,
    pub author: CommitAuthor,
}
