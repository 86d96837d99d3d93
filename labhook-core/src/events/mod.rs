//! Event payload shapes.
//!
//! These are passive data: every struct decodes leniently (missing fields
//! take their default) but a field of the wrong JSON type fails the decode.

#![allow(missing_docs)]

mod access_token;
mod common;
mod deployment;
mod emoji;
mod feature_flag;
mod group;
mod issue;
mod merge_request;
mod note;
mod pipeline;
mod push;
mod release;
mod system;
mod wiki;

pub use access_token::{AccessTokenAttributes, AccessTokenGroup, ResourceAccessTokenEvent};
pub use common::{
    Change, CommitAuthor, EventChanges, EventCommit, EventLabel, EventProject, EventRepository,
    EventUser,
};
pub use deployment::DeploymentEvent;
pub use emoji::{EmojiAttributes, EmojiEvent};
pub use feature_flag::{FeatureFlagAttributes, FeatureFlagEvent};
pub use group::{MemberEvent, SubGroupEvent};
pub use issue::{IssueAttributes, IssueEvent};
pub use merge_request::{LastCommit, MergeEvent, MergeRequestAttributes};
pub use note::{
    CommitCommentEvent, IssueCommentEvent, MergeCommentEvent, NoteAttributes, NoteCommit,
    NoteSnippet, SnippetCommentEvent,
};
pub use pipeline::{
    JobCommit, JobEvent, PipelineAttributes, PipelineBuild, PipelineCommit, PipelineEvent,
};
pub use push::{PushEvent, TagPushEvent};
pub use release::{ReleaseAssets, ReleaseCommit, ReleaseEvent, ReleaseLink, ReleaseSource};
pub use system::{
    GroupSystemEvent, KeySystemEvent, ProjectSystemEvent, PushSystemEvent, RefChange,
    RepositoryUpdateSystemEvent, TagPushSystemEvent, UserGroupSystemEvent, UserSystemEvent,
    UserTeamSystemEvent,
};
pub use wiki::{Wiki, WikiPageAttributes, WikiPageEvent};
