//! # Event Type Registry
//!
//! Maps the wire-level type token (the `X-Gitlab-Event` header value) to a
//! [`HookType`]. Most hook types name exactly one event shape; `Note Hook`
//! and `System Hook` need a look at the payload before the shape is known,
//! see [`disambiguate`](crate::disambiguate).

use crate::{error::DecodeError, event::EventKind};
use http::HeaderName;
use std::{fmt, str::FromStr};

/// The header GitLab uses to carry the type token (`X-Gitlab-Event`).
pub const GITLAB_EVENT_HEADER: HeaderName = HeaderName::from_static("x-gitlab-event");

/// The wire category named by a type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookType {
    /// `Push Hook`
    Push,
    /// `Tag Push Hook`
    TagPush,
    /// `Issue Hook`
    Issue,
    /// `Confidential Issue Hook`
    ConfidentialIssue,
    /// `Merge Request Hook`
    MergeRequest,
    /// `Note Hook`
    Note,
    /// `Confidential Note Hook`
    ConfidentialNote,
    /// `Wiki Page Hook`
    WikiPage,
    /// `Pipeline Hook`
    Pipeline,
    /// `Job Hook`
    Job,
    /// `Build Hook`, the name older GitLab releases use for job events.
    Build,
    /// `Deployment Hook`
    Deployment,
    /// `Release Hook`
    Release,
    /// `Member Hook`
    Member,
    /// `Subgroup Hook`
    Subgroup,
    /// `Feature Flag Hook`
    FeatureFlag,
    /// `Resource Access Token Hook`
    ResourceAccessToken,
    /// `Emoji Hook`
    Emoji,
    /// `System Hook`
    System,
}

static TOKENS: phf::Map<&'static str, HookType> = phf::phf_map! {
    "Push Hook" => HookType::Push,
    "Tag Push Hook" => HookType::TagPush,
    "Issue Hook" => HookType::Issue,
    "Confidential Issue Hook" => HookType::ConfidentialIssue,
    "Merge Request Hook" => HookType::MergeRequest,
    "Note Hook" => HookType::Note,
    "Confidential Note Hook" => HookType::ConfidentialNote,
    "Wiki Page Hook" => HookType::WikiPage,
    "Pipeline Hook" => HookType::Pipeline,
    "Job Hook" => HookType::Job,
    "Build Hook" => HookType::Build,
    "Deployment Hook" => HookType::Deployment,
    "Release Hook" => HookType::Release,
    "Member Hook" => HookType::Member,
    "Subgroup Hook" => HookType::Subgroup,
    "Feature Flag Hook" => HookType::FeatureFlag,
    "Resource Access Token Hook" => HookType::ResourceAccessToken,
    "Emoji Hook" => HookType::Emoji,
    "System Hook" => HookType::System,
};

/// Resolve a type token to its hook type.
///
/// Unknown tokens are an error, never a silent default.
pub fn resolve(token: &str) -> Result<HookType, DecodeError> {
    TOKENS
        .get(token)
        .copied()
        .ok_or_else(|| DecodeError::UnknownToken(token.to_owned()))
}

impl HookType {
    /// Every hook type in the vocabulary.
    pub const ALL: [HookType; 19] = [
        HookType::Push,
        HookType::TagPush,
        HookType::Issue,
        HookType::ConfidentialIssue,
        HookType::MergeRequest,
        HookType::Note,
        HookType::ConfidentialNote,
        HookType::WikiPage,
        HookType::Pipeline,
        HookType::Job,
        HookType::Build,
        HookType::Deployment,
        HookType::Release,
        HookType::Member,
        HookType::Subgroup,
        HookType::FeatureFlag,
        HookType::ResourceAccessToken,
        HookType::Emoji,
        HookType::System,
    ];

    /// The literal token carried on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            HookType::Push => "Push Hook",
            HookType::TagPush => "Tag Push Hook",
            HookType::Issue => "Issue Hook",
            HookType::ConfidentialIssue => "Confidential Issue Hook",
            HookType::MergeRequest => "Merge Request Hook",
            HookType::Note => "Note Hook",
            HookType::ConfidentialNote => "Confidential Note Hook",
            HookType::WikiPage => "Wiki Page Hook",
            HookType::Pipeline => "Pipeline Hook",
            HookType::Job => "Job Hook",
            HookType::Build => "Build Hook",
            HookType::Deployment => "Deployment Hook",
            HookType::Release => "Release Hook",
            HookType::Member => "Member Hook",
            HookType::Subgroup => "Subgroup Hook",
            HookType::FeatureFlag => "Feature Flag Hook",
            HookType::ResourceAccessToken => "Resource Access Token Hook",
            HookType::Emoji => "Emoji Hook",
            HookType::System => "System Hook",
        }
    }

    /// The event kind this hook type always decodes to.
    ///
    /// Returns `None` for the overloaded hook types whose shape depends on
    /// payload content.
    pub const fn fixed_kind(self) -> Option<EventKind> {
        match self {
            HookType::Push => Some(EventKind::Push),
            HookType::TagPush => Some(EventKind::TagPush),
            HookType::Issue | HookType::ConfidentialIssue => Some(EventKind::Issue),
            HookType::MergeRequest => Some(EventKind::MergeRequest),
            HookType::WikiPage => Some(EventKind::WikiPage),
            HookType::Pipeline => Some(EventKind::Pipeline),
            HookType::Job | HookType::Build => Some(EventKind::Job),
            HookType::Deployment => Some(EventKind::Deployment),
            HookType::Release => Some(EventKind::Release),
            HookType::Member => Some(EventKind::Member),
            HookType::Subgroup => Some(EventKind::SubGroup),
            HookType::FeatureFlag => Some(EventKind::FeatureFlag),
            HookType::ResourceAccessToken => Some(EventKind::ResourceAccessToken),
            HookType::Emoji => Some(EventKind::Emoji),
            HookType::Note | HookType::ConfidentialNote | HookType::System => None,
        }
    }
}

impl FromStr for HookType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
