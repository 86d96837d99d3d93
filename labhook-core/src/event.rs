//! Event kinds and the decoded [`Event`] sum type.
//!
//! The list of supported events is written exactly once, in
//! [`for_each_event!`]. Everything that must stay in step with that list
//! ([`EventKind`], [`Event`], the decode switch and the listener collections
//! in `labhook-std`) is generated from it, so a kind cannot be decodable
//! without also being dispatchable.

use crate::error::DecodeError;
use serde::de::DeserializeOwned;
use std::fmt;

/// Invokes `$callback!` with the table of every supported event.
///
/// Each entry names the [`EventKind`] variant, a snake_case field name used
/// for per-kind storage, the event type, the payload field that carries the
/// event's own discriminator, and a doc string.
///
/// ```rust,ignore
/// macro_rules! count {
///     ($( $kind:ident { $($rest:tt)* } ),* $(,)?) => { [$( stringify!($kind) ),*].len() };
/// }
/// let n = labhook_core::for_each_event!(count);
/// ```
#[macro_export]
macro_rules! for_each_event {
    ($callback:ident) => {
        $callback! {
            Push { field: push, event: $crate::events::PushEvent, marker: object_kind, doc: "A push to a branch." },
            TagPush { field: tag_push, event: $crate::events::TagPushEvent, marker: object_kind, doc: "A tag was pushed or deleted." },
            Issue { field: issue, event: $crate::events::IssueEvent, marker: object_kind, doc: "An issue was opened, updated or closed." },
            MergeRequest { field: merge_request, event: $crate::events::MergeEvent, marker: object_kind, doc: "A merge request changed state." },
            CommitComment { field: commit_comment, event: $crate::events::CommitCommentEvent, marker: object_kind, doc: "A note on a commit." },
            MergeComment { field: merge_comment, event: $crate::events::MergeCommentEvent, marker: object_kind, doc: "A note on a merge request." },
            IssueComment { field: issue_comment, event: $crate::events::IssueCommentEvent, marker: object_kind, doc: "A note on an issue." },
            SnippetComment { field: snippet_comment, event: $crate::events::SnippetCommentEvent, marker: object_kind, doc: "A note on a snippet." },
            WikiPage { field: wiki_page, event: $crate::events::WikiPageEvent, marker: object_kind, doc: "A wiki page was created, updated or deleted." },
            Pipeline { field: pipeline, event: $crate::events::PipelineEvent, marker: object_kind, doc: "A pipeline changed status." },
            Job { field: job, event: $crate::events::JobEvent, marker: object_kind, doc: "A job changed status." },
            Deployment { field: deployment, event: $crate::events::DeploymentEvent, marker: object_kind, doc: "A deployment changed status." },
            Release { field: release, event: $crate::events::ReleaseEvent, marker: object_kind, doc: "A release was created, updated or deleted." },
            Member { field: member, event: $crate::events::MemberEvent, marker: event_name, doc: "A group membership changed." },
            SubGroup { field: sub_group, event: $crate::events::SubGroupEvent, marker: event_name, doc: "A subgroup was created or removed." },
            FeatureFlag { field: feature_flag, event: $crate::events::FeatureFlagEvent, marker: object_kind, doc: "A feature flag was toggled." },
            ResourceAccessToken { field: resource_access_token, event: $crate::events::ResourceAccessTokenEvent, marker: object_kind, doc: "A project or group access token is about to expire." },
            Emoji { field: emoji, event: $crate::events::EmojiEvent, marker: object_kind, doc: "An emoji was awarded or revoked." },
            PushSystem { field: push_system, event: $crate::events::PushSystemEvent, marker: event_name, doc: "System hook: a push to any project." },
            TagPushSystem { field: tag_push_system, event: $crate::events::TagPushSystemEvent, marker: event_name, doc: "System hook: a tag push to any project." },
            RepositoryUpdateSystem { field: repository_update_system, event: $crate::events::RepositoryUpdateSystemEvent, marker: event_name, doc: "System hook: refs of a repository changed." },
            ProjectSystem { field: project_system, event: $crate::events::ProjectSystemEvent, marker: event_name, doc: "System hook: a project was created, renamed, moved or removed." },
            GroupSystem { field: group_system, event: $crate::events::GroupSystemEvent, marker: event_name, doc: "System hook: a group was created, renamed or removed." },
            KeySystem { field: key_system, event: $crate::events::KeySystemEvent, marker: event_name, doc: "System hook: an SSH key was added or removed." },
            UserSystem { field: user_system, event: $crate::events::UserSystemEvent, marker: event_name, doc: "System hook: a user account changed." },
            UserGroupSystem { field: user_group_system, event: $crate::events::UserGroupSystemEvent, marker: event_name, doc: "System hook: a user joined or left a group." },
            UserTeamSystem { field: user_team_system, event: $crate::events::UserTeamSystemEvent, marker: event_name, doc: "System hook: a user joined or left a project team." },
        }
    };
}

/// A strongly-shaped webhook event.
///
/// Implemented for every event type in [`for_each_event!`]; it is not meant
/// to be implemented by hand.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a webhook event",
    label = "not listed in `for_each_event!`",
    note = "Only the event types generated from the event table can be decoded and dispatched."
)]
pub trait WebhookEvent: DeserializeOwned + fmt::Debug + Clone + Send + Sync + 'static {
    /// The kind this type decodes.
    const KIND: EventKind;

    /// The payload's own discriminator value (`object_kind` or `event_name`).
    fn discriminator(&self) -> &str;

    /// Borrow this event back out of the sum type.
    fn from_event(event: &Event) -> Option<&Self>;
}

macro_rules! define_events {
    ($( $kind:ident { field: $field:ident, event: $ty:ty, marker: $marker:ident, doc: $doc:literal } ),* $(,)?) => {
        /// The concrete shape of a decoded webhook.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EventKind {
            $( #[doc = $doc] $kind, )*
        }

        impl EventKind {
            /// Every kind, in table order.
            pub const ALL: &'static [EventKind] = &[$( EventKind::$kind, )*];

            /// A stable snake_case name for logs and metrics labels.
            pub const fn name(self) -> &'static str {
                match self {
                    $( EventKind::$kind => stringify!($field), )*
                }
            }
        }

        /// A decoded webhook, one variant per [`EventKind`].
        #[derive(Debug, Clone, PartialEq)]
        pub enum Event {
            $( #[doc = $doc] $kind($ty), )*
        }

        impl Event {
            /// The kind of this event.
            pub fn kind(&self) -> EventKind {
                match self {
                    $( Event::$kind(_) => EventKind::$kind, )*
                }
            }

            /// The payload's own discriminator value.
            pub fn discriminator(&self) -> &str {
                match self {
                    $( Event::$kind(e) => WebhookEvent::discriminator(e), )*
                }
            }
        }

        pub(crate) fn decode_kind(kind: EventKind, payload: &[u8]) -> Result<Event, DecodeError> {
            match kind {
                $( EventKind::$kind => Ok(Event::$kind(serde_json::from_slice::<$ty>(payload)?)), )*
            }
        }

        $(
            impl WebhookEvent for $ty {
                const KIND: EventKind = EventKind::$kind;

                fn discriminator(&self) -> &str {
                    &self.$marker
                }

                fn from_event(event: &Event) -> Option<&Self> {
                    match event {
                        Event::$kind(e) => Some(e),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Event {
                fn from(event: $ty) -> Self {
                    Event::$kind(event)
                }
            }
        )*
    };
}

for_each_event!(define_events);

impl EventKind {
    /// Number of distinct event kinds.
    pub const COUNT: usize = EventKind::ALL.len();
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
