#![allow(dead_code)]

use http::Request;
use labhook::{
    BoxError, Capabilities, Context, Listener, Subscriber,
    events::{IssueEvent, MergeEvent, PushEvent},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Payloads
// ============================================================================

pub const PUSH_BODY: &str = include_str!("../../../labhook-core/tests/fixtures/push.json");
pub const ISSUE_BODY: &str = include_str!("../../../labhook-core/tests/fixtures/issue.json");
pub const NOTE_MR_BODY: &str =
    include_str!("../../../labhook-core/tests/fixtures/note_merge_request.json");
pub const SYSTEM_USER_BODY: &str =
    include_str!("../../../labhook-core/tests/fixtures/system_user_create.json");

pub fn delivery(token: &str, body: &str) -> Request<Vec<u8>> {
    Request::post("/webhooks/gitlab")
        .header("X-Gitlab-Event", token)
        .header("Content-Type", "application/json")
        .body(body.as_bytes().to_vec())
        .unwrap()
}

// ============================================================================
// Context Values
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct RequestId(pub String);

/// Records the `RequestId` visible in the context of each push it sees.
#[derive(Clone, Default)]
pub struct RequestIdRecorder {
    pub seen: Arc<Mutex<Vec<Option<RequestId>>>>,
}

impl Listener<PushEvent> for RequestIdRecorder {
    async fn on_event(&self, ctx: &Context, _event: &PushEvent) -> Result<(), BoxError> {
        self.seen.lock().unwrap().push(ctx.get::<RequestId>().cloned());
        Ok(())
    }
}

// ============================================================================
// Multi-capability Listener
// ============================================================================

/// Observes pushes, issues and merge requests, counting each separately.
#[derive(Default)]
pub struct ProjectActivity {
    pub pushes: AtomicUsize,
    pub issues: AtomicUsize,
    pub merges: AtomicUsize,
}

impl ProjectActivity {
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.pushes.load(Ordering::SeqCst),
            self.issues.load(Ordering::SeqCst),
            self.merges.load(Ordering::SeqCst),
        )
    }
}

impl Listener<PushEvent> for ProjectActivity {
    async fn on_event(&self, _ctx: &Context, _event: &PushEvent) -> Result<(), BoxError> {
        self.pushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Listener<IssueEvent> for ProjectActivity {
    async fn on_event(&self, _ctx: &Context, _event: &IssueEvent) -> Result<(), BoxError> {
        self.issues.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Listener<MergeEvent> for ProjectActivity {
    async fn on_event(&self, _ctx: &Context, _event: &MergeEvent) -> Result<(), BoxError> {
        self.merges.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Subscriber for ProjectActivity {
    fn capabilities(caps: Capabilities<Self>) -> Capabilities<Self> {
        caps.with::<PushEvent>()
            .with::<IssueEvent>()
            .with::<MergeEvent>()
    }
}
