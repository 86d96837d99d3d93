//! Testing utilities for labhook.
//!
//! Listeners that record what they observe, for use in tests of code that
//! builds registries or dispatchers.
//!
//! # Features
//!
//! - [`RecordingListener`]: keeps a copy of every event it receives
//! - [`CountingListener`]: counts invocations across any event types
//! - [`FailingListener`]: always fails with a fixed message
//! - [`CancellationWatcher`]: waits for the dispatch context to be cancelled

use crate::registry::{Capabilities, Subscriber};
use labhook_core::{BoxError, Context, Listener, WebhookEvent};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records every event it receives.
///
/// Clones share the same record.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingListener::<PushEvent>::new();
/// let registry = ListenerRegistry::new().register_for::<PushEvent, _>(recorder.clone());
///
/// // dispatch...
///
/// assert_eq!(recorder.events()[0].project_id, 15);
/// ```
pub struct RecordingListener<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> RecordingListener<E> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A copy of the recorded events, in arrival order.
    pub fn events(&self) -> Vec<E> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded events.
    pub fn count(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget all recorded events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<E: Clone> Default for RecordingListener<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for RecordingListener<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<E: WebhookEvent> Listener<E> for RecordingListener<E> {
    async fn on_event(&self, _ctx: &Context, event: &E) -> Result<(), BoxError> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations of any event type.
///
/// Registered by capability, it subscribes to every event kind.
#[derive(Clone, Default)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E: WebhookEvent> Listener<E> for CountingListener {
    async fn on_event(&self, _ctx: &Context, _event: &E) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Subscriber for CountingListener {
    fn capabilities(caps: Capabilities<Self>) -> Capabilities<Self> {
        caps.with_all()
    }
}

// ============================================================================
// Failing Listener
// ============================================================================

/// A listener that always fails.
#[derive(Clone)]
pub struct FailingListener {
    message: String,
    calls: Arc<AtomicUsize>,
}

impl FailingListener {
    /// Create a listener failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times the listener was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<E: WebhookEvent> Listener<E> for FailingListener {
    async fn on_event(&self, _ctx: &Context, _event: &E) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Cancellation Watcher
// ============================================================================

/// A listener that blocks until its dispatch context is cancelled.
///
/// Pair it with a [`FailingListener`] to observe that a failure cancels
/// sibling listeners. Dispatched alone, it never completes.
#[derive(Clone, Default)]
pub struct CancellationWatcher {
    observed: Arc<AtomicBool>,
}

impl CancellationWatcher {
    /// Create a watcher that has not yet observed cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the watcher saw its context cancelled.
    pub fn observed(&self) -> bool {
        self.observed.load(Ordering::SeqCst)
    }
}

impl<E: WebhookEvent> Listener<E> for CancellationWatcher {
    async fn on_event(&self, ctx: &Context, _event: &E) -> Result<(), BoxError> {
        ctx.cancelled().await;
        self.observed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
