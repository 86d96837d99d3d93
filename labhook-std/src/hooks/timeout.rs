//! Time-limited listener execution.
//!
//! Requires the `timeout` feature, which pulls in the `tokio` timer.

use labhook_core::{BoxError, Context, Listener, WebhookEvent};
use std::time::Duration;
use thiserror::Error;

/// Error returned when a wrapped listener does not finish in time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("listener timed out after {0:?}")]
pub struct ListenerTimeout(pub Duration);

/// A listener that fails when its inner listener runs longer than a
/// fixed duration.
///
/// The inner future is dropped on expiry. The timeout counts as a listener
/// failure, so it cancels sibling listeners like any other error.
#[derive(Debug, Clone)]
pub struct TimeoutListener<L> {
    inner: L,
    duration: Duration,
}

impl<L> TimeoutListener<L> {
    /// Wrap `inner` with a timeout.
    pub fn new(inner: L, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// Wrap `inner` with a timeout given in milliseconds.
    pub fn millis(inner: L, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// The configured timeout.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The wrapped listener.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<E: WebhookEvent, L: Listener<E>> Listener<E> for TimeoutListener<L> {
    async fn on_event(&self, ctx: &Context, event: &E) -> Result<(), BoxError> {
        match tokio::time::timeout(self.duration, self.inner.on_event(ctx, event)).await {
            Ok(result) => result,
            Err(_) => Err(ListenerTimeout(self.duration).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labhook_core::events::PushEvent;

    struct Sleepy(Duration);

    impl Listener<PushEvent> for Sleepy {
        async fn on_event(&self, _ctx: &Context, _event: &PushEvent) -> Result<(), BoxError> {
            tokio::time::sleep(self.0).await;
            Ok(())
        }
    }

    #[test]
    fn error_names_the_duration() {
        let err = ListenerTimeout(Duration::from_millis(10));
        assert_eq!(err.to_string(), "listener timed out after 10ms");
    }

    #[tokio::test]
    async fn slow_listener_times_out() {
        let listener = TimeoutListener::millis(Sleepy(Duration::from_millis(50)), 10);
        let err = listener
            .on_event(&Context::new(), &PushEvent::default())
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<ListenerTimeout>().is_some());
    }

    #[tokio::test]
    async fn fast_listener_passes_through() {
        let listener = TimeoutListener::millis(Sleepy(Duration::ZERO), 100);
        assert_eq!(listener.duration(), Duration::from_millis(100));
        listener
            .on_event(&Context::new(), &PushEvent::default())
            .await
            .unwrap();
    }
}
