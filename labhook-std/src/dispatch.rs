//! # Dispatch Engine
//!
//! Fans a decoded [`Event`] out to every listener registered for its kind.
//!
//! # Semantics
//!
//! - One unit of work per registered listener, launched in registration
//!   order and run concurrently; completion order is unspecified.
//! - Zero listeners is a successful no-op.
//! - The first listener to fail cancels the dispatch's child [`Context`]
//!   and its error becomes the result of the dispatch. Later failures are
//!   dropped.
//! - The caller's context is never cancelled by the engine, and a context
//!   that is already cancelled does not stop listeners from being launched.
//!
//! [`FanoutPolicy`] decides what happens to the siblings of a failed
//! listener: they either keep running until they finish (cooperating with
//! the cancelled context if they choose to) or are dropped immediately.

use crate::registry::ListenerRegistry;
use futures::{
    future::BoxFuture,
    stream::{FuturesUnordered, StreamExt},
};
use labhook_core::{BoxError, Context, DispatchError, Event, LabhookError, parse};
use std::sync::Arc;

/// What to do with in-flight listeners once one of them fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanoutPolicy {
    /// Let every launched listener run to completion.
    ///
    /// Siblings observe the cancelled context and may stop early, but the
    /// dispatch only returns once all of them are done.
    #[default]
    WaitAll,

    /// Return on the first failure and drop the remaining listeners.
    FailFast,
}

/// Concurrent, first-error-wins dispatcher.
///
/// Cloning is cheap; clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    registry: Arc<ListenerRegistry>,
    policy: FanoutPolicy,
}

impl Dispatcher {
    /// Create a dispatcher over a fully built registry.
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            policy: FanoutPolicy::default(),
        }
    }

    /// Set the fan-out policy.
    pub fn with_policy(mut self, policy: FanoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured fan-out policy.
    pub fn policy(&self) -> FanoutPolicy {
        self.policy
    }

    /// The registry this dispatcher reads from.
    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Deliver `event` to every listener registered for its kind.
    ///
    /// Every listener is launched even if `ctx` is already cancelled;
    /// observing cancellation is up to the listener.
    pub async fn dispatch(&self, ctx: &Context, event: &Event) -> Result<(), DispatchError> {
        let scope = ctx.child();
        let calls = self.registry.calls(&scope, event);

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("dispatch", kind = %event.kind(), listeners = calls.len());

        let fanout = self.fan_out(&scope, calls);

        #[cfg(feature = "tracing")]
        let fanout = tracing::Instrument::instrument(fanout, span);

        let result = fanout.await;

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::warn!(kind = %event.kind(), error = %err, "dispatch failed");
        }

        result
    }

    /// Resolve, decode and dispatch a raw delivery.
    ///
    /// For transports other than HTTP: the caller extracts the type token
    /// and body itself.
    pub async fn dispatch_raw(
        &self,
        ctx: &Context,
        token: &str,
        payload: &[u8],
    ) -> Result<(), LabhookError> {
        let event = parse(token, payload)?;
        self.dispatch(ctx, &event).await?;
        Ok(())
    }

    async fn fan_out<'a>(
        &self,
        scope: &Context,
        calls: Vec<BoxFuture<'a, Result<(), BoxError>>>,
    ) -> Result<(), DispatchError> {
        let mut pending: FuturesUnordered<_> = calls.into_iter().collect();
        let mut first_error = None;

        while let Some(result) = pending.next().await {
            let Err(err) = result else { continue };
            if first_error.is_some() {
                continue;
            }
            scope.cancel();
            first_error = Some(err);
            if self.policy == FanoutPolicy::FailFast {
                break;
            }
        }

        match first_error {
            Some(err) => Err(DispatchError::Listener(err)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labhook_core::{Listener, events::PushEvent};
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };
    use tokio::time::sleep;

    struct SlowListener {
        val: usize,
        out: Arc<AtomicUsize>,
    }

    impl Listener<PushEvent> for SlowListener {
        async fn on_event(&self, _ctx: &Context, _event: &PushEvent) -> Result<(), BoxError> {
            sleep(Duration::from_millis(50)).await;
            self.out.fetch_add(self.val, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Failing;

    impl Listener<PushEvent> for Failing {
        async fn on_event(&self, _ctx: &Context, _event: &PushEvent) -> Result<(), BoxError> {
            Err("push rejected".into())
        }
    }

    fn slow(val: usize, out: &Arc<AtomicUsize>) -> SlowListener {
        SlowListener {
            val,
            out: out.clone(),
        }
    }

    #[tokio::test]
    async fn listeners_run_concurrently() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = ListenerRegistry::new()
            .register_for::<PushEvent, _>(slow(1, &counter))
            .register_for::<PushEvent, _>(slow(10, &counter))
            .register_for::<PushEvent, _>(slow(100, &counter));
        let dispatcher = Dispatcher::new(registry);

        let start = std::time::Instant::now();
        dispatcher
            .dispatch(&Context::new(), &Event::Push(PushEvent::default()))
            .await
            .unwrap();
        let elapsed = start.elapsed();

        assert_eq!(counter.load(Ordering::SeqCst), 111);
        // Sequential would take 150ms.
        assert!(
            elapsed.as_millis() < 100,
            "Should be parallel, took {}ms",
            elapsed.as_millis()
        );
    }

    #[tokio::test]
    async fn fail_fast_drops_slow_siblings() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = ListenerRegistry::new()
            .register_for::<PushEvent, _>(slow(1, &counter))
            .register_for::<PushEvent, _>(Failing);
        let dispatcher = Dispatcher::new(registry).with_policy(FanoutPolicy::FailFast);

        let err = dispatcher
            .dispatch(&Context::new(), &Event::Push(PushEvent::default()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "listener error: push rejected");
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn wait_all_lets_siblings_finish() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = ListenerRegistry::new()
            .register_for::<PushEvent, _>(Failing)
            .register_for::<PushEvent, _>(slow(1, &counter));
        let dispatcher = Dispatcher::new(registry);
        assert_eq!(dispatcher.policy(), FanoutPolicy::WaitAll);

        let result = dispatcher
            .dispatch(&Context::new(), &Event::Push(PushEvent::default()))
            .await;

        assert!(matches!(result, Err(DispatchError::Listener(_))));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancelled_context_still_launches_every_listener() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = ListenerRegistry::new()
            .register_for::<PushEvent, _>(slow(1, &counter))
            .register_for::<PushEvent, _>(slow(10, &counter));
        let dispatcher = Dispatcher::new(registry);

        let ctx = Context::new();
        ctx.cancel();
        dispatcher
            .dispatch(&ctx, &Event::Push(PushEvent::default()))
            .await
            .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 11);
    }

    #[tokio::test]
    async fn cancelled_context_with_no_listeners_succeeds() {
        let ctx = Context::new();
        ctx.cancel();
        Dispatcher::default()
            .dispatch(&ctx, &Event::Push(PushEvent::default()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failure_does_not_cancel_caller_context() {
        let registry = ListenerRegistry::new().register_for::<PushEvent, _>(Failing);
        let dispatcher = Dispatcher::new(registry);

        let ctx = Context::new();
        let _ = dispatcher
            .dispatch(&ctx, &Event::Push(PushEvent::default()))
            .await;

        assert!(!ctx.is_cancelled());
    }

    #[tokio::test]
    async fn dispatch_raw_reports_unknown_token() {
        let dispatcher = Dispatcher::default();
        let err = dispatcher
            .dispatch_raw(&Context::new(), "Bogus Hook", b"{}")
            .await
            .unwrap_err();
        assert!(err.is_unsupported());
    }
}
