//! # Listener
//!
//! A listener observes one kind of webhook event. A single type may
//! implement [`Listener`] for several event types; `labhook-std` can then
//! subscribe it to all of them in one call.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Listener`] uses native `async fn` so implementations stay zero-cost.
//! Registries store listeners as [`DynListener`] trait objects, which every
//! `Listener` implements automatically.

use crate::{context::Context, error::BoxError, event::WebhookEvent};
use std::{future::Future, pin::Pin, sync::Arc};

/// A callback for one webhook event type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener` for `{E}`",
    label = "missing `Listener<{E}>` implementation",
    note = "Listeners must implement `on_event` for each event type they subscribe to."
)]
pub trait Listener<E: WebhookEvent>: Send + Sync + 'static {
    /// Called once per dispatched event.
    ///
    /// The event is shared with every sibling listener and must be treated
    /// as read-only. Long-running work should watch `ctx` for cancellation.
    fn on_event(
        &self,
        ctx: &Context,
        event: &E,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Object-safe version of [`Listener`].
pub trait DynListener<E: WebhookEvent>: Send + Sync + 'static {
    /// Called once per dispatched event (dynamic dispatch version).
    fn on_event_dyn<'a>(
        &'a self,
        ctx: &'a Context,
        event: &'a E,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

// Blanket implementation: any Listener is usable as a DynListener.
impl<E: WebhookEvent, L: Listener<E>> DynListener<E> for L {
    fn on_event_dyn<'a>(
        &'a self,
        ctx: &'a Context,
        event: &'a E,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.on_event(ctx, event))
    }
}

/// A shared, type-erased listener.
pub type SharedListener<E> = Arc<dyn DynListener<E>>;

impl<E: WebhookEvent, L: Listener<E>> Listener<E> for Arc<L> {
    async fn on_event(&self, ctx: &Context, event: &E) -> Result<(), BoxError> {
        (**self).on_event(ctx, event).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PushEvent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(AtomicUsize);

    impl Listener<PushEvent> for Counter {
        async fn on_event(&self, _ctx: &Context, _event: &PushEvent) -> Result<(), BoxError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn listener_is_callable_as_trait_object() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let shared: SharedListener<PushEvent> = counter.clone();
        let ctx = Context::new();
        let event = PushEvent::default();

        shared.on_event_dyn(&ctx, &event).await.unwrap();
        counter.on_event(&ctx, &event).await.unwrap();

        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }
}
