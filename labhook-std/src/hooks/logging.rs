//! Logging listener for event observation.

use crate::registry::{Capabilities, Subscriber};
use labhook_core::{BoxError, Context, Listener, WebhookEvent};

/// A listener that logs every event it receives.
///
/// Subscribes to every event kind when registered by capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingListener;

impl<E: WebhookEvent> Listener<E> for LoggingListener {
    async fn on_event(&self, _ctx: &Context, event: &E) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(kind = %E::KIND, discriminator = event.discriminator(), "webhook event");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = event;
        }
        Ok(())
    }
}

impl Subscriber for LoggingListener {
    fn capabilities(caps: Capabilities<Self>) -> Capabilities<Self> {
        caps.with_all()
    }
}
