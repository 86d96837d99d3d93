//! # Listener Registry
//!
//! Holds, per [`EventKind`], an insertion-ordered list of listeners.
//! Registration is append-only: there is no removal and no deduplication,
//! so registering the same listener twice yields two invocations.
//!
//! # Registration
//!
//! - [`ListenerRegistry::register_for`] subscribes a listener to one event type.
//! - [`ListenerRegistry::register_by_capability`] subscribes a [`Subscriber`]
//!   to every event type it declares in one call.
//!
//! ```rust,ignore
//! struct Audit;
//!
//! impl Listener<PushEvent> for Audit { /* ... */ }
//! impl Listener<IssueEvent> for Audit { /* ... */ }
//!
//! impl Subscriber for Audit {
//!     fn capabilities(caps: Capabilities<Self>) -> Capabilities<Self> {
//!         caps.with::<PushEvent>().with::<IssueEvent>()
//!     }
//! }
//!
//! let registry = ListenerRegistry::new().register_by_capability(Audit);
//! ```
//!
//! The registry is built during startup and then handed to a
//! [`Dispatcher`](crate::Dispatcher); it has no interior locking.

use futures::future::BoxFuture;
use labhook_core::{BoxError, Context, Event, EventKind, Listener, SharedListener};
use std::{fmt, sync::Arc};

macro_rules! define_collections {
    ($( $kind:ident { field: $field:ident, event: $ty:ty, marker: $marker:ident, doc: $doc:literal } ),* $(,)?) => {
        /// One listener list per event kind.
        #[derive(Default, Clone)]
        pub struct Collections {
            $( $field: Vec<SharedListener<$ty>>, )*
        }

        impl Collections {
            pub(super) fn append(&mut self, other: Collections) {
                $( self.$field.extend(other.$field); )*
            }

            pub(super) fn len_for(&self, kind: EventKind) -> usize {
                match kind {
                    $( EventKind::$kind => self.$field.len(), )*
                }
            }

            pub(super) fn total(&self) -> usize {
                0 $( + self.$field.len() )*
            }

            // Futures are created in registration order; none of them runs
            // until it is polled.
            pub(super) fn calls<'a>(
                &'a self,
                ctx: &'a Context,
                event: &'a Event,
            ) -> Vec<BoxFuture<'a, Result<(), BoxError>>> {
                match event {
                    $(
                        Event::$kind(e) => self
                            .$field
                            .iter()
                            .map(|listener| listener.on_event_dyn(ctx, e))
                            .collect(),
                    )*
                }
            }
        }

        $(
            impl Slot for $ty {
                fn slot(collections: &Collections) -> &[SharedListener<Self>] {
                    &collections.$field
                }

                fn slot_mut(collections: &mut Collections) -> &mut Vec<SharedListener<Self>> {
                    &mut collections.$field
                }
            }
        )*

        impl<L: Send + Sync + 'static> super::Capabilities<L> {
            /// Subscribe to every event kind.
            pub fn with_all(self) -> Self
            where
                $( L: Listener<$ty>, )*
            {
                self $( .with::<$ty>() )*
            }
        }
    };
}

mod sealed {
    use super::{BoxError, BoxFuture, Context, Event, EventKind, Listener, SharedListener};
    use labhook_core::WebhookEvent;

    /// Where the listeners of one event type live.
    pub trait Slot: WebhookEvent {
        fn slot(collections: &Collections) -> &[SharedListener<Self>];
        fn slot_mut(collections: &mut Collections) -> &mut Vec<SharedListener<Self>>;
    }

    labhook_core::for_each_event!(define_collections);
}

/// An event type the registry keeps a listener list for.
///
/// Implemented for every event type in `labhook_core::events` that has an
/// [`EventKind`]; it cannot be implemented outside this crate.
pub trait Routable: sealed::Slot {}

impl<E: sealed::Slot> Routable for E {}

/// The set of event types one listener subscribes to.
///
/// Built with [`with`](Capabilities::with), one call per event type. Each
/// call is checked at compile time: `with::<E>()` only compiles when the
/// listener implements [`Listener<E>`].
pub struct Capabilities<L> {
    listener: Arc<L>,
    collections: sealed::Collections,
}

impl<L: Send + Sync + 'static> Capabilities<L> {
    /// Start an empty capability set for `listener`.
    pub fn new(listener: L) -> Self {
        Self::shared(Arc::new(listener))
    }

    /// Start an empty capability set for an already shared listener.
    pub fn shared(listener: Arc<L>) -> Self {
        Self {
            listener,
            collections: sealed::Collections::default(),
        }
    }

    /// Subscribe to `E`.
    pub fn with<E: Routable>(mut self) -> Self
    where
        L: Listener<E>,
    {
        let listener: SharedListener<E> = self.listener.clone();
        E::slot_mut(&mut self.collections).push(listener);
        self
    }

    /// Number of event kinds subscribed so far.
    pub fn len(&self) -> usize {
        self.collections.total()
    }

    /// Whether no event kind has been subscribed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The listener being subscribed.
    pub fn listener(&self) -> &Arc<L> {
        &self.listener
    }
}

impl<L> fmt::Debug for Capabilities<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("kinds", &KindCounts(&self.collections))
            .finish()
    }
}

/// A listener that declares which event types it observes.
///
/// This is the counterpart of a structural capability check: the listener
/// names each `Listener<E>` it implements, and the registry appends it to
/// exactly those lists.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare its capabilities",
    label = "missing `Subscriber` implementation",
    note = "Implement `Subscriber::capabilities` and call `.with::<E>()` for every `Listener<E>` this type implements."
)]
pub trait Subscriber: Send + Sync + Sized + 'static {
    /// Add every event type this listener observes to `caps`.
    fn capabilities(caps: Capabilities<Self>) -> Capabilities<Self>;
}

/// Per-kind listener lists.
#[derive(Default, Clone)]
pub struct ListenerRegistry {
    collections: sealed::Collections,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener to the list for `E`.
    pub fn register_for<E, L>(self, listener: L) -> Self
    where
        E: Routable,
        L: Listener<E>,
    {
        self.register_shared::<E>([Arc::new(listener) as SharedListener<E>])
    }

    /// Append several listeners, in order, to the list for `E`.
    pub fn register_shared<E: Routable>(
        mut self,
        listeners: impl IntoIterator<Item = SharedListener<E>>,
    ) -> Self {
        E::slot_mut(&mut self.collections).extend(listeners);
        self
    }

    /// Append a listener to the list of every event type it declares.
    pub fn register_by_capability<L: Subscriber>(self, listener: L) -> Self {
        self.register_capabilities(L::capabilities(Capabilities::new(listener)))
    }

    /// Append an explicitly built capability set.
    pub fn register_capabilities<L>(mut self, caps: Capabilities<L>) -> Self {
        self.collections.append(caps.collections);
        self
    }

    /// The listeners registered for `E`, in registration order.
    pub fn listeners<E: Routable>(&self) -> &[SharedListener<E>] {
        E::slot(&self.collections)
    }

    /// Number of listeners registered for `kind`.
    pub fn len_for(&self, kind: EventKind) -> usize {
        self.collections.len_for(kind)
    }

    /// Total number of registrations across all kinds.
    pub fn len(&self) -> usize {
        self.collections.total()
    }

    /// Whether no listener is registered for any kind.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn calls<'a>(
        &'a self,
        ctx: &'a Context,
        event: &'a Event,
    ) -> Vec<BoxFuture<'a, Result<(), BoxError>>> {
        self.collections.calls(ctx, event)
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("kinds", &KindCounts(&self.collections))
            .finish()
    }
}

struct KindCounts<'a>(&'a sealed::Collections);

impl fmt::Debug for KindCounts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            let n = self.0.len_for(*kind);
            if n > 0 {
                map.entry(&kind.name(), &n);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labhook_core::{
        DynListener,
        events::{IssueEvent, PipelineEvent, PushEvent},
    };
    use std::sync::Mutex;

    struct Multi;

    impl Listener<PushEvent> for Multi {
        async fn on_event(&self, _ctx: &Context, _event: &PushEvent) -> Result<(), BoxError> {
            Ok(())
        }
    }

    impl Listener<IssueEvent> for Multi {
        async fn on_event(&self, _ctx: &Context, _event: &IssueEvent) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[derive(Clone)]
    struct Tagged {
        id: usize,
        log: Arc<Mutex<Vec<usize>>>,
    }

    impl Listener<PushEvent> for Tagged {
        async fn on_event(&self, _ctx: &Context, _event: &PushEvent) -> Result<(), BoxError> {
            self.log.lock().unwrap().push(self.id);
            Ok(())
        }
    }

    impl Subscriber for Multi {
        fn capabilities(caps: Capabilities<Self>) -> Capabilities<Self> {
            caps.with::<PushEvent>().with::<IssueEvent>()
        }
    }

    #[test]
    fn empty_registry() {
        let registry = ListenerRegistry::new();
        assert!(registry.is_empty());
        for kind in EventKind::ALL {
            assert_eq!(registry.len_for(*kind), 0);
        }
    }

    #[test]
    fn capability_registration_touches_only_declared_kinds() {
        let registry = ListenerRegistry::new().register_by_capability(Multi);

        assert_eq!(registry.len_for(EventKind::Push), 1);
        assert_eq!(registry.len_for(EventKind::Issue), 1);
        assert_eq!(registry.len_for(EventKind::Pipeline), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let registry = ListenerRegistry::new()
            .register_for::<PushEvent, _>(Multi)
            .register_for::<PushEvent, _>(Multi);
        assert_eq!(registry.listeners::<PushEvent>().len(), 2);
    }

    #[tokio::test]
    async fn listeners_keep_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let tagged = |id| Tagged {
            id,
            log: log.clone(),
        };

        let registry = ListenerRegistry::new()
            .register_for::<PushEvent, _>(tagged(0))
            .register_for::<PushEvent, _>(tagged(1))
            .register_shared::<PushEvent>([
                Arc::new(tagged(2)) as SharedListener<PushEvent>,
                Arc::new(tagged(3)) as SharedListener<PushEvent>,
            ])
            .register_capabilities(Capabilities::new(tagged(4)).with::<PushEvent>())
            .register_for::<PushEvent, _>(tagged(1));

        let ctx = Context::new();
        let event = PushEvent::default();
        for listener in registry.listeners::<PushEvent>() {
            DynListener::on_event_dyn(&**listener, &ctx, &event)
                .await
                .unwrap();
        }

        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2, 3, 4, 1]);
    }

    #[test]
    fn capabilities_share_one_listener() {
        let caps = Capabilities::new(Multi).with::<PushEvent>().with::<IssueEvent>();
        assert_eq!(caps.len(), 2);
        // The builder's own handle plus one per subscribed kind.
        assert_eq!(Arc::strong_count(caps.listener()), 3);
    }

    #[test]
    fn debug_lists_populated_kinds() {
        let registry = ListenerRegistry::new().register_by_capability(Multi);
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("push"));
        assert!(rendered.contains("issue"));
        assert!(!rendered.contains("pipeline"));
        assert!(registry.listeners::<PipelineEvent>().is_empty());
    }
}
