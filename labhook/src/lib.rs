//! # labhook
//!
//! Receive GitLab webhook deliveries, decode them into strongly typed
//! events and fan them out to the listeners that care.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use labhook::prelude::*;
//! use labhook::events::PushEvent;
//!
//! struct Deployer;
//!
//! impl Listener<PushEvent> for Deployer {
//!     async fn on_event(&self, _ctx: &Context, push: &PushEvent) -> Result<(), BoxError> {
//!         println!("{} pushed to {}", push.user_name, push.ref_name);
//!         Ok(())
//!     }
//! }
//!
//! let registry = ListenerRegistry::new().register_for::<PushEvent, _>(Deployer);
//! let endpoint = WebhookEndpoint::new(Dispatcher::new(registry));
//!
//! // inside an HTTP handler, for an `http::Request<Bytes>`
//! endpoint.handle(&request).await?;
//! ```
//!
//! ## Crates
//!
//! - `labhook-core`: token registry, disambiguation, decoding, event shapes,
//!   the [`Listener`] trait and [`Context`]
//! - `labhook-std`: [`ListenerRegistry`] and the concurrent [`Dispatcher`]
//! - this crate: the [`WebhookEndpoint`] transport adapter

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod transport;

pub use labhook_core::{
    // Context
    Context,
    // Error types
    BoxError,
    DecodeError,
    DispatchError,
    // Listener
    DynListener,
    // Events
    Event,
    EventKind,
    // Registry
    GITLAB_EVENT_HEADER,
    HookType,
    LabhookError,
    Listener,
    SharedListener,
    TransportError,
    WebhookEvent,
    // Pipeline
    decode,
    decode_hook,
    disambiguate,
    events,
    for_each_event,
    parse,
    resolve,
};

pub use labhook_std::{
    Capabilities, Dispatcher, FanoutPolicy, ListenerRegistry, Routable, Subscriber,
};

pub use transport::{InboundRequest, WebhookEndpoint};

/// Standard listener wrappers.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use labhook_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use labhook_std::testing::*;
}

/// Prelude module - common imports for labhook.
///
/// # Usage
///
/// ```rust,ignore
/// use labhook::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Capabilities, Context, Dispatcher, Event, EventKind, FanoutPolicy,
        LabhookError, Listener, ListenerRegistry, Subscriber, WebhookEndpoint, WebhookEvent,
    };
}
