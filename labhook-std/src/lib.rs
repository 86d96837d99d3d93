//! # labhook-std
//!
//! Listener registry and concurrent dispatch engine for labhook.
//!
//! This crate provides:
//! - **Registry**: [`ListenerRegistry`] with per-kind and by-capability
//!   registration ([`Subscriber`], [`Capabilities`])
//! - **Dispatch**: [`Dispatcher`], a first-error-wins concurrent fan-out
//!   with a configurable [`FanoutPolicy`]
//! - **Standard listeners**: Logging, Timeout (feature `timeout`)
//! - **Testing**: recording, counting and failing listeners

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core
pub use labhook_core;

pub mod dispatch;
pub mod hooks;
pub mod registry;
pub mod testing;

pub use dispatch::{Dispatcher, FanoutPolicy};
pub use registry::{Capabilities, ListenerRegistry, Routable, Subscriber};
