//! # labhook-core
//!
//! Decoding side of the labhook GitLab webhook pipeline.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs to understand webhook payloads, or that implements
//! listeners without depending on the dispatch engine in `labhook-std`.
//!
//! # Pipeline
//!
//! ```text
//!  "X-Gitlab-Event" ──▶ resolve ──▶ HookType ──┐
//!                                              ├─▶ disambiguate ──▶ EventKind ──▶ decode ──▶ Event
//!  request body ───────────────────────────────┘
//! ```
//!
//! - [`resolve`]: type token to [`HookType`], a pure table lookup
//! - [`disambiguate`]: [`HookType`] plus payload to [`EventKind`]; only
//!   `Note Hook` and `System Hook` inspect the payload
//! - [`decode`]: full deserialization into the [`Event`] sum type
//!
//! [`parse`] runs all three.
//!
//! # Listeners
//!
//! [`Listener`] is the callback trait implemented once per observed event
//! type, and [`Context`] is the cancellation-aware value bag every callback
//! receives.
//!
//! # Error Types
//!
//! - [`LabhookError`] - Top-level error type
//! - [`DecodeError`] - Token, disambiguation and payload errors
//! - [`DispatchError`] - Listener failures
//! - [`TransportError`] - Request extraction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod decode;
mod disambiguate;
mod error;
mod event;
pub mod events;
mod listener;
mod token;

// Re-exports
pub use context::Context;
pub use decode::{decode, decode_hook, parse};
pub use disambiguate::disambiguate;
pub use error::{BoxError, DecodeError, DispatchError, LabhookError, TransportError};
pub use event::{Event, EventKind, WebhookEvent};
pub use listener::{DynListener, Listener, SharedListener};
pub use token::{GITLAB_EVENT_HEADER, HookType, resolve};
