//! # Dispatch Context
//!
//! Every listener callback receives a [`Context`]: a cancellation token plus
//! a bag of request-scoped values. The transport adapter seeds the values
//! from the inbound request's extensions; the dispatch engine hands each
//! dispatch a child context and cancels it on the first listener failure.
//!
//! Cancellation is cooperative. A listener that never looks at
//! [`Context::cancelled`] or [`Context::is_cancelled`] runs to completion.

use http::Extensions;
use std::sync::Arc;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Cancellation signal and request-scoped values for one dispatch.
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    values: Arc<Extensions>,
}

impl Context {
    /// Create an empty, uncancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context driven by an existing cancellation token.
    ///
    /// Use this to give a dispatch a deadline or tie it to server shutdown.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            values: Arc::default(),
        }
    }

    /// Create a context carrying the given values.
    pub fn from_extensions(values: Extensions) -> Self {
        Self {
            token: CancellationToken::new(),
            values: Arc::new(values),
        }
    }

    /// Add a value, replacing any previous value of the same type.
    pub fn insert<T: Clone + Send + Sync + 'static>(mut self, value: T) -> Self {
        Arc::make_mut(&mut self.values).insert(value);
        self
    }

    /// Look up a value by type.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.values.get::<T>()
    }

    /// Derive a context whose cancellation does not reach the parent.
    ///
    /// The child shares the parent's values and is cancelled whenever the
    /// parent is.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            values: Arc::clone(&self.values),
        }
    }

    /// Cancel this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether this context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once this context is cancelled.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }

    /// The underlying cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}
