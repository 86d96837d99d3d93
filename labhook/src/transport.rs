//! # Transport Adapter
//!
//! Pulls the type token and body out of an inbound request, decodes the
//! body and dispatches the resulting event. Every failure is returned to
//! the caller as-is; mapping errors to HTTP statuses or retrying is the
//! serving layer's business.

use http::{HeaderName, HeaderValue, Request};
use labhook_core::{Context, GITLAB_EVENT_HEADER, LabhookError, TransportError, parse};
use labhook_std::Dispatcher;

/// A request the adapter can read a webhook delivery from.
///
/// Implemented for [`http::Request`] over any byte-like body.
pub trait InboundRequest {
    /// Look up a header value.
    fn header(&self, name: &HeaderName) -> Option<&HeaderValue>;

    /// The full request body.
    fn body_bytes(&self) -> &[u8];

    /// The context listeners see when no override is supplied.
    fn context(&self) -> Context {
        Context::new()
    }
}

impl<B: AsRef<[u8]>> InboundRequest for Request<B> {
    fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.headers().get(name)
    }

    fn body_bytes(&self) -> &[u8] {
        self.body().as_ref()
    }

    // Request extensions become context values, so middleware can hand
    // request-scoped data to listeners.
    fn context(&self) -> Context {
        Context::from_extensions(self.extensions().clone())
    }
}

/// Receives webhook deliveries and dispatches them.
///
/// # Example
///
/// ```rust,ignore
/// let endpoint = WebhookEndpoint::new(Dispatcher::new(registry));
///
/// // inside an HTTP handler
/// endpoint.handle(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct WebhookEndpoint {
    dispatcher: Dispatcher,
    header: HeaderName,
}

impl WebhookEndpoint {
    /// Create an endpoint reading the token from [`GITLAB_EVENT_HEADER`].
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            header: GITLAB_EVENT_HEADER,
        }
    }

    /// Read the type token from a different header.
    pub fn with_header_name(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }

    /// The header carrying the type token.
    pub fn header_name(&self) -> &HeaderName {
        &self.header
    }

    /// The dispatcher events are handed to.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Extract the type token from `request`.
    pub fn type_token<'r, R: InboundRequest>(
        &self,
        request: &'r R,
    ) -> Result<&'r str, TransportError> {
        let value = request
            .header(&self.header)
            .ok_or_else(|| TransportError::MissingHeader(self.header.to_string()))?;
        value
            .to_str()
            .map_err(|_| TransportError::InvalidHeader(self.header.to_string()))
    }

    /// Decode and dispatch `request` with a context derived from it.
    pub async fn handle<R: InboundRequest + Sync>(&self, request: &R) -> Result<(), LabhookError> {
        let ctx = request.context();
        self.handle_with_context(&ctx, request).await
    }

    /// Decode and dispatch `request` under a caller-supplied context.
    pub async fn handle_with_context<R: InboundRequest + Sync>(
        &self,
        ctx: &Context,
        request: &R,
    ) -> Result<(), LabhookError> {
        let token = self.type_token(request)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(token, "webhook received");

        let event = match parse(token, request.body_bytes()) {
            Ok(event) => event,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(token, error = %err, "webhook rejected");
                return Err(err.into());
            }
        };

        self.dispatcher.dispatch(ctx, &event).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(token: Option<&[u8]>) -> Request<Vec<u8>> {
        let mut builder = Request::post("/hooks");
        if let Some(token) = token {
            builder = builder.header("X-Gitlab-Event", token);
        }
        builder.body(br#"{"object_kind":"push"}"#.to_vec()).unwrap()
    }

    #[test]
    fn token_lookup_is_case_insensitive_on_the_name() {
        let endpoint = WebhookEndpoint::new(Dispatcher::default());
        let req = request(Some(b"Push Hook"));
        assert_eq!(endpoint.type_token(&req).unwrap(), "Push Hook");
    }

    #[test]
    fn default_header_is_the_gitlab_event_header() {
        let endpoint = WebhookEndpoint::new(Dispatcher::default());
        assert_eq!(endpoint.header_name(), &GITLAB_EVENT_HEADER);
        assert_eq!(endpoint.header_name().as_str(), "x-gitlab-event");
    }

    #[test]
    fn missing_header_is_reported() {
        let endpoint = WebhookEndpoint::new(Dispatcher::default());
        let err = endpoint.type_token(&request(None)).unwrap_err();
        assert_eq!(err, TransportError::MissingHeader("x-gitlab-event".into()));
        assert_eq!(err.to_string(), "missing x-gitlab-event header");
    }

    #[test]
    fn non_visible_ascii_header_is_invalid() {
        let endpoint = WebhookEndpoint::new(Dispatcher::default());
        let err = endpoint
            .type_token(&request(Some("Push Hook \u{e9}".as_bytes())))
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidHeader(_)));
    }

    #[test]
    fn custom_header_name() {
        let endpoint = WebhookEndpoint::new(Dispatcher::default())
            .with_header_name(HeaderName::from_static("x-event-type"));
        let req = Request::post("/")
            .header("X-Event-Type", "Tag Push Hook")
            .body(Vec::new())
            .unwrap();
        assert_eq!(endpoint.header_name().as_str(), "x-event-type");
        assert_eq!(endpoint.type_token(&req).unwrap(), "Tag Push Hook");
    }
}
