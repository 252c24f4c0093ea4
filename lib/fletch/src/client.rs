//! The request orchestrator.
//!
//! [`Client`] turns a route (a [`Route`] impl) plus per-call options into
//! one trip through the pipeline: serialize parameters, run pre-send hooks,
//! dispatch to the transport, run post-receive hooks, decode the envelope.

use serde::de::DeserializeOwned;
use tracing::{Instrument, Level, debug, info, span, warn};

use fletch_core::{
    Creatable, Envelope, Method, Readable, Removable, Replaceable, Request, Result, Transport,
};

use crate::config::ClientConfig;
use crate::decode::decode_response;
use crate::options::{RequestOptions, RequestOverrides};
use crate::serialize::{build_query, serialize_body, substitute_path};

/// Typed HTTP client over a declarative route map.
///
/// Generic over the [`Transport`] that performs the actual network call.
/// One verb method exists per HTTP verb, each constrained to routes that
/// declare that verb; every call builds exactly one request descriptor and
/// returns a fresh [`Envelope`].
///
/// The client holds no mutable state: concurrent calls share only the
/// read-only configuration, so they never interleave observably.
///
/// # Example
///
/// ```ignore
/// use fletch::prelude::*;
///
/// struct UserById;
///
/// impl Route for UserById {
///     const PATH: &'static str = "/users/{id}";
/// }
///
/// impl Readable for UserById {
///     type Response = User;
/// }
///
/// let client = Client::new(transport, "https://api.example.com");
/// let user = client
///     .read::<UserById>(RequestOptions::new().path("id", 7), RequestOverrides::new())
///     .await?;
/// ```
pub struct Client<T> {
    transport: T,
    config: ClientConfig,
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Create a client with the given transport, base URL, and no hooks.
    #[must_use]
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self::with_config(transport, ClientConfig::new(base_url))
    }

    /// Create a client with a full configuration.
    #[must_use]
    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET a route that declares [`Readable`].
    ///
    /// # Errors
    ///
    /// Fails if a hook raises, the transport fails, or the response body
    /// cannot be decoded.
    pub async fn read<R: Readable>(
        &self,
        options: RequestOptions,
        overrides: RequestOverrides,
    ) -> Result<Envelope<R::Response>> {
        self.dispatch(Method::Get, R::PATH, options, overrides)
            .await
    }

    /// POST to a route that declares [`Creatable`].
    ///
    /// # Errors
    ///
    /// Fails if a hook raises, the transport fails, or the response body
    /// cannot be decoded.
    pub async fn create<R: Creatable>(
        &self,
        options: RequestOptions,
        overrides: RequestOverrides,
    ) -> Result<Envelope<R::Response>> {
        self.dispatch(Method::Post, R::PATH, options, overrides)
            .await
    }

    /// PUT to a route that declares [`Replaceable`].
    ///
    /// # Errors
    ///
    /// Fails if a hook raises, the transport fails, or the response body
    /// cannot be decoded.
    pub async fn replace<R: Replaceable>(
        &self,
        options: RequestOptions,
        overrides: RequestOverrides,
    ) -> Result<Envelope<R::Response>> {
        self.dispatch(Method::Put, R::PATH, options, overrides).await
    }

    /// DELETE a route that declares [`Removable`].
    ///
    /// # Errors
    ///
    /// Fails if a hook raises, the transport fails, or the response body
    /// cannot be decoded.
    pub async fn remove<R: Removable>(
        &self,
        options: RequestOptions,
        overrides: RequestOverrides,
    ) -> Result<Envelope<R::Response>> {
        self.dispatch(Method::Delete, R::PATH, options, overrides)
            .await
    }

    /// The shared pipeline behind every verb method.
    ///
    /// Each step is awaited before the next begins: middlewares in
    /// registration order, then the transport, then afterwares in
    /// registration order, then decoding. Nothing within one call runs
    /// concurrently.
    async fn dispatch<D: DeserializeOwned>(
        &self,
        method: Method,
        template: &'static str,
        options: RequestOptions,
        overrides: RequestOverrides,
    ) -> Result<Envelope<D>> {
        let call_span = span!(Level::INFO, "api_call", %method, path = template);

        async move {
            let RequestOptions {
                content,
                path,
                query,
            } = options;

            let body = serialize_body(content.as_ref());
            let url = format!(
                "{}{}{}",
                self.config.base_url,
                substitute_path(template, &path),
                build_query(&query)
            );

            // Override headers are layered after the computed Content-Type
            // so callers can replace it.
            let mut builder = Request::builder(method, url)
                .header("Content-Type", body.content_type)
                .headers(overrides.headers);
            if method.has_request_body() {
                builder = builder.body(body.payload);
            }
            let mut request = builder.build();

            for middleware in &self.config.middlewares {
                middleware.on_request(&mut request).await?;
            }

            // Frozen from here on: the transport consumes a copy, the
            // afterwares observe the original read-only.
            let request = request;
            debug!(url = request.url(), "dispatching request");

            let response = match self.transport.send(request.clone()).await {
                Ok(response) => {
                    info!(status = response.status(), "request completed");
                    response
                }
                Err(error) => {
                    warn!(%error, "request failed");
                    return Err(error);
                }
            };

            for afterware in &self.config.afterwares {
                afterware.on_response(&request, &response).await?;
            }

            decode_response(response)
        }
        .instrument(call_span)
        .await
    }
}
