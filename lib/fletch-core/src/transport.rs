//! Transport trait.
//!
//! The actual network call is an external collaborator: anything that takes
//! a [`Request`] and asynchronously produces a [`Response`] can back a
//! client. Implement [`Transport`] over your HTTP stack of choice, or over
//! a scripted double in tests.

use async_trait::async_trait;

use crate::{Request, Response, Result};

/// The external function that performs the actual network call.
///
/// Transport failures must be surfaced as [`crate::Error::Transport`] so the
/// underlying fault propagates unmodified to the caller. The client never
/// retries and attaches no timeout: a call lives exactly as long as this
/// future plus hook execution.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use fletch_core::{Request, Response, Result, Transport};
///
/// struct AlwaysNoContent;
///
/// #[async_trait]
/// impl Transport for AlwaysNoContent {
///     async fn send(&self, _request: Request) -> Result<Response> {
///         Ok(Response::empty(204))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] if the exchange fails for any
    /// reason (network, DNS, TLS, malformed response, ...).
    async fn send(&self, request: Request) -> Result<Response>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    struct Scripted(u16);

    #[async_trait]
    impl Transport for Scripted {
        async fn send(&self, _request: Request) -> Result<Response> {
            Ok(Response::empty(self.0))
        }
    }

    #[tokio::test]
    async fn transport_is_dyn_compatible() {
        let transport: Box<dyn Transport> = Box::new(Scripted(200));
        let request = Request::builder(Method::Get, "https://host/").build();

        let response = transport.send(request).await.expect("response");
        assert_eq!(response.status(), 200);
    }
}
