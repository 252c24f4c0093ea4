//! Pre-send and post-receive hook traits.
//!
//! Hooks form two disjoint ordered chains around the transport call. Both
//! chains run every hook in registration order, each awaited to completion
//! before the next begins; there is no short-circuit value. The only way to
//! abort a chain is to return an `Err`, which fails the whole call — and,
//! for a pre-send error, means the transport is never invoked.

use async_trait::async_trait;

use crate::{Request, Response, Result};

/// A pre-send hook.
///
/// Receives the one mutable request descriptor for the call and may mutate
/// its headers, body, or method in place; mutations are visible to every
/// later middleware and to the transport. Implementations must not swap the
/// descriptor out wholesale, only adjust its fields.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use fletch_core::{Middleware, Request, Result};
///
/// struct ApiKey(String);
///
/// #[async_trait]
/// impl Middleware for ApiKey {
///     async fn on_request(&self, request: &mut Request) -> Result<()> {
///         request
///             .headers_mut()
///             .insert("X-Api-Key".to_string(), self.0.clone());
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Inspect or mutate the outgoing request before the transport runs.
    async fn on_request(&self, request: &mut Request) -> Result<()>;
}

/// A post-receive hook.
///
/// Receives the frozen request descriptor (read-only) and the live response
/// after the transport resolves. Intended for observation — logging, cache
/// population, metrics — not mutation: the response value returned to the
/// caller is never altered by afterwares.
#[async_trait]
pub trait Afterware: Send + Sync {
    /// Observe the completed exchange.
    async fn on_response(&self, request: &Request, response: &Response) -> Result<()>;
}
