//! Bearer token authentication middleware.
//!
//! Adds an `Authorization: Bearer <token>` header to all outgoing requests.

use std::sync::Arc;

use async_trait::async_trait;
use fletch_core::{Middleware, Request, Result};

/// Pre-send hook that adds bearer token authentication to requests.
///
/// # Example
///
/// ```
/// use fletch::{ClientConfig, middleware::BearerAuth};
///
/// let config = ClientConfig::builder("https://api.example.com")
///     .middleware(BearerAuth::new("my-secret-token"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: Arc<str>,
}

impl BearerAuth {
    /// Create a new bearer auth hook with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }
}

#[async_trait]
impl Middleware for BearerAuth {
    async fn on_request(&self, request: &mut Request) -> Result<()> {
        request.headers_mut().insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.token),
        );
        Ok(())
    }
}
