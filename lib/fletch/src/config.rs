//! Client configuration types.

use std::sync::Arc;

use fletch_core::{Afterware, Middleware};

/// Configuration for a [`crate::Client`].
///
/// Owned exclusively by the client instance and immutable after
/// construction; concurrent calls share it read-only.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL, prepended verbatim to every route path.
    pub base_url: String,
    /// Pre-send hooks, run in order before every transport call.
    pub middlewares: Vec<Arc<dyn Middleware>>,
    /// Post-receive hooks, run in order after every transport call.
    pub afterwares: Vec<Arc<dyn Afterware>>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("middlewares", &self.middlewares.len())
            .field("afterwares", &self.afterwares.len())
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with the given base URL and no hooks.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            middlewares: Vec::new(),
            afterwares: Vec::new(),
        }
    }

    /// Create a new configuration builder.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(base_url),
        }
    }
}

/// Builder for [`ClientConfig`].
///
/// # Example
///
/// ```
/// use fletch::{ClientConfig, middleware::BearerAuth};
///
/// let config = ClientConfig::builder("https://api.example.com")
///     .middleware(BearerAuth::new("token"))
///     .build();
/// ```
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Append a pre-send hook. Hooks run in the order they are added.
    #[must_use]
    pub fn middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.config.middlewares.push(Arc::new(middleware));
        self
    }

    /// Append a post-receive hook. Hooks run in the order they are added.
    #[must_use]
    pub fn afterware(mut self, afterware: impl Afterware + 'static) -> Self {
        self.config.afterwares.push(Arc::new(afterware));
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
