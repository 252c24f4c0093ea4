//! Response logging afterware.
//!
//! Logs a summary of each completed exchange using the `tracing` crate.

use async_trait::async_trait;
use fletch_core::{Afterware, Request, Response, Result};
use tracing::{debug, info, warn};

/// Log level for the logging afterware.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogDetail {
    /// Summary only (method, url, status).
    #[default]
    Summary,
    /// Include response headers.
    Headers,
}

/// Post-receive hook that logs a response summary.
///
/// Purely observational: it never touches the request or alters the
/// response the caller receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logging {
    detail: LogDetail,
}

impl Logging {
    /// Create a logging hook with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging hook that also logs response headers.
    #[must_use]
    pub fn with_headers() -> Self {
        Self {
            detail: LogDetail::Headers,
        }
    }
}

#[async_trait]
impl Afterware for Logging {
    async fn on_response(&self, request: &Request, response: &Response) -> Result<()> {
        let method = request.method();
        let url = request.url();
        let status = response.status();

        if let LogDetail::Headers = self.detail {
            debug!(headers = ?response.headers(), "response headers");
        }

        if response.is_success() {
            info!(%method, url, status, "exchange completed");
        } else {
            warn!(%method, url, status, "exchange completed with HTTP error");
        }

        Ok(())
    }
}
