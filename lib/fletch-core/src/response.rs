//! HTTP response handling.
//!
//! [`Response`] is what a transport hands back: status, headers, and an
//! optional buffered body. The client decodes it into an [`Envelope`], the
//! `{ data, raw }` pair callers receive: the typed body plus a
//! [`RawResponse`] keeping everything except the consumed body.

use std::collections::HashMap;

use bytes::Bytes;

/// HTTP response with status, headers, and optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Option<Bytes>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates a response with no body.
    #[must_use]
    pub fn empty(status: u16) -> Self {
        Self::new(status, HashMap::new(), None)
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body, if the transport produced one.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Returns `true` if a non-empty body is present.
    ///
    /// Buffering transports may report bodiless responses as zero bytes
    /// rather than `None`; both count as absent.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.body.as_ref().is_some_and(|body| !body.is_empty())
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, Option<Bytes>) {
        (self.status, self.headers, self.body)
    }
}

/// The typed result of one call: decoded body plus the body-less response.
///
/// Created fresh per call and owned by the caller; never cached or reused
/// by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    /// Decoded response body, typed by the route's verb declaration.
    pub data: T,
    /// The original response minus its consumed body.
    pub raw: RawResponse,
}

/// Response metadata left over after the body has been decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    headers: HashMap<String, String>,
}

impl RawResponse {
    /// Creates raw response metadata from status and headers.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>) -> Self {
        Self { status, headers }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
