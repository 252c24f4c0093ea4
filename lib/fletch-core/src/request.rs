//! HTTP request descriptor.
//!
//! The client builds exactly one [`Request`] per call via [`Request::builder`],
//! hands it mutably to each pre-send middleware in order, then freezes it for
//! the transport and the post-receive afterwares.
//!
//! # Example
//!
//! ```
//! use fletch_core::{Method, Request};
//!
//! let request = Request::builder(Method::Get, "https://api.example.com/users?page=1")
//!     .header("Accept", "application/json")
//!     .build();
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::Method;

/// An HTTP request with method, URL, headers, and optional body.
///
/// The URL is kept as the literal string the client assembled (base URL,
/// substituted path, query string concatenated verbatim); no parsing,
/// normalization, or percent-encoding is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Replace the HTTP method.
    pub const fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers, for middleware.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Replace the request body, for middleware.
    pub fn set_body(&mut self, body: impl Into<Bytes>) {
        self.body = Some(body.into());
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, String, HashMap<String, String>, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any previous value.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers. Later entries win over earlier ones.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_basic() {
        let request = Request::builder(Method::Get, "https://api.example.com/users")
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url(), "https://api.example.com/users");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn request_builder_with_body() {
        let body = Bytes::from(r#"{"name":"test"}"#);
        let request = Request::builder(Method::Post, "https://api.example.com/users")
            .header("Content-Type", "application/json")
            .body(body.clone())
            .build();

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.body(), Some(&body));
    }

    #[test]
    fn request_builder_header_layering() {
        let request = Request::builder(Method::Post, "https://api.example.com/users")
            .header("Content-Type", "application/json")
            .headers([("Content-Type".to_string(), "text/plain".to_string())])
            .build();

        // Later headers override earlier ones
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn request_mutation() {
        let mut request = Request::builder(Method::Get, "https://api.example.com").build();

        request
            .headers_mut()
            .insert("Authorization".to_string(), "Bearer token".to_string());
        request.set_body(Bytes::from_static(b"{}"));
        request.set_method(Method::Post);

        assert_eq!(request.header("Authorization"), Some("Bearer token"));
        assert_eq!(request.body(), Some(&Bytes::from_static(b"{}")));
        assert_eq!(request.method(), Method::Post);
    }

    #[test]
    fn request_url_is_kept_verbatim() {
        // No percent-encoding or normalization is applied
        let request = Request::builder(Method::Get, "https://host/search?q=a b").build();
        assert_eq!(request.url(), "https://host/search?q=a b");
    }
}
