//! Per-call options.
//!
//! [`RequestOptions`] is the caller-supplied bag of path substitutions,
//! query parameters, and body content for one call. [`RequestOverrides`]
//! carries caller-level request adjustments — everything except method and
//! body, which the client owns.

use serde_json::Value;

/// Request body candidates keyed by MIME type.
///
/// A tagged-union-by-key encoding of "one of several content types":
/// exactly one entry is expected, and the first entry (insertion order)
/// wins when the body is serialized. An empty `Content` behaves like no
/// content at all: the body defaults to `("application/json", "{}")`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    entries: Vec<(String, Value)>,
}

impl Content {
    /// Creates an empty content map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON content (`application/json`).
    ///
    /// Serialization happens here, not at send time: a value that cannot be
    /// represented as JSON degrades to the empty object with a logged
    /// warning, preserving the pipeline's never-fail serialization
    /// contract.
    #[must_use]
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        let payload = match serde_json::to_value(value) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(%error, "content payload not representable as JSON, using {{}}");
                Value::Object(serde_json::Map::new())
            }
        };
        Self::new().with(fletch_core::APPLICATION_JSON, payload)
    }

    /// Adds an entry for the given MIME type.
    #[must_use]
    pub fn with(mut self, mime: impl Into<String>, payload: Value) -> Self {
        self.entries.push((mime.into(), payload));
        self
    }

    /// First entry, the one the serializer selects.
    #[must_use]
    pub(crate) fn first(&self) -> Option<(&str, &Value)> {
        self.entries
            .first()
            .map(|(mime, payload)| (mime.as_str(), payload))
    }
}

/// Caller-supplied bag of `content`, `path`, and `query` for one call.
///
/// Path and query pairs keep insertion order; substitution and query
/// assembly follow that order. Values are coerced to strings via
/// [`ToString`] with no further conversion or escaping.
///
/// # Example
///
/// ```
/// use fletch::{Content, RequestOptions};
///
/// let options = RequestOptions::new()
///     .path("id", 7)
///     .query("page", 1)
///     .content(Content::json(&serde_json::json!({"name": "Alice"})));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub(crate) content: Option<Content>,
    pub(crate) path: Vec<(String, String)>,
    pub(crate) query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates an empty options bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the body content map.
    #[must_use]
    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Adds a path substitution: `{key}` in the template becomes `value`.
    #[must_use]
    pub fn path(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.path.push((key.into(), value.to_string()));
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

/// Caller-level request overrides.
///
/// Limited to headers: method and body belong to the client, and the
/// descriptor exposes nothing else to override. Override headers are
/// layered after the computed `Content-Type`, so they win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOverrides {
    pub(crate) headers: Vec<(String, String)>,
}

impl RequestOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, overriding any computed value of the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
