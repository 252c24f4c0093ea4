//! Parameter serialization.
//!
//! Pure helpers behind the client's verb methods: path substitution, query
//! assembly, and body selection. None of them can fail a call — malformed
//! input degrades to a documented default so a best-effort request still
//! reaches the transport. Values pass through with string coercion only;
//! no percent-encoding is applied (a deliberate, documented trade-off the
//! caller must respect).

use bytes::Bytes;
use serde_json::Value;

use crate::options::Content;

/// A serialized body with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SerializedBody {
    pub(crate) content_type: String,
    pub(crate) payload: Bytes,
}

impl Default for SerializedBody {
    fn default() -> Self {
        Self {
            content_type: fletch_core::APPLICATION_JSON.to_string(),
            payload: Bytes::from_static(b"{}"),
        }
    }
}

/// Substitute `{key}` placeholders in a path template.
///
/// Each pair replaces the first occurrence of its literal `{key}` token, in
/// pair order. Keys absent from the template leave it unchanged; an empty
/// map returns the template as-is.
pub(crate) fn substitute_path(template: &str, params: &[(String, String)]) -> String {
    params.iter().fold(template.to_string(), |path, (key, value)| {
        path.replacen(&format!("{{{key}}}"), value, 1)
    })
}

/// Assemble a query string from key/value pairs.
///
/// `[(a,1),(b,2)]` becomes `?a=1&b=2`; an empty map yields the empty string
/// rather than a bare `?`.
pub(crate) fn build_query(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let joined = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

/// Select and serialize the request body from the content map.
///
/// The first entry wins; an absent or empty map defaults to
/// `("application/json", "{}")`. Serialization faults fall back to the same
/// default with a logged warning instead of failing the call.
pub(crate) fn serialize_body(content: Option<&Content>) -> SerializedBody {
    let Some((mime, payload)) = content.and_then(Content::first) else {
        return SerializedBody::default();
    };

    match to_wire(mime, payload) {
        Ok(bytes) => SerializedBody {
            content_type: mime.to_string(),
            payload: bytes,
        },
        // `to_vec` of a `Value` cannot fail today; the conversion that can
        // is in `Content::json`, which degrades the same way. This arm
        // keeps the wire step on the same contract.
        Err(error) => {
            tracing::warn!(%error, content_type = mime, "body serialization failed, sending {{}}");
            SerializedBody::default()
        }
    }
}

fn to_wire(mime: &str, payload: &Value) -> serde_json::Result<Bytes> {
    // Non-JSON content types send plain string payloads as-is; everything
    // else, a JSON string included, goes on the wire as JSON text.
    if mime != fletch_core::APPLICATION_JSON
        && let Value::String(text) = payload
    {
        return Ok(Bytes::from(text.clone().into_bytes()));
    }
    serde_json::to_vec(payload).map(Bytes::from)
}
