//! JSON body helpers.

use crate::Result;

/// The default MIME type for request bodies and the only response decoder.
pub const APPLICATION_JSON: &str = "application/json";

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so decode failures name the exact field that
/// failed (e.g., "user.address.city").
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if deserialization fails.
///
/// # Example
///
/// ```
/// use fletch_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct User { name: String }
///
/// let user: User = from_json(br#"{"name":"Alice"}"#).expect("deserialize");
/// assert_eq!(user, User { name: "Alice".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}
