//! Response decoding.
//!
//! Converts a transport [`Response`] into the typed [`Envelope`] returned
//! to the caller. JSON is the only supported decoder; content negotiation
//! with the server is the caller's business via headers.

use fletch_core::{Envelope, RawResponse, Response, Result, from_json};

/// Decode a response into `{ data, raw }`.
///
/// A response without a body (or with zero bytes) decodes as the empty
/// object, so routes whose response type tolerates `{}` — maps, `Value`,
/// structs of optional fields — still produce data for 204-style replies.
pub(crate) fn decode_response<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<Envelope<T>> {
    let has_body = response.has_body();
    let (status, headers, body) = response.into_parts();

    let data = match (has_body, body) {
        (true, Some(body)) => from_json(&body)?,
        _ => from_json(b"{}")?,
    };

    Ok(Envelope {
        data,
        raw: RawResponse::new(status, headers),
    })
}
