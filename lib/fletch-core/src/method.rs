//! HTTP method types.

use derive_more::Display;

/// HTTP request method.
///
/// Only the four verbs the route registry exposes are represented; each maps
/// to one client operation (`read`, `create`, `replace`, `remove`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - retrieve a resource.
    #[display("GET")]
    Get,
    /// POST method - create a resource.
    #[display("POST")]
    Post,
    /// PUT method - replace a resource.
    #[display("PUT")]
    Put,
    /// DELETE method - remove a resource.
    #[display("DELETE")]
    Delete,
}

impl Method {
    /// Returns `true` if requests with this method carry an entity body.
    ///
    /// GET requests are query-only: the client still computes a
    /// `Content-Type` header for them but never attaches a body.
    #[must_use]
    pub const fn has_request_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}
