//! Compile-time route registry.
//!
//! A route is a path template plus the set of verbs it supports, each with
//! its own response shape. Routes are plain marker types: implement
//! [`Route`] for the path template, then one capability trait per verb the
//! API declares. The client's verb methods are bound on the capability
//! traits, so calling `read` on a route that never declared GET is a
//! compile error. None of this has any runtime representation.
//!
//! # Example
//!
//! ```
//! use fletch_core::{Readable, Removable, Route};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! struct UserById;
//!
//! impl Route for UserById {
//!     const PATH: &'static str = "/users/{id}";
//! }
//!
//! impl Readable for UserById {
//!     type Response = User;
//! }
//!
//! impl Removable for UserById {
//!     type Response = serde_json::Value;
//! }
//! ```

use serde::de::DeserializeOwned;

/// A declared API route.
pub trait Route {
    /// Path template with `{name}` placeholders, e.g. `/users/{id}`.
    const PATH: &'static str;
}

/// Routes that declare GET.
pub trait Readable: Route {
    /// Response body shape for GET on this route.
    type Response: DeserializeOwned;
}

/// Routes that declare POST.
pub trait Creatable: Route {
    /// Response body shape for POST on this route.
    type Response: DeserializeOwned;
}

/// Routes that declare PUT.
pub trait Replaceable: Route {
    /// Response body shape for PUT on this route.
    type Response: DeserializeOwned;
}

/// Routes that declare DELETE.
pub trait Removable: Route {
    /// Response body shape for DELETE on this route.
    type Response: DeserializeOwned;
}
