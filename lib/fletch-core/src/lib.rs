//! Core types and traits for the fletch typed HTTP client.
//!
//! This crate provides the foundational pieces used by fletch:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - HTTP request descriptor
//! - [`Response`], [`Envelope`], and [`RawResponse`] - HTTP response types
//! - [`Error`] and [`Result`] - Error handling
//! - [`Transport`] - The external network-call seam
//! - [`Middleware`] and [`Afterware`] - Pre-send/post-receive hook traits
//! - [`Route`] and its verb capability traits - Compile-time route registry

mod body;
mod error;
mod hook;
mod method;
pub mod prelude;
mod request;
mod response;
mod route;
mod transport;

pub use body::{APPLICATION_JSON, from_json};
pub use error::{BoxError, Error, Result};
pub use hook::{Afterware, Middleware};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::{Envelope, RawResponse, Response};
pub use route::{Creatable, Readable, Removable, Replaceable, Route};
pub use transport::Transport;
