//! Typed HTTP client driven by a declarative route map.
//!
//! Declare each API route as a marker type carrying its path template and
//! the verbs it supports, then let [`Client`] build, hook, dispatch, and
//! decode one call at a time. The network itself stays outside the crate:
//! any [`Transport`] implementation (over hyper, reqwest, a test double)
//! can back a client.
//!
//! # Example
//!
//! ```ignore
//! use fletch::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct User {
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
//! let client = Client::new(transport, "https://api.example.com");
//! let envelope = client
//!     .read::<UserById>(RequestOptions::new().path("id", 42), RequestOverrides::new())
//!     .await?;
//! println!("{} ({})", envelope.data.name, envelope.raw.status());
//! ```

mod client;
mod config;
mod decode;
pub mod middleware;
mod options;
pub mod prelude;
mod serialize;

// Re-export client types
pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use options::{Content, RequestOptions, RequestOverrides};

// Re-export core types
pub use fletch_core::{
    APPLICATION_JSON, Afterware, BoxError, Creatable, Envelope, Error, Method, Middleware,
    RawResponse, Readable, Removable, Replaceable, Request, RequestBuilder, Response, Result,
    Route, Transport, from_json,
};

// Re-export the hook/transport attribute macro crate for implementors
pub use async_trait::async_trait;
