//! Ready-made hooks for the fletch client.
//!
//! Hooks implement the [`fletch_core::Middleware`] (pre-send) or
//! [`fletch_core::Afterware`] (post-receive) trait and are registered on a
//! [`crate::ClientConfig`]; both chains run in registration order.
//!
//! - [`BearerAuth`] - Adds `Authorization: Bearer <token>` to every request
//! - [`Logging`] - Logs a response summary using `tracing`
//!
//! # Example
//!
//! ```
//! use fletch::{ClientConfig, middleware::{BearerAuth, Logging}};
//!
//! let config = ClientConfig::builder("https://api.example.com")
//!     .middleware(BearerAuth::new("my-secret-token"))
//!     .afterware(Logging::new())
//!     .build();
//! ```

mod bearer_auth;
mod logging;

pub use bearer_auth::BearerAuth;
pub use logging::{LogDetail, Logging};
