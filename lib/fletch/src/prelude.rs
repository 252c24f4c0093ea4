//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! for easy glob importing:
//!
//! ```ignore
//! use fletch::prelude::*;
//! ```

pub use crate::{
    Afterware, Client, ClientConfig, Content, Creatable, Envelope, Error, Method, Middleware,
    RawResponse, Readable, Removable, Replaceable, Request, RequestOptions, RequestOverrides,
    Response, Result, Route, Transport,
};
pub use serde::{Deserialize, Serialize};
