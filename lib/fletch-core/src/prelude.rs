//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! for easy glob importing:
//!
//! ```ignore
//! use fletch_core::prelude::*;
//! ```

pub use crate::{
    Afterware, Creatable, Envelope, Error, Method, Middleware, RawResponse, Readable, Removable,
    Replaceable, Request, RequestBuilder, Response, Result, Route, Transport, from_json,
};
