//! Error types for fletch.

use derive_more::{Display, Error};

/// Boxed error type carried by transport and hook faults.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for fletch operations.
///
/// Every fault surfaces as a single `Err` from the verb method the caller
/// invoked; there is no retry, no partial result, and no wrapping beyond
/// the variant that names the pipeline stage. Parameter serialization has
/// no variant here: it degrades to documented defaults instead of failing
/// the call.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The transport failed (network, DNS, TLS, ...). Carried unmodified.
    #[display("transport error: {_0}")]
    Transport(#[error(not(source))] BoxError),

    /// A middleware or afterware raised; the hook chain halted there.
    #[display("hook error: {_0}")]
    Hook(#[error(not(source))] BoxError),

    /// The response body could not be decoded as JSON.
    #[display("decode error at '{path}': {message}")]
    Decode {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a transport error from any error value.
    #[must_use]
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport(source.into())
    }

    /// Create a hook error from any error value.
    #[must_use]
    pub fn hook(source: impl Into<BoxError>) -> Self {
        Self::Hook(source.into())
    }

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a transport error.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if this is a hook error.
    #[must_use]
    pub const fn is_hook(&self) -> bool {
        matches!(self, Self::Hook(_))
    }

    /// Returns `true` if this is a decode error.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
