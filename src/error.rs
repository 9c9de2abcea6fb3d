//! Error types for request construction.
//!
//! # Design
//! `build()` is the only fallible entry point. Both variants carry the raw
//! offending input as a `String` for debugging; there is nothing a caller
//! can programmatically recover from beyond fixing its own inputs.

use std::fmt;

/// Errors returned by `RequestBuilder::build`.
#[derive(Debug)]
pub enum BuildError {
    /// The base URL and path did not concatenate into a parseable URL
    /// (bad syntax, or missing scheme/host). Carries the concatenation.
    MalformedUrl(String),

    /// The JSON body (mapping or array) could not be serialized.
    Serialization(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MalformedUrl(raw) => {
                write!(f, "malformed URL: {raw}")
            }
            BuildError::Serialization(msg) => {
                write!(f, "body serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for BuildError {}
