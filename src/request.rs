//! Descriptor types handed to the transport layer.
//!
//! # Design
//! A `RequestDescriptor` describes one HTTP request as plain data. The core
//! crate builds descriptors without ever touching the network — the caller
//! (host) executes the actual I/O. All fields use owned types (`String`,
//! `Vec`) so a descriptor is fully self-contained once built.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Options,
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Trace,
    Connect,
}

impl HttpMethod {
    /// Canonical uppercase wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled HTTP request described as plain data.
///
/// Built once by `RequestBuilder::build` and not mutated afterwards. The
/// caller is responsible for executing this request against the network.
/// Headers keep insertion order; the body is raw bytes (JSON or multipart).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}
