//! Request construction core for an HTTP client networking layer.
//!
//! # Overview
//! Builds immutable `RequestDescriptor` values — method, resolved URL,
//! headers, optional body bytes — without touching the network
//! (host-does-IO pattern). The caller hands the descriptor to whatever
//! transport it uses; this crate never opens a connection, retries, or
//! parses a response.
//!
//! # Design
//! - `RequestBuilder` is the single component: URL assembly (base + path +
//!   query), header defaulting with caller overrides, JSON body encoding,
//!   and multipart/form-data body encoding.
//! - Descriptors use owned `String` / `Vec` fields so they are plain data
//!   with no lifetime ties back to the builder.
//! - Iteration order is insertion order everywhere (query params, body
//!   params, headers) so output is reproducible and testable.
//! - Distinct builder instances share no state. Mutating one instance from
//!   several threads is the caller's responsibility to serialize.

pub mod builder;
pub mod error;
pub mod multipart;
pub mod request;

pub use builder::{ParamValue, RequestBuilder};
pub use error::BuildError;
pub use multipart::{FilePart, ImagePart};
pub use request::{HttpMethod, RequestDescriptor};
