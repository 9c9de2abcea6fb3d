//! Stateless-per-request builder that assembles `RequestDescriptor` values.
//!
//! # Design
//! `RequestBuilder` collects everything one request needs — method, base
//! URL, path, query params, JSON body, headers, multipart parts — and turns
//! it into a descriptor in a single `build()` call. Nothing is validated
//! until then; a malformed base+path surfaces as `BuildError::MalformedUrl`
//! at build time, not at construction.
//!
//! Header state is split into a computed default (`Content-Type` derived
//! from the multipart flag) and caller overrides layered on top, so
//! `reset_headers` can restore exactly the default without bookkeeping.
//!
//! The boundary token is generated once per builder instance and shared
//! between the default `Content-Type` header and `multipart_body()`.

use log::warn;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::error::BuildError;
use crate::multipart::{self, FilePart, ImagePart};
use crate::request::{HttpMethod, RequestDescriptor};

/// Characters percent-encoded in query keys and values.
///
/// `+` is deliberately absent: it passes through encoding untouched and the
/// finished query string then rewrites every literal `+` to `%2B`, so a
/// transport can never reinterpret it as an encoded space.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A dynamically-typed query parameter value.
///
/// `Str` and `List` are the primary contract; `Other` is a best-effort
/// fallback that coerces the value to its plain string form with a warning
/// rather than failing the request.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    /// Expands into one query item per element, same key, order preserved.
    List(Vec<String>),
    Other(Value),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        ParamValue::Other(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Other(Value::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Other(Value::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Other(Value::from(value))
    }
}

/// Plain string form of a JSON value: strings contribute their contents
/// without quotes, everything else its compact JSON rendering.
pub(crate) fn plain_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builder for one HTTP request descriptor.
///
/// Collects inputs via chained setters, then `build()` produces the
/// immutable descriptor (or fails with `BuildError`). `multipart_body()` is
/// a separate, infallible path: it is never invoked by `build()` — a caller
/// wanting a multipart request sets the flag (for the default header),
/// encodes the body itself, and attaches the bytes to the descriptor.
///
/// A builder instance is plain owned data; mutating the same instance from
/// several threads is the caller's responsibility to serialize.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: HttpMethod,
    base_url: String,
    path: String,
    query_params: Vec<(String, ParamValue)>,
    body_params: Vec<(String, Value)>,
    body_array: Option<Vec<Value>>,
    header_overrides: Vec<(String, String)>,
    is_multipart: bool,
    images: Vec<ImagePart>,
    files: Vec<FilePart>,
    boundary: String,
}

impl RequestBuilder {
    /// Create a builder for `method` against `base_url` + `path`.
    ///
    /// The two URL pieces are concatenated verbatim at build time — no
    /// separator is inserted, so `path` must carry its own leading slash.
    /// Neither piece is validated here. A fresh boundary token is generated
    /// for this instance and never reused by another.
    pub fn new(method: HttpMethod, base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method,
            base_url: base_url.into(),
            path: path.into(),
            query_params: Vec::new(),
            body_params: Vec::new(),
            body_array: None,
            header_overrides: Vec::new(),
            is_multipart: false,
            images: Vec::new(),
            files: Vec::new(),
            boundary: Uuid::new_v4().simple().to_string(),
        }
    }

    /// Append a query parameter. Insertion order is kept in the output.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Append a field to the JSON body mapping. Insertion order is kept
    /// both in the serialized JSON and in multipart text fields.
    pub fn body_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body_params.push((key.into(), value.into()));
        self
    }

    /// Set a JSON array body. When both a mapping and an array are present,
    /// the array wins at build time (it is serialized last).
    pub fn json_array(mut self, values: Vec<Value>) -> Self {
        self.body_array = Some(values);
        self
    }

    /// Merge one header into the override set; replaces on key collision.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        merge_header(&mut self.header_overrides, name.into(), value.into());
        self
    }

    /// Merge additional headers into the override set at any point before
    /// `build()`. Caller values win over defaults and earlier overrides on
    /// key collision.
    pub fn update_headers<K, V, I>(&mut self, headers: I)
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in headers {
            merge_header(&mut self.header_overrides, name.into(), value.into());
        }
    }

    /// Discard every override; the effective set returns to the single
    /// computed default. Custom headers must be re-applied afterwards.
    pub fn reset_headers(&mut self) {
        self.header_overrides.clear();
    }

    /// Mark the request as multipart: the default `Content-Type` becomes
    /// `multipart/form-data; boundary=<token>`.
    pub fn multipart(mut self) -> Self {
        self.is_multipart = true;
        self
    }

    /// Append a JPEG image part for `multipart_body()`.
    pub fn image(mut self, image: ImagePart) -> Self {
        self.images.push(image);
        self
    }

    /// Append a file part for `multipart_body()`.
    pub fn file(mut self, file: FilePart) -> Self {
        self.files.push(file);
        self
    }

    /// Boundary token generated for this builder instance.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Current effective header set: the computed default overlaid with the
    /// caller's overrides, insertion order kept.
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut set = vec![("Content-Type".to_string(), self.default_content_type())];
        for (name, value) in &self.header_overrides {
            merge_header(&mut set, name.clone(), value.clone());
        }
        set
    }

    /// Produce the finished descriptor.
    ///
    /// Fails with `MalformedUrl` when base+path is not a parseable absolute
    /// URL, and with `Serialization` when the JSON body cannot be encoded.
    /// No partial descriptor is returned on failure.
    pub fn build(&self) -> Result<RequestDescriptor, BuildError> {
        let raw = format!("{}{}", self.base_url, self.path);
        let mut url = Url::parse(&raw).map_err(|_| BuildError::MalformedUrl(raw.clone()))?;

        if !self.query_params.is_empty() {
            url.set_query(Some(&self.encode_query()));
        }

        Ok(RequestDescriptor {
            method: self.method,
            url: url.to_string(),
            headers: self.headers(),
            body: self.encode_json_body()?,
        })
    }

    /// Encode the multipart/form-data body: text fields from the body
    /// mapping, then image parts, then file parts, delimited by this
    /// instance's boundary token. Infallible; never called by `build()`.
    pub fn multipart_body(&self) -> Vec<u8> {
        multipart::encode_body(&self.boundary, &self.body_params, &self.images, &self.files)
    }

    fn default_content_type(&self) -> String {
        if self.is_multipart {
            format!("multipart/form-data; boundary={}", self.boundary)
        } else {
            "application/json".to_string()
        }
    }

    /// Build the percent-encoded query string, then rewrite every literal
    /// `+` to `%2B`. The rewrite runs after encoding, not instead of it.
    fn encode_query(&self) -> String {
        let mut items = Vec::new();
        for (key, value) in &self.query_params {
            let encoded_key = utf8_percent_encode(key, QUERY_ENCODE_SET).to_string();
            match value {
                ParamValue::Str(s) => {
                    items.push(format!(
                        "{encoded_key}={}",
                        utf8_percent_encode(s, QUERY_ENCODE_SET)
                    ));
                }
                ParamValue::List(list) => {
                    for s in list {
                        items.push(format!(
                            "{encoded_key}={}",
                            utf8_percent_encode(s, QUERY_ENCODE_SET)
                        ));
                    }
                }
                ParamValue::Other(v) => {
                    warn!("query parameter {key:?} is not a string; using its string form");
                    items.push(format!(
                        "{encoded_key}={}",
                        utf8_percent_encode(&plain_string(v), QUERY_ENCODE_SET)
                    ));
                }
            }
        }
        items.join("&").replace('+', "%2B")
    }

    /// Serialize the JSON body. The mapping is encoded first, then the
    /// array overwrites it when present — last write wins.
    fn encode_json_body(&self) -> Result<Option<Vec<u8>>, BuildError> {
        let mut body = None;
        if !self.body_params.is_empty() {
            let map: serde_json::Map<String, Value> = self.body_params.iter().cloned().collect();
            body = Some(
                serde_json::to_vec(&map).map_err(|e| BuildError::Serialization(e.to_string()))?,
            );
        }
        if let Some(values) = &self.body_array {
            body = Some(
                serde_json::to_vec(values)
                    .map_err(|e| BuildError::Serialization(e.to_string()))?,
            );
        }
        Ok(body)
    }
}

/// Replace the value on key collision, otherwise append.
fn merge_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers.iter_mut().find(|(n, _)| *n == name) {
        Some(slot) => slot.1 = value,
        None => headers.push((name, value)),
    }
}
