//! multipart/form-data body encoding.
//!
//! # Design
//! Parts follow RFC 2046 framing: each part opens with `\r\n--<boundary>`,
//! the body closes with `\r\n--<boundary>--\r\n`. Framing text is built only
//! from ASCII plus caller-supplied names, so encoding to bytes never fails.
//! Text fields come first, then image parts, then file parts, each list in
//! insertion order.

use serde_json::Value;

use crate::builder::plain_string;

/// Form field name shared by every file part, regardless of count.
const FILE_FIELD_NAME: &str = "Files";

/// A named JPEG image part. The part's `name` and `filename` are always the
/// same value; the content type is fixed to `image/jpeg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    pub name: String,
    pub data: Vec<u8>,
}

impl ImagePart {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// An arbitrary file part with a caller-supplied mime type. Sent under the
/// constant form field name `Files`; `name` becomes the part's filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl FilePart {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// Concatenate text fields, image parts, and file parts into one
/// multipart/form-data byte body delimited by `boundary`.
pub(crate) fn encode_body(
    boundary: &str,
    fields: &[(String, Value)],
    images: &[ImagePart],
    files: &[FilePart],
) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        // Plain text interpolation, not JSON encoding: a string field "1"
        // contributes the byte `1`, not `"1"`.
        body.extend_from_slice(plain_string(value).as_bytes());
    }

    for image in images {
        let name = &image.name;
        body.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{name}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(&image.data);
    }

    for file in files {
        body.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{FILE_FIELD_NAME}\"; filename=\"{}\"\r\n",
                file.name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.mime_type).as_bytes());
        body.extend_from_slice(&file.data);
    }

    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}
