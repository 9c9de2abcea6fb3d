//! End-to-end checks over the public API: build complete descriptors the way
//! a feature-level request definition would, and verify URL, headers, and
//! body together. JSON bodies are compared as parsed values where field
//! content matters, and as raw text where ordering is the point.

use serde_json::{json, Value};

use request_core::{BuildError, FilePart, HttpMethod, ImagePart, RequestBuilder};

const BASE_URL: &str = "https://api.example.com";

#[test]
fn json_post_descriptor_assembles_all_pieces() {
    let req = RequestBuilder::new(HttpMethod::Post, BASE_URL, "/v1/items")
        .query_param("page", "1")
        .query_param("tag", vec!["new", "sale"])
        .body_param("title", "Lamp")
        .body_param("price", 25)
        .header("X-Request-Id", "abc-123")
        .build()
        .unwrap();

    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.method.as_str(), "POST");
    assert_eq!(
        req.url,
        "https://api.example.com/v1/items?page=1&tag=new&tag=sale"
    );
    assert_eq!(
        req.headers,
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("X-Request-Id".to_string(), "abc-123".to_string()),
        ]
    );

    let body: Value = serde_json::from_slice(&req.body.unwrap()).unwrap();
    assert_eq!(body, json!({"title": "Lamp", "price": 25}));
}

#[test]
fn multipart_upload_flow_ties_header_and_body_to_one_boundary() {
    let builder = RequestBuilder::new(HttpMethod::Post, BASE_URL, "/v1/upload")
        .multipart()
        .body_param("caption", "holiday")
        .image(ImagePart::new("photo", vec![0xFF, 0xD8]))
        .file(FilePart::new("doc.pdf", "application/pdf", b"%PDF".to_vec()));

    let boundary = builder.boundary().to_string();
    let body = builder.multipart_body();
    let mut req = builder.build().unwrap();
    req.body = Some(body.clone());

    assert_eq!(
        req.headers,
        vec![(
            "Content-Type".to_string(),
            format!("multipart/form-data; boundary={boundary}")
        )]
    );

    let mut expected = Vec::new();
    expected.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
    expected.extend_from_slice(b"Content-Disposition: form-data; name=\"caption\"\r\n\r\n");
    expected.extend_from_slice(b"holiday");
    expected.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
    expected.extend_from_slice(
        b"Content-Disposition: form-data; name=\"photo\"; filename=\"photo\"\r\n",
    );
    expected.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    expected.extend_from_slice(&[0xFF, 0xD8]);
    expected.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
    expected.extend_from_slice(
        b"Content-Disposition: form-data; name=\"Files\"; filename=\"doc.pdf\"\r\n",
    );
    expected.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    expected.extend_from_slice(b"%PDF");
    expected.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    assert_eq!(req.body.unwrap(), expected);
}

#[test]
fn plus_heavy_query_survives_encoding_literally() {
    let req = RequestBuilder::new(HttpMethod::Get, BASE_URL, "/v1/search")
        .query_param("email", "a+tag@example.com")
        .query_param("range", "1+2 3")
        .build()
        .unwrap();

    assert_eq!(
        req.url,
        "https://api.example.com/v1/search?email=a%2Btag@example.com&range=1%2B2%203"
    );
}

#[test]
fn array_body_replaces_mapping_body_entirely() {
    let req = RequestBuilder::new(HttpMethod::Put, BASE_URL, "/v1/batch")
        .body_param("single", "value")
        .json_array(vec![json!({"id": 1}), json!({"id": 2})])
        .build()
        .unwrap();

    let body: Value = serde_json::from_slice(&req.body.unwrap()).unwrap();
    assert_eq!(body, json!([{"id": 1}, {"id": 2}]));
}

#[test]
fn malformed_concatenation_yields_no_descriptor() {
    let err = RequestBuilder::new(HttpMethod::Get, "api.example.com", "/v1/items")
        .build()
        .unwrap_err();
    match err {
        BuildError::MalformedUrl(raw) => assert_eq!(raw, "api.example.com/v1/items"),
        other => panic!("expected MalformedUrl, got {other:?}"),
    }
}

#[test]
fn header_lifecycle_update_then_reset() {
    let mut builder = RequestBuilder::new(HttpMethod::Get, BASE_URL, "/v1/me")
        .header("Authorization", "Bearer t0");
    builder.update_headers([("Authorization", "Bearer t1"), ("X-Locale", "en")]);

    assert_eq!(
        builder.headers(),
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), "Bearer t1".to_string()),
            ("X-Locale".to_string(), "en".to_string()),
        ]
    );

    builder.reset_headers();
    let req = builder.build().unwrap();
    assert_eq!(
        req.headers,
        vec![("Content-Type".to_string(), "application/json".to_string())]
    );
}

#[test]
fn descriptors_from_distinct_builders_never_share_a_boundary() {
    let a = RequestBuilder::new(HttpMethod::Post, BASE_URL, "/v1/upload").multipart();
    let b = RequestBuilder::new(HttpMethod::Post, BASE_URL, "/v1/upload").multipart();

    let header_a = &a.build().unwrap().headers[0].1;
    let header_b = &b.build().unwrap().headers[0].1;
    assert_ne!(header_a, header_b);
}
