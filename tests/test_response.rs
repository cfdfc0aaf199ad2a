use wicket::http::encoding::ContentEncoding;
use wicket::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_from_u16() {
    assert_eq!(StatusCode::from_u16(201), Some(StatusCode::Created));
    assert_eq!(StatusCode::from_u16(500), Some(StatusCode::InternalServerError));
    assert_eq!(StatusCode::from_u16(418), None);
    assert_eq!(StatusCode::from_u16(204), None);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.version, "HTTP/1.1");
    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    assert_eq!(
        response.headers.get("Content-Length"),
        Some(body.len().to_string().as_str())
    );
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("content-length", "999")
        .body(b"test".to_vec())
        .build();

    // Should keep the custom value, whatever its casing
    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.headers.get("Content-Length"), Some("999"));
}

#[test]
fn test_response_builder_multiple_headers() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-cache")
        .header("X-Frame-Options", "DENY")
        .body(b"{}".to_vec())
        .build();

    assert_eq!(response.headers.len(), 4); // 3 custom + 1 auto (Content-Length)
    assert_eq!(response.headers.get("Content-Type"), Some("application/json"));
    assert_eq!(response.headers.get("Cache-Control"), Some("no-cache"));
    assert_eq!(response.headers.get("X-Frame-Options"), Some("DENY"));
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.body.len(), 0);
    assert_eq!(response.headers.get("Content-Length"), Some("0"));
}

#[test]
fn test_response_ok_helper() {
    let response = Response::ok("text/plain", "test content");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.headers.get("Content-Type"), Some("text/plain"));
    assert_eq!(response.body, b"test content".to_vec());
}

#[test]
fn test_response_created_helper() {
    let response = Response::created();

    assert_eq!(response.status, StatusCode::Created);
    assert!(response.body.is_empty());
    assert_eq!(response.headers.get("Content-Length"), Some("0"));
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.headers.get("Content-Type"), Some("text/plain"));
    assert_eq!(response.body, b"Not Found".to_vec());
}

#[test]
fn test_response_internal_error_helper() {
    let response = Response::internal_error();

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert_eq!(response.body, b"Internal Server Error".to_vec());
}

#[test]
fn test_encode_body_recomputes_content_length() {
    let mut response = Response::ok("text/plain", "a".repeat(500));
    assert_eq!(response.headers.get("Content-Length"), Some("500"));

    response.encode_body(ContentEncoding::Gzip).unwrap();

    let expected = response.body.len().to_string();
    assert_eq!(response.headers.get("Content-Length"), Some(expected.as_str()));
    assert_eq!(response.headers.get("Content-Encoding"), Some("gzip"));
    assert!(response.body.len() < 500);
}
