use wicket::http::headers::Headers;

#[test]
fn test_headers_lookup_ignores_case() {
    let mut headers = Headers::new();
    headers.insert("Accept-Encoding", "gzip");

    assert_eq!(headers.get("accept-encoding"), Some("gzip"));
    assert_eq!(headers.get("ACCEPT-ENCODING"), Some("gzip"));
    assert!(headers.contains_key("Accept-encoding"));
}

#[test]
fn test_headers_insert_replaces_in_place() {
    let mut headers = Headers::new();
    headers.insert("Content-Type", "text/plain");
    headers.insert("Content-Length", "3");

    let previous = headers.insert("content-type", "text/html");

    assert_eq!(previous.as_deref(), Some("text/plain"));
    let pairs: Vec<(&str, &str)> = headers.iter().collect();
    assert_eq!(
        pairs,
        vec![("Content-Type", "text/html"), ("Content-Length", "3")]
    );
}

#[test]
fn test_headers_remove() {
    let mut headers: Headers = [("Host", "localhost"), ("User-Agent", "curl")]
        .into_iter()
        .collect();

    assert_eq!(headers.remove("host").as_deref(), Some("localhost"));
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.remove("host"), None);
}

#[test]
fn test_headers_collect_keeps_last_duplicate() {
    let headers: Headers = [("X-Id", "1"), ("x-id", "2")].into_iter().collect();

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("X-Id"), Some("2"));
    assert!(!headers.is_empty());
}
