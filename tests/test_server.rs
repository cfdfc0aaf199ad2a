//! End-to-end tests over real TCP sockets.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wicket::http::parser::parse_http_response;
use wicket::http::response::{Response, StatusCode};
use wicket::routing::{RouteContext, Router};
use wicket::server;
use wicket::store::FsStore;

async fn start(root: &std::path::Path) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let ctx = RouteContext::new(Arc::new(FsStore::new(root)));

    tokio::spawn(server::serve(listener, Arc::new(Router::new()), ctx));
    addr
}

async fn send(addr: SocketAddr, request: &[u8]) -> Response {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    parse_http_response(&raw).unwrap().0
}

fn post_file(name: &str, body: &[u8]) -> Vec<u8> {
    let mut req = format!(
        "POST /files/{name} HTTP/1.1\r\nHost: localhost\r\nContent-Length: {}\r\n\r\n",
        body.len()
    )
    .into_bytes();
    req.extend_from_slice(body);
    req
}

fn get_file(name: &str) -> Vec<u8> {
    format!("GET /files/{name} HTTP/1.1\r\nHost: localhost\r\n\r\n").into_bytes()
}

#[tokio::test]
async fn test_root_and_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let addr = start(dir.path()).await;

    let root = send(addr, b"GET / HTTP/1.1\r\n\r\n").await;
    assert_eq!(root.status, StatusCode::Ok);
    assert_eq!(root.headers.get("Content-Type"), Some("text/html"));

    let missing = send(addr, b"GET /not-a-real-route HTTP/1.1\r\n\r\n").await;
    assert_eq!(missing.status, StatusCode::NotFound);
    assert_eq!(missing.body, b"Not Found".to_vec());
}

#[tokio::test]
async fn test_user_agent_over_tcp() {
    let dir = tempfile::tempdir().unwrap();
    let addr = start(dir.path()).await;

    let response = send(
        addr,
        b"GET /user-agent HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test-client/1.0\r\n\r\n",
    )
    .await;

    assert_eq!(response.body, b"test-client/1.0".to_vec());
}

#[tokio::test]
async fn test_file_round_trip_over_tcp() {
    let dir = tempfile::tempdir().unwrap();
    let addr = start(dir.path()).await;
    let body: Vec<u8> = (0..=255u8).cycle().take(20_000).collect();

    let missing = send(addr, &get_file("data.bin")).await;
    assert_eq!(missing.status, StatusCode::NotFound);
    assert!(!dir.path().join("data.bin").exists());

    let created = send(addr, &post_file("data.bin", &body)).await;
    assert_eq!(created.status, StatusCode::Created);

    let fetched = send(addr, &get_file("data.bin")).await;
    assert_eq!(fetched.status, StatusCode::Ok);
    assert_eq!(
        fetched.headers.get("Content-Type"),
        Some("application/octet-stream")
    );
    assert_eq!(fetched.body, body);
}

#[tokio::test]
async fn test_concurrent_connections_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let addr = start(dir.path()).await;

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            tokio::spawn(async move {
                let name = format!("file-{i}");
                let body = format!("contents of {i}").repeat(i + 1).into_bytes();

                let created = send(addr, &post_file(&name, &body)).await;
                assert_eq!(created.status, StatusCode::Created);

                let fetched = send(addr, &get_file(&name)).await;
                assert_eq!(fetched.status, StatusCode::Ok);
                assert_eq!(fetched.body, body);
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }
}

#[tokio::test]
async fn test_malformed_connection_does_not_affect_others() {
    let dir = tempfile::tempdir().unwrap();
    let addr = start(dir.path()).await;

    // Held open mid-request while other clients are served
    let mut stalled = TcpStream::connect(addr).await.unwrap();
    stalled.write_all(b"GET /echo/slow HTTP/1.1\r\nHo").await.unwrap();

    let bad = send(addr, b"BROKEN REQUEST\r\n\r\n").await;
    assert_eq!(bad.status, StatusCode::BadRequest);

    let good = send(addr, b"GET /echo/still-up HTTP/1.1\r\n\r\n").await;
    assert_eq!(good.status, StatusCode::Ok);
    assert_eq!(good.body, b"still-up".to_vec());

    stalled.write_all(b"st: x\r\n\r\n").await.unwrap();
    let mut raw = Vec::new();
    stalled.read_to_end(&mut raw).await.unwrap();
    let (late, _) = parse_http_response(&raw).unwrap();
    assert_eq!(late.body, b"slow".to_vec());
}
