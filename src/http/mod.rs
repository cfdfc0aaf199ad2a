//! HTTP protocol implementation.
//!
//! This module implements a small HTTP/1.1 server that answers exactly one
//! request per connection.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and target splitting
//! - **`response`**: HTTP response representation with builder pattern
//! - **`headers`**: Ordered, case-insensitive header map
//! - **`encoding`**: `Accept-Encoding` negotiation and gzip compression
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← Read until a full request is buffered
//!        └──────┬───────────┘
//!               │ Request parsed          (malformed / read error → Failed)
//!               ▼
//!        ┌──────────────────┐
//!        │     Parsed       │ ← Route to a handler
//!        └──────┬───────────┘
//!               │ Handler returned
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatched     │ ← Apply negotiated encoding, serialize
//!        └──────┬───────────┘
//!               │ Bytes ready
//!               ▼
//!        ┌──────────────────┐
//!        │   Serialized     │ ← Write to the client (write error → Failed)
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Done
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wicket::http::connection::Connection;
//! use wicket::routing::{RouteContext, Router};
//! use wicket::store::FsStore;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let router = Arc::new(Router::new());
//!     let ctx = RouteContext::new(Arc::new(FsStore::new("/tmp")));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let (router, ctx) = (router.clone(), ctx.clone());
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router, ctx);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
