//! Wicket - a minimal HTTP/1.1 file and echo server
//!
//! Core library for HTTP parsing, routing and serialization.

pub mod config;
pub mod http;
pub mod routing;
pub mod server;
pub mod store;
