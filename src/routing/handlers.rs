use std::sync::Arc;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::store::{ByteStore, StoreError};

const INDEX_BODY: &str = "Hello World!";

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct RouteContext {
    pub store: Arc<dyn ByteStore>,
}

impl RouteContext {
    pub fn new(store: Arc<dyn ByteStore>) -> Self {
        Self { store }
    }
}

/// The server's fixed set of request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// `GET /`
    Index,
    /// `GET /user-agent`
    UserAgent,
    /// `GET /echo/{value}`
    Echo,
    /// `GET /files/{name}`
    ReadFile,
    /// `POST /files/{name}`
    WriteFile,
}

impl Handler {
    /// Produces the response for `req`.
    ///
    /// `params` holds the segments captured by the route pattern, in order.
    /// Store failures become 4xx/5xx responses here; they never escape.
    pub async fn call(&self, req: &Request, params: &[&str], ctx: &RouteContext) -> Response {
        match self {
            Handler::Index => Response::ok("text/html", INDEX_BODY),
            Handler::UserAgent => {
                Response::ok("text/plain", req.header("User-Agent").unwrap_or_default())
            }
            Handler::Echo => Response::ok("text/plain", param(params)),
            Handler::ReadFile => read_file(param(params), ctx).await,
            Handler::WriteFile => write_file(param(params), &req.body, ctx).await,
        }
    }
}

fn param<'a>(params: &[&'a str]) -> &'a str {
    params.first().copied().unwrap_or_default()
}

async fn read_file(name: &str, ctx: &RouteContext) -> Response {
    match ctx.store.read(name).await {
        Ok(bytes) => Response::ok("application/octet-stream", bytes),
        Err(StoreError::NotFound { .. }) => Response::not_found(),
        Err(e) => store_failure(name, e),
    }
}

async fn write_file(name: &str, body: &[u8], ctx: &RouteContext) -> Response {
    match ctx.store.write(name, body).await {
        Ok(()) => {
            tracing::debug!(file = name, bytes = body.len(), "Stored file");
            Response::created()
        }
        Err(e) => store_failure(name, e),
    }
}

fn store_failure(name: &str, error: StoreError) -> Response {
    match error {
        StoreError::InvalidName { .. } => {
            tracing::warn!(file = name, "Rejected file name");
            Response::bad_request()
        }
        e => {
            tracing::error!(file = name, error = %e, "File store operation failed");
            Response::internal_error()
        }
    }
}
