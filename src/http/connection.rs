use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routing::{RouteContext, Routed, Router};

const READ_CHUNK: usize = 4096;

/// Serves exactly one request/response exchange over `stream`.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    router: Arc<Router>,
    ctx: RouteContext,
}

pub enum ConnectionState {
    AwaitingRequest,
    Parsed(Request),
    Dispatched(Routed),
    Serialized(ResponseWriter),
    Done,
    Failed(anyhow::Error),
}

enum ReadOutcome {
    Request(Request),
    /// Peer closed before sending anything
    Closed,
    Malformed(ParseError),
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, ctx: RouteContext) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::AwaitingRequest,
            router,
            ctx,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Done);

            self.state = match state {
                ConnectionState::AwaitingRequest => match self.read_request().await {
                    Ok(ReadOutcome::Request(req)) => ConnectionState::Parsed(req),
                    Ok(ReadOutcome::Closed) => ConnectionState::Done,
                    Ok(ReadOutcome::Malformed(e)) => {
                        self.reject_malformed().await;
                        ConnectionState::Failed(anyhow::Error::new(e).context("malformed request"))
                    }
                    Err(e) => ConnectionState::Failed(e),
                },

                ConnectionState::Parsed(req) => {
                    let routed = self.router.dispatch(&req, &self.ctx).await;

                    tracing::info!(
                        method = %req.method,
                        path = %req.path,
                        status = routed.response.status.as_u16(),
                        encoding = routed.encoding.map(|e| e.as_str()),
                        "Handled request"
                    );

                    ConnectionState::Dispatched(routed)
                }

                ConnectionState::Dispatched(Routed { response, encoding }) => {
                    match ResponseWriter::with_encoding(response, encoding) {
                        Ok(writer) => ConnectionState::Serialized(writer),
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to encode response body");
                            ConnectionState::Serialized(ResponseWriter::new(&Response::internal_error()))
                        }
                    }
                }

                ConnectionState::Serialized(mut writer) => {
                    match writer.write_to_stream(&mut self.stream).await {
                        Ok(()) => {
                            // One exchange per connection
                            let _ = self.stream.shutdown().await;
                            ConnectionState::Done
                        }
                        Err(e) => ConnectionState::Failed(e.context("writing response")),
                    }
                }

                ConnectionState::Done => return Ok(()),

                ConnectionState::Failed(e) => return Err(e),
            };
        }
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, _consumed)) => return Ok(ReadOutcome::Request(request)),

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => return Ok(ReadOutcome::Malformed(e)),
            }

            self.buffer.reserve(READ_CHUNK);
            let n = self
                .stream
                .read_buf(&mut self.buffer)
                .await
                .context("reading request")?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(ReadOutcome::Closed);
                }
                anyhow::bail!(
                    "connection closed mid-request after {} bytes",
                    self.buffer.len()
                );
            }
        }
    }

    /// Best-effort 400 before closing; the peer may already be gone.
    async fn reject_malformed(&mut self) {
        let mut writer = ResponseWriter::new(&Response::bad_request());
        if writer.write_to_stream(&mut self.stream).await.is_ok() {
            let _ = self.stream.shutdown().await;
        }
    }
}
