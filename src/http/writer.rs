use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::encoding::ContentEncoding;
use crate::http::response::Response;

/// Serializes a response into its wire form.
///
/// Headers with an empty value are skipped. The body is appended as-is;
/// `Content-Length` is the only framing.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        resp.version,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in resp.headers.iter().filter(|(_, v)| !v.is_empty()) {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Applies the negotiated encoding, if any, then serializes.
    ///
    /// Compression happens before any header is rendered, so the written
    /// `Content-Length` always matches the encoded body.
    pub fn with_encoding(
        mut response: Response,
        encoding: Option<ContentEncoding>,
    ) -> std::io::Result<Self> {
        if let Some(encoding) = encoding {
            response.encode_body(encoding)?;
        }
        Ok(Self::new(&response))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
