//! Content-coding negotiation and body compression.

use std::io::{self, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

/// Content codings the server can apply to a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

/// Codings offered by this server, in no particular order.
pub const SUPPORTED_ENCODINGS: &[ContentEncoding] = &[ContentEncoding::Gzip];

impl ContentEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("gzip") {
            Some(ContentEncoding::Gzip)
        } else {
            None
        }
    }

    /// Compresses `body` into a new buffer.
    pub fn encode(&self, body: &[u8]) -> io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
        }
    }
}

/// Picks the coding for a response from the client's `Accept-Encoding` value.
///
/// Returns the first coding listed by the client that is also in `supported`,
/// or `None` when nothing matches and the body must go out unencoded. Tokens
/// are trimmed and compared case-insensitively; parameters such as `;q=0.5`
/// are ignored except that `q=0` marks an explicit refusal.
///
/// # Example
///
/// ```
/// # use wicket::http::encoding::{negotiate, ContentEncoding, SUPPORTED_ENCODINGS};
/// assert_eq!(
///     negotiate(Some("br, gzip"), SUPPORTED_ENCODINGS),
///     Some(ContentEncoding::Gzip)
/// );
/// assert_eq!(negotiate(Some("br"), SUPPORTED_ENCODINGS), None);
/// ```
pub fn negotiate(accept_encoding: Option<&str>, supported: &[ContentEncoding]) -> Option<ContentEncoding> {
    accept_encoding?
        .split(',')
        .filter_map(|item| {
            let mut params = item.split(';');
            let token = params.next()?.trim();
            if params.any(is_zero_quality) {
                return None;
            }
            ContentEncoding::from_token(token)
        })
        .find(|encoding| supported.contains(encoding))
}

fn is_zero_quality(param: &str) -> bool {
    match param.trim().split_once('=') {
        Some((name, value)) if name.trim().eq_ignore_ascii_case("q") => {
            value.trim().parse::<f32>().map(|q| q == 0.0).unwrap_or(false)
        }
        _ => false,
    }
}
