use thiserror::Error;

use crate::http::headers::Headers;
use crate::http::request::{split_target, Method, Request};
use crate::http::response::{Response, StatusCode};

/// Upper bound on the request line plus header block.
pub const MAX_HEADER_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: &'static str },

    #[error("invalid method token")]
    InvalidMethod,

    #[error("invalid header line")]
    InvalidHeader,

    #[error("invalid content-length: {value}")]
    InvalidContentLength { value: String },

    #[error("unsupported transfer-encoding: {value}")]
    UnsupportedTransferEncoding { value: String },

    #[error("header block exceeds {max} bytes")]
    HeadersTooLarge { max: usize },

    #[error("incomplete message")]
    Incomplete,
}

/// Parses one HTTP request from the front of `buf`.
///
/// On success returns the request and the number of bytes it occupied.
/// `ParseError::Incomplete` means `buf` holds a valid prefix and more bytes
/// are required; every other error is a malformed request.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let (head, headers_end) = split_head(buf)?;
    let mut lines = head.split("\r\n");

    // Request line: exactly three fields separated by single spaces
    let request_line = lines.next().unwrap_or_default();
    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method_str, target, version] = parts[..] else {
        return Err(ParseError::InvalidRequest {
            reason: "request line must have three fields",
        });
    };

    if target.is_empty() || version.is_empty() {
        return Err(ParseError::InvalidRequest {
            reason: "empty request target or version",
        });
    }

    let method = Method::parse(method_str).ok_or(ParseError::InvalidMethod)?;
    let headers = parse_header_lines(lines)?;

    if let Some(te) = headers.get("Transfer-Encoding") {
        return Err(ParseError::UnsupportedTransferEncoding {
            value: te.to_string(),
        });
    }

    let content_length = content_length(&headers)?;
    let body_start = headers_end + 4;
    let body_bytes = &buf[body_start..];

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let (path, segments, query) = split_target(target);

    let request = Request {
        method,
        target: target.to_string(),
        path,
        segments,
        query,
        version: version.to_string(),
        headers,
        body: body_bytes[..content_length].to_vec(),
    };

    Ok((request, body_start + content_length))
}

/// Parses one HTTP response from the front of `buf`.
///
/// The inverse of the response writer, used to check what actually went out
/// on the wire. Only the status codes the server produces are recognised.
pub fn parse_http_response(buf: &[u8]) -> Result<(Response, usize), ParseError> {
    let (head, headers_end) = split_head(buf)?;
    let mut lines = head.split("\r\n");

    let status_line = lines.next().unwrap_or_default();
    let mut parts = status_line.splitn(3, ' ');
    let version = parts.next().unwrap_or_default();
    let code = parts.next().unwrap_or_default();

    let status = code
        .parse::<u16>()
        .ok()
        .and_then(StatusCode::from_u16)
        .ok_or(ParseError::InvalidRequest {
            reason: "unrecognised status code",
        })?;

    let headers = parse_header_lines(lines)?;
    let content_length = content_length(&headers)?;
    let body_start = headers_end + 4;
    let body_bytes = &buf[body_start..];

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let response = Response {
        version: version.to_string(),
        status,
        headers,
        body: body_bytes[..content_length].to_vec(),
    };

    Ok((response, body_start + content_length))
}

/// Locates the end of the header block and returns it as text.
fn split_head(buf: &[u8]) -> Result<(&str, usize), ParseError> {
    let headers_end = match find_headers_end(buf) {
        Some(end) => end,
        None if buf.len() > MAX_HEADER_BYTES => {
            return Err(ParseError::HeadersTooLarge {
                max: MAX_HEADER_BYTES,
            });
        }
        None => return Err(ParseError::Incomplete),
    };

    if headers_end > MAX_HEADER_BYTES {
        return Err(ParseError::HeadersTooLarge {
            max: MAX_HEADER_BYTES,
        });
    }

    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| {
        ParseError::InvalidRequest {
            reason: "header block is not valid UTF-8",
        }
    })?;

    Ok((head, headers_end))
}

fn parse_header_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Headers, ParseError> {
    let mut headers = Headers::new();

    for line in lines {
        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::InvalidHeader);
        }
        headers.insert(key, value.trim());
    }

    Ok(headers)
}

fn content_length(headers: &Headers) -> Result<usize, ParseError> {
    headers
        .get("Content-Length")
        .map(|v| {
            let invalid = || ParseError::InvalidContentLength {
                value: v.to_string(),
            };
            if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            v.parse::<usize>().map_err(|_| invalid())
        })
        .transpose()
        .map(|len| len.unwrap_or(0))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
