use std::collections::HashMap;
use std::fmt;

use crate::http::headers::Headers;

/// HTTP request methods.
///
/// The standard methods get their own variant. Any other syntactically valid
/// token is kept verbatim as an `Extension` so routing can still answer it
/// (with a 404) instead of rejecting the request outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token, e.g. `PURGE`
    Extension(String),
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// Method names are case-sensitive. Returns `None` when `s` is not a valid
    /// HTTP token (empty, or containing separators or control characters).
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Some(Method::GET));
    /// assert_eq!(Method::parse("get"), Some(Method::Extension("get".into())));
    /// assert_eq!(Method::parse("G(T"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let method = match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other if is_token(other) => Method::Extension(other.to_string()),
            _ => return None,
        };
        Some(method)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Extension(s) => s,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// RFC 9110 tchar
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
        })
}

/// Represents a parsed HTTP request from a client.
///
/// Built once per connection by the parser and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target, e.g. "/files/a.txt?x=1"
    pub target: String,
    /// The target without its query string
    pub path: String,
    /// `path` split on '/'; an absolute path starts with an empty segment
    pub segments: Vec<String>,
    /// Query parameters, last occurrence wins
    pub query: HashMap<String, String>,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers
    pub headers: Headers,
    /// Request body, exactly Content-Length bytes
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
#[derive(Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: Headers,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let method = self.method.ok_or("method missing")?;
        let target = self.target.ok_or("target missing")?;
        let (path, segments, query) = split_target(&target);

        Ok(Request {
            method,
            path,
            segments,
            query,
            target,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

/// Splits a request target into its path, path segments and query parameters.
///
/// The target is cut at the first `?`. The path is split on every `/`, so
/// `"/echo/abc"` yields `["", "echo", "abc"]`. The query string is split on
/// `&` and each pair on its first `=`; a pair without `=` maps to an empty
/// value and empty pairs are skipped. No percent-decoding is applied.
pub fn split_target(target: &str) -> (String, Vec<String>, HashMap<String, String>) {
    let (path, query_str) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };

    let segments = path.split('/').map(str::to_string).collect();

    let mut query = HashMap::new();
    if let Some(query_str) = query_str {
        for pair in query_str.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            query.insert(key.to_string(), value.to_string());
        }
    }

    (path.to_string(), segments, query)
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// Path segments with the leading empty segment of an absolute path removed.
    ///
    /// `"/files/a.txt"` yields `["files", "a.txt"]` and `"/"` yields `[""]`.
    /// Returns `None` when the path does not start with `/`.
    pub fn route_segments(&self) -> Option<&[String]> {
        match self.segments.split_first() {
            Some((first, rest)) if first.is_empty() && !rest.is_empty() => Some(rest),
            _ => None,
        }
    }
}
