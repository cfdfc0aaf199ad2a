use crate::http::encoding::{negotiate, ContentEncoding, SUPPORTED_ENCODINGS};
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::routing::handlers::{Handler, RouteContext};

/// One component of a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Matches exactly this text
    Literal(&'static str),
    /// Captures any single non-empty segment
    Param,
    /// Captures any single segment, including an empty one
    OptionalParam,
}

const ROOT: &[Segment] = &[Segment::Literal("")];
const USER_AGENT: &[Segment] = &[Segment::Literal("user-agent")];
const ECHO: &[Segment] = &[Segment::Literal("echo"), Segment::OptionalParam];
const FILES: &[Segment] = &[Segment::Literal("files"), Segment::Param];

/// A route table entry.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub pattern: &'static [Segment],
    pub handler: Handler,
    /// Whether the response may be compressed with a negotiated encoding
    pub compressible: bool,
}

impl Route {
    /// Returns the captured parameters if `segments` fits this route's shape.
    pub fn matches<'a>(&self, segments: &'a [String]) -> Option<Vec<&'a str>> {
        if segments.len() != self.pattern.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, expected) in segments.iter().zip(self.pattern) {
            match expected {
                Segment::Literal(text) if segment == text => {}
                Segment::Param if !segment.is_empty() => params.push(segment.as_str()),
                Segment::OptionalParam => params.push(segment.as_str()),
                _ => return None,
            }
        }
        Some(params)
    }
}

/// Outcome of dispatching a request.
#[derive(Debug)]
pub struct Routed {
    pub response: Response,
    /// Encoding to apply before serializing, if the route allows one
    pub encoding: Option<ContentEncoding>,
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Builds the server's route table.
    pub fn new() -> Self {
        let routes = vec![
            Route {
                method: Method::GET,
                pattern: ROOT,
                handler: Handler::Index,
                compressible: false,
            },
            Route {
                method: Method::GET,
                pattern: USER_AGENT,
                handler: Handler::UserAgent,
                compressible: false,
            },
            Route {
                method: Method::GET,
                pattern: ECHO,
                handler: Handler::Echo,
                compressible: true,
            },
            Route {
                method: Method::GET,
                pattern: FILES,
                handler: Handler::ReadFile,
                compressible: false,
            },
            Route {
                method: Method::POST,
                pattern: FILES,
                handler: Handler::WriteFile,
                compressible: false,
            },
        ];

        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Finds the first route matching the request's method and path shape.
    pub fn find<'r>(&self, req: &'r Request) -> Option<(&Route, Vec<&'r str>)> {
        let segments = req.route_segments()?;

        self.routes
            .iter()
            .filter(|route| route.method == req.method)
            .find_map(|route| route.matches(segments).map(|params| (route, params)))
    }

    /// Runs the matching handler, or answers 404 when nothing matches.
    pub async fn dispatch(&self, req: &Request, ctx: &RouteContext) -> Routed {
        let Some((route, params)) = self.find(req) else {
            tracing::debug!(method = %req.method, path = %req.path, "No route matched");
            return Routed {
                response: Response::not_found(),
                encoding: None,
            };
        };

        let response = route.handler.call(req, &params, ctx).await;

        let encoding = if route.compressible {
            negotiate(req.header("Accept-Encoding"), SUPPORTED_ENCODINGS)
        } else {
            None
        };

        Routed { response, encoding }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
