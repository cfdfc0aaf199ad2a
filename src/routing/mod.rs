//! Request routing.
//!
//! The route table is fixed when the server starts and shared read-only by
//! every connection task. Matching is structural: a request's path segments
//! are compared one by one against each pattern, in table order, and the
//! first pattern that matches both method and shape wins.

pub mod handlers;
pub mod router;

pub use handlers::{Handler, RouteContext};
pub use router::{Route, Routed, Router, Segment};
