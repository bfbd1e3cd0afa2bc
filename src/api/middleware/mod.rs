//! HTTP middleware shared by all routes.
//!
//! - [`tracing`] - Request/response logging with latency

pub mod tracing;
