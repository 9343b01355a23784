//! HTTP transport types and the injected transport seam.
//!
//! # Design
//! Requests and responses are plain data. The client builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the network;
//! the `Transport` implementation supplied by the caller executes the actual
//! I/O. This keeps the core deterministic: unit tests script a transport in
//! memory, the integration suite plugs in a real HTTP agent.
//!
//! No timeout or retry policy lives here. A transport's own defaults apply,
//! and a failed request is never reattempted by this crate.

use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods and handed to a `Transport` for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport`, then passed to `TodoClient::parse_*` methods
/// for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Failure to complete an HTTP round-trip at all: connection refused, DNS
/// failure, broken stream. A non-2xx status is NOT a transport error — the
/// transport must return those as ordinary `HttpResponse` values so the
/// client can interpret the status and body.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes HTTP round-trips on behalf of the view.
///
/// Implementations must report non-2xx responses as `Ok(HttpResponse)`, not
/// as errors.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
