//! # Host Boundary
//!
//! The serving framework that ultimately owns the sockets is an external
//! collaborator: the router only hands it `(verb, pattern, handler)` triples,
//! static-directory mounts, and a reverse-resolution handle for its template
//! context. [`HostApp`] is that boundary.
//!
//! [`HandlerRequest`] / [`HandlerResponse`] are the minimal request shape a
//! handler sees. Parameter storage is stack-allocated for the common case of
//! a handful of path/query parameters.

use crate::router::UrlMap;
use crate::routes::Verb;
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Maximum number of path/query parameters before heap allocation.
/// Route patterns rarely carry more than a few `:name` placeholders.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for request dispatch.
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// A callable route handler, as registered with the host.
pub type Handler = Arc<dyn Fn(HandlerRequest) -> HandlerResponse>;

/// Request data passed to a handler.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// HTTP verb of the request
    pub verb: Verb,
    /// Request path as received
    pub path: String,
    /// Path parameters extracted from the URL
    pub path_params: ParamVec,
    /// Query string parameters
    pub query_params: ParamVec,
    /// Request body parsed as JSON, if present
    pub body: Option<Value>,
}

impl HandlerRequest {
    /// Build a bare request for a verb and path, with no parameters.
    #[must_use]
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            path_params: ParamVec::new(),
            query_params: ParamVec::new(),
            body: None,
        }
    }

    /// Get a path parameter by name (last write wins on duplicates).
    #[must_use]
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Response data returned by a handler.
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as JSON
    pub body: Value,
}

impl HandlerResponse {
    /// A `200 OK` JSON response.
    #[must_use]
    pub fn ok_json(body: impl Serialize) -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            body: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }
}

/// The host web-serving object the router binds routes against.
///
/// Implementations register each entry however their framework expects;
/// the router drives this trait once, at startup, in table order.
pub trait HostApp {
    /// Register a handler for a verb and path pattern.
    fn register(&mut self, verb: Verb, pattern: &str, handler: Handler);

    /// Mount a static-file directory under a URL prefix. The directory has
    /// already been verified to exist.
    fn mount_static(&mut self, prefix: &str, dir: &Path);

    /// Publish the router's reverse-resolution handle into the host's shared
    /// template/view context under `key`, so views can call `reverse(...)`.
    fn publish(&mut self, key: &str, urls: UrlMap);
}
