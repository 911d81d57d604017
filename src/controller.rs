//! # Controllers
//!
//! A controller is a module of named exports: callable handlers plus any
//! plain data the module happens to expose. Wildcard route expansion walks
//! the callable exports in registration order; data exports are ignored.
//!
//! Resolution from a module reference to a [`Controller`] goes through the
//! [`ControllerLoader`] collaborator. The in-crate [`ControllerRegistry`]
//! keys modules by the file stem of the requested path, which is the
//! controller name as written in the routes file:
//!
//! ```rust
//! use waymark::{Controller, ControllerRegistry, HandlerResponse};
//!
//! let mut registry = ControllerRegistry::default();
//! registry.register(
//!     "demos",
//!     Controller::new()
//!         .handler("index", |_req| HandlerResponse::ok_json("demo list"))
//!         .handler("show", |req| {
//!             HandlerResponse::ok_json(req.path_param("id").unwrap_or(""))
//!         }),
//! );
//! ```

use crate::errors::RouteError;
use crate::host::{Handler, HandlerRequest, HandlerResponse};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// One exported member of a controller module.
#[derive(Clone)]
pub enum Export {
    /// A callable handler, eligible for routing and wildcard expansion
    Handler(Handler),
    /// Plain data; never routed
    Value(Value),
}

impl std::fmt::Debug for Export {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Export::Handler(_) => f.write_str("Export::Handler(..)"),
            Export::Value(v) => write!(f, "Export::Value({})", v),
        }
    }
}

/// A controller module: an ordered collection of named exports.
///
/// Export order is registration order, which makes wildcard expansion
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    exports: Vec<(String, Export)>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callable handler export.
    #[must_use]
    pub fn handler(
        mut self,
        name: impl Into<String>,
        f: impl Fn(HandlerRequest) -> HandlerResponse + 'static,
    ) -> Self {
        self.exports.push((name.into(), Export::Handler(Arc::new(f))));
        self
    }

    /// Add a plain data export.
    #[must_use]
    pub fn value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.exports.push((name.into(), Export::Value(value)));
        self
    }

    /// Look up a callable handler by name. Data exports return `None`.
    #[must_use]
    pub fn get_handler(&self, name: &str) -> Option<&Handler> {
        self.exports.iter().find_map(|(n, export)| match export {
            Export::Handler(h) if n == name => Some(h),
            _ => None,
        })
    }

    /// Names of the callable exports, in registration order.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.exports.iter().filter_map(|(n, export)| match export {
            Export::Handler(_) => Some(n.as_str()),
            Export::Value(_) => None,
        })
    }
}

/// Resolves a module path to a [`Controller`].
///
/// Failure to resolve is fatal for the operation that needed the module:
/// wildcard expansion at table-build time and handler lookup at mount time
/// both propagate [`RouteError::ControllerNotFound`].
pub trait ControllerLoader {
    fn load(&self, path: &Path) -> Result<&Controller, RouteError>;
}

/// In-memory controller store keyed by module name.
///
/// Lookup uses the file stem of the requested path, so a request for
/// `<root>/app/controllers/demos` finds the module registered as `demos`.
#[derive(Debug, Default)]
pub struct ControllerRegistry {
    controllers: HashMap<String, Controller>,
}

impl ControllerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller module under a name.
    pub fn register(&mut self, name: impl Into<String>, controller: Controller) {
        self.controllers.insert(name.into(), controller);
    }
}

impl ControllerLoader for ControllerRegistry {
    fn load(&self, path: &Path) -> Result<&Controller, RouteError> {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|name| self.controllers.get(name))
            .ok_or_else(|| RouteError::ControllerNotFound {
                path: path.to_path_buf(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Controller {
        Controller::new()
            .handler("index", |_req| HandlerResponse::ok_json("index"))
            .value("title", json!("Demos"))
            .handler("show", |_req| HandlerResponse::ok_json("show"))
    }

    #[test]
    fn test_handler_names_skip_data_exports() {
        let names: Vec<_> = sample().handler_names().map(str::to_string).collect();
        assert_eq!(names, vec!["index", "show"]);
    }

    #[test]
    fn test_data_export_is_not_a_handler() {
        let controller = sample();
        assert!(controller.get_handler("title").is_none());
        assert!(controller.get_handler("index").is_some());
    }

    #[test]
    fn test_registry_resolves_by_file_stem() {
        let mut registry = ControllerRegistry::new();
        registry.register("demos", sample());
        assert!(registry.load(Path::new("/srv/app/controllers/demos")).is_ok());
        let err = registry
            .load(Path::new("/srv/app/controllers/missing"))
            .expect_err("expected ControllerNotFound");
        assert!(matches!(err, RouteError::ControllerNotFound { .. }));
    }
}
