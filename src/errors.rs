use std::fmt;
use std::io;
use std::path::PathBuf;

/// Route configuration and binding error
///
/// Every failure in the crate is reported synchronously through this enum;
/// nothing is retried. Table-construction errors (`UnrecognisedVerb`,
/// `MalformedRoute`, `RoutesFileUnreadable`, `ControllerNotFound`) surface at
/// startup from [`Router::get_routes`](crate::Router::get_routes) or
/// [`Router::bind_routes`](crate::Router::bind_routes); binding errors
/// (`InsufficientParameters`, `NoMatchingAction`, `UnserializableValue`)
/// surface at call time from `bind_url`/`reverse`.
#[derive(Debug)]
pub enum RouteError {
    /// A configuration line uses an HTTP verb outside `get|post|put|delete`.
    UnrecognisedVerb {
        /// The verb token as written in the configuration
        verb: String,
        /// The route path on the offending line
        path: String,
    },
    /// The routes configuration file is missing or unreadable.
    RoutesFileUnreadable {
        /// Resolved path of the routes file
        path: PathBuf,
        /// Underlying filesystem error
        source: io::Error,
    },
    /// A surviving configuration line does not tokenize into
    /// `VERB path controller.method` (or a `staticDir:` mount).
    MalformedRoute {
        /// 1-based line number in the routes file
        line_no: usize,
        /// The offending line, verbatim
        line: String,
    },
    /// A referenced controller module cannot be resolved.
    ControllerNotFound {
        /// The path the loader was asked for
        path: PathBuf,
    },
    /// A controller resolved, but the named method is absent or not callable.
    MethodNotFound {
        /// Controller reference from the configuration
        controller: String,
        /// The missing method name
        method: String,
    },
    /// A static-mount path is missing or not a directory.
    StaticPathInvalid {
        /// Resolved filesystem path of the mount
        path: PathBuf,
    },
    /// A URL pattern still contains an unresolved placeholder after binding.
    InsufficientParameters {
        /// The first unresolved token, colon included (e.g. `:id`)
        token: String,
    },
    /// A bound value was not a scalar and the policy is
    /// [`UnboundPolicy::Reject`](crate::UnboundPolicy::Reject).
    UnserializableValue {
        /// The object key (or placeholder name) carrying the value
        key: String,
    },
    /// Reverse lookup found no entry for the given action identifier.
    NoMatchingAction {
        /// The `controller.method` identifier that was requested
        action: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnrecognisedVerb { verb, path } => {
                write!(f, "unrecognised HTTP verb '{}' for route: {}", verb, path)
            }
            RouteError::RoutesFileUnreadable { path, source } => {
                write!(f, "routes file '{}' unreadable: {}", path.display(), source)
            }
            RouteError::MalformedRoute { line_no, line } => {
                write!(
                    f,
                    "malformed route on line {}: '{}' (expected VERB <path> <controller.method>)",
                    line_no, line
                )
            }
            RouteError::ControllerNotFound { path } => {
                write!(f, "controller not found: {}", path.display())
            }
            RouteError::MethodNotFound { controller, method } => {
                write!(f, "controller '{}' has no handler '{}'", controller, method)
            }
            RouteError::StaticPathInvalid { path } => {
                write!(f, "static mount '{}' is not a directory", path.display())
            }
            RouteError::InsufficientParameters { token } => {
                write!(f, "insufficient parameters passed, unable to bind: {}", token)
            }
            RouteError::UnserializableValue { key } => {
                write!(f, "value for '{}' is not a scalar and cannot be bound", key)
            }
            RouteError::NoMatchingAction { action } => {
                write!(f, "no matching action was found for '{}'", action)
            }
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::RoutesFileUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl RouteError {
    /// Whether this error is a binding failure the reverse resolver may
    /// backtrack past while later same-action entries remain.
    pub(crate) fn is_bind_failure(&self) -> bool {
        matches!(
            self,
            RouteError::InsufficientParameters { .. } | RouteError::UnserializableValue { .. }
        )
    }
}
