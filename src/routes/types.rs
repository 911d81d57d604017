use crate::errors::RouteError;
use http::Method;
use std::fmt;
use std::path::PathBuf;

/// Wildcard sentinel in the method position of a route target.
///
/// A line like `GET /demos/{method} demos.{method}` expands into one entry
/// per callable export of the `demos` controller, with the literal token in
/// the path replaced by each export's name.
pub const WILDCARD_METHOD: &str = "{method}";

/// Prefix marking a static-directory mount in the target position.
pub const STATIC_PREFIX: &str = "staticDir:";

/// The fixed set of HTTP verbs a route line may use.
///
/// Parsed case-insensitively, rendered lower-case. Anything else fails table
/// construction with [`RouteError::UnrecognisedVerb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// All recognized verbs, in documentation order.
    pub const ALL: [Verb; 4] = [Verb::Get, Verb::Post, Verb::Put, Verb::Delete];

    /// Lower-case string form, as written in the configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Delete => "delete",
        }
    }

    /// The corresponding [`http::Method`] for host registration.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }

    /// Parse a verb token from a configuration line.
    ///
    /// `path` is the route path on the same line, carried into the error so
    /// the report names the offending route.
    pub(crate) fn parse(token: &str, path: &str) -> Result<Self, RouteError> {
        match token.to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "delete" => Ok(Verb::Delete),
            _ => Err(RouteError::UnrecognisedVerb {
                verb: token.to_string(),
                path: path.to_string(),
            }),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a route entry points at, resolved once at table-build time.
///
/// Wildcard references never reach this type: the factory expands them into
/// concrete `Handler` variants before any consumer sees the table, so no
/// downstream code needs to sniff string prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// A named handler on a controller module.
    Handler {
        /// Controller reference (module name under the controllers directory)
        controller: String,
        /// Handler name on that controller
        method: String,
    },
    /// A static-directory mount; the path is relative to the router root.
    StaticDir(PathBuf),
}

/// One verb + path + target binding, immutable once constructed.
///
/// Entries preserve the order of the source configuration. Order is
/// semantically significant: reverse resolution scans the table top to
/// bottom, so variants of one action should be listed most-specific first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// HTTP verb the entry responds to
    pub verb: Verb,
    /// Path pattern with zero or more `:name` placeholders; treated as an
    /// opaque string and scanned on demand
    pub path_pattern: String,
    /// Handler or static mount the entry resolves to
    pub target: RouteTarget,
}

impl RouteEntry {
    /// The `controller.method` action identifier, or `None` for a static
    /// mount (static entries never participate in reverse resolution).
    #[must_use]
    pub fn action(&self) -> Option<String> {
        match &self.target {
            RouteTarget::Handler { controller, method } => {
                Some(format!("{}.{}", controller, method))
            }
            RouteTarget::StaticDir(_) => None,
        }
    }

    /// Whether `action` names this entry, without allocating.
    #[must_use]
    pub fn matches_action(&self, action: &str) -> bool {
        match &self.target {
            RouteTarget::Handler { controller, method } => action
                .strip_prefix(controller.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
                .map(|rest| rest == method)
                .unwrap_or(false),
            RouteTarget::StaticDir(_) => false,
        }
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self.target, RouteTarget::StaticDir(_))
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            RouteTarget::Handler { controller, method } => {
                write!(f, "{} {} -> {}.{}", self.verb, self.path_pattern, controller, method)
            }
            RouteTarget::StaticDir(dir) => {
                write!(f, "{} {} -> static:{}", self.verb, self.path_pattern, dir.display())
            }
        }
    }
}
