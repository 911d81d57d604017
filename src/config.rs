//! # Router Configuration
//!
//! Construction-time options for a [`Router`](crate::Router), mirroring the
//! shape of the routes-file layout on disk:
//!
//! ```text
//! <root_path>/
//! ├── config/routes.conf      # routes_file
//! └── app/controllers/        # controllers_path
//! ```
//!
//! Every field has a documented default, so `RouterConfig::default()` is a
//! working configuration for a conventionally laid out project. Options can
//! also be loaded from a YAML file and overridden from `WAYMARK_*`
//! environment variables:
//!
//! ```yaml
//! # config/waymark.yaml
//! routes_file: config/routes.conf
//! controllers_path: app/controllers
//! template_var: urls
//! unbound_values: reject
//! ```
//!
//! ## Environment Variables
//!
//! | Variable                   | Field              |
//! |----------------------------|--------------------|
//! | `WAYMARK_ROOT_PATH`        | `root_path`        |
//! | `WAYMARK_ROUTES_FILE`      | `routes_file`      |
//! | `WAYMARK_CONTROLLERS_PATH` | `controllers_path` |
//! | `WAYMARK_TEMPLATE_VAR`     | `template_var`     |

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// What to do when a bound value is not a scalar (an object, array, or null
/// where a path placeholder or query parameter expects a plain value).
///
/// The historical behavior is to drop such values silently, which leaves the
/// placeholder unresolved and surfaces later as
/// [`InsufficientParameters`](crate::RouteError::InsufficientParameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnboundPolicy {
    /// Silently omit the value; a named placeholder it matched stays unbound.
    #[default]
    Drop,
    /// Fail the bind with
    /// [`UnserializableValue`](crate::RouteError::UnserializableValue).
    Reject,
}

/// Configuration options for a [`Router`](crate::Router) instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Directory holding controller modules, relative to `root_path`
    /// (default: `app/controllers`)
    pub controllers_path: PathBuf,
    /// Project root all other paths resolve against
    /// (default: the process working directory)
    pub root_path: PathBuf,
    /// The routes configuration file, relative to `root_path`
    /// (default: `config/routes.conf`)
    pub routes_file: PathBuf,
    /// Key under which the router publishes its [`UrlMap`](crate::UrlMap)
    /// into the host's shared template context (default: `waymark`)
    pub template_var: String,
    /// Handling of non-scalar values during URL binding (default: `Drop`)
    pub unbound_values: UnboundPolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            controllers_path: PathBuf::from("app/controllers"),
            root_path: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            routes_file: PathBuf::from("config/routes.conf"),
            template_var: "waymark".to_string(),
            unbound_values: UnboundPolicy::default(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a YAML file.
    ///
    /// Missing keys take their defaults; unknown keys are an error.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&text)?;
        Ok(config)
    }

    /// Apply `WAYMARK_*` environment variable overrides on top of `self`.
    #[must_use]
    pub fn from_env(mut self) -> Self {
        if let Ok(val) = env::var("WAYMARK_ROOT_PATH") {
            self.root_path = PathBuf::from(val);
        }
        if let Ok(val) = env::var("WAYMARK_ROUTES_FILE") {
            self.routes_file = PathBuf::from(val);
        }
        if let Ok(val) = env::var("WAYMARK_CONTROLLERS_PATH") {
            self.controllers_path = PathBuf::from(val);
        }
        if let Ok(val) = env::var("WAYMARK_TEMPLATE_VAR") {
            self.template_var = val;
        }
        self
    }

    /// Resolved path of the routes file.
    pub(crate) fn routes_path(&self) -> PathBuf {
        self.root_path.join(&self.routes_file)
    }

    /// Resolved path of the controllers directory.
    pub(crate) fn controllers_dir(&self) -> PathBuf {
        self.root_path.join(&self.controllers_path)
    }
}
