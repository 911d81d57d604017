#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use waymark::{
    Controller, ControllerRegistry, Handler, HandlerResponse, HostApp, RouterConfig, UrlMap, Verb,
};

/// A temporary project layout: a root directory holding a routes file and
/// whatever else a test mounts under it.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    /// Create a project whose `config/routes.conf` holds `routes`.
    pub fn new(routes: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("failed to create config dir");
        fs::write(config_dir.join("routes.conf"), routes).expect("failed to write routes file");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// A `RouterConfig` rooted at this project.
    pub fn config(&self) -> RouterConfig {
        RouterConfig {
            root_path: self.root().to_path_buf(),
            ..RouterConfig::default()
        }
    }

    /// Create a subdirectory under the project root.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    /// Write a file under the project root.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }
}

/// The standard controller set used across the suite, mirroring the demo
/// routes files: `app.index`, `demos.index`/`demos.required`, `users.login`,
/// and an `api` controller with two handlers plus a data export for
/// wildcard expansion.
pub fn demo_registry() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    registry.register(
        "app",
        Controller::new().handler("index", |_req| HandlerResponse::ok_json("home")),
    );
    registry.register(
        "demos",
        Controller::new()
            .handler("index", |_req| HandlerResponse::ok_json("demos"))
            .handler("required", |req| {
                HandlerResponse::ok_json(req.path_param("required").unwrap_or(""))
            }),
    );
    registry.register(
        "users",
        Controller::new().handler("login", |_req| HandlerResponse::ok_json("login")),
    );
    registry.register(
        "api",
        Controller::new()
            .handler("list", |_req| HandlerResponse::ok_json("list"))
            .handler("detail", |_req| HandlerResponse::ok_json("detail"))
            .value("version", serde_json::json!("1.0")),
    );
    registry
}

/// A recorded handler registration.
pub struct Registered {
    pub verb: Verb,
    pub pattern: String,
    pub handler: Handler,
}

/// Host double that records everything the router binds against it.
#[derive(Default)]
pub struct MockHost {
    pub registered: Vec<Registered>,
    pub static_mounts: Vec<(String, PathBuf)>,
    pub published: Vec<(String, UrlMap)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patterns_for(&self, verb: Verb) -> Vec<&str> {
        self.registered
            .iter()
            .filter(|r| r.verb == verb)
            .map(|r| r.pattern.as_str())
            .collect()
    }
}

impl HostApp for MockHost {
    fn register(&mut self, verb: Verb, pattern: &str, handler: Handler) {
        self.registered.push(Registered {
            verb,
            pattern: pattern.to_string(),
            handler,
        });
    }

    fn mount_static(&mut self, prefix: &str, dir: &Path) {
        self.static_mounts
            .push((prefix.to_string(), dir.to_path_buf()));
    }

    fn publish(&mut self, key: &str, urls: UrlMap) {
        self.published.push((key.to_string(), urls));
    }
}

/// The routes file most tests share: ordered so the parameterized
/// `demos.index` variant precedes the parameterless fallback.
pub const DEMO_ROUTES: &str = "\
# demo application routes
GET    /                 app.index
GET    /demos/:test      demos.index
GET    /demos            demos.index
GET    /required/:required demos.required
POST   /users/login      users.login
";
