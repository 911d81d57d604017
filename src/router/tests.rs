use super::Router;
use crate::config::RouterConfig;
use crate::controller::{Controller, ControllerRegistry};
use crate::errors::RouteError;
use crate::host::HandlerResponse;
use crate::routes::Verb;
use crate::source::RoutesSource;
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// In-memory routes source that counts reads, so memoization is observable.
struct CountingSource {
    text: String,
    reads: Rc<RefCell<usize>>,
}

impl RoutesSource for CountingSource {
    fn read_text(&self, _path: &Path) -> io::Result<String> {
        *self.reads.borrow_mut() += 1;
        Ok(self.text.clone())
    }

    fn is_directory(&self, _path: &Path) -> bool {
        false
    }
}

fn registry() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    registry.register(
        "app",
        Controller::new().handler("index", |_req| HandlerResponse::ok_json("home")),
    );
    registry.register(
        "demos",
        Controller::new().handler("index", |_req| HandlerResponse::ok_json("demos")),
    );
    registry
}

fn router_for(text: &str) -> (Router, Rc<RefCell<usize>>) {
    let reads = Rc::new(RefCell::new(0));
    let source = CountingSource {
        text: text.to_string(),
        reads: Rc::clone(&reads),
    };
    let config = RouterConfig {
        root_path: PathBuf::from("/srv/app"),
        ..RouterConfig::default()
    };
    (Router::with_source(config, registry(), source), reads)
}

const ROUTES: &str = "\
GET /            app.index
GET /demos/:test demos.index
GET /demos       demos.index
";

#[test]
fn test_table_preserves_source_order() {
    let (router, _) = router_for(ROUTES);
    let routes = router.get_routes().expect("failed to build table");
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0].path_pattern, "/");
    assert_eq!(routes[0].verb, Verb::Get);
    assert_eq!(routes[0].action().as_deref(), Some("app.index"));
    assert_eq!(routes[1].path_pattern, "/demos/:test");
    assert_eq!(routes[2].path_pattern, "/demos");
}

#[test]
fn test_table_is_built_exactly_once() {
    let (router, reads) = router_for(ROUTES);
    let first = router.get_routes().expect("failed to build table").len();
    let second = router.get_routes().expect("failed to build table").len();
    assert_eq!(first, second);
    assert_eq!(*reads.borrow(), 1);
}

#[test]
fn test_reverse_uses_the_shared_table() {
    let (router, reads) = router_for(ROUTES);
    let url = router.reverse("demos.index", ()).expect("reverse failed");
    assert_eq!(url, "/demos");
    let _ = router.get_routes().expect("failed to build table");
    assert_eq!(*reads.borrow(), 1);
}

#[test]
fn test_unreadable_routes_file() {
    let config = RouterConfig {
        root_path: PathBuf::from("/nonexistent"),
        ..RouterConfig::default()
    };
    let router = Router::new(config, registry());
    let err = router.get_routes().expect_err("expected RoutesFileUnreadable");
    assert!(matches!(err, RouteError::RoutesFileUnreadable { .. }));
}

#[test]
fn test_url_map_shares_the_built_table() {
    let (router, reads) = router_for(ROUTES);
    let urls = router.url_map().expect("failed to build table");
    assert_eq!(urls.routes().len(), 3);
    assert_eq!(urls.reverse("app.index", ()).expect("reverse failed"), "/");
    assert_eq!(*reads.borrow(), 1);
}
