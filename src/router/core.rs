use crate::binder::{self, BindArgs};
use crate::config::{RouterConfig, UnboundPolicy};
use crate::controller::ControllerLoader;
use crate::errors::RouteError;
use crate::routes::{build_entries, parse, RouteEntry};
use crate::source::{FsSource, RoutesSource};
use once_cell::unsync::OnceCell;
use std::sync::Arc;
use tracing::info;

/// The route-table owner and the crate's public surface.
///
/// A `Router` owns its table exclusively: the table is compiled from the
/// routes file on first access, memoized, and immutable afterward.
/// Construction is cheap; all I/O is deferred to the first
/// [`get_routes`](Self::get_routes) (or any operation that needs the table).
///
/// # Concurrency
///
/// Not thread-safe by design. The memoization cell is unsynchronized, so the
/// first table access must be serialized by the caller if a `Router` is ever
/// reached from multiple threads. The [`UrlMap`] handle produced by
/// [`url_map`](Self::url_map) wraps the finished, immutable table and is
/// freely cloneable.
pub struct Router {
    config: RouterConfig,
    source: Box<dyn RoutesSource>,
    loader: Box<dyn ControllerLoader>,
    table: OnceCell<Arc<Vec<RouteEntry>>>,
}

impl Router {
    /// Create a router reading routes and static mounts from the real
    /// filesystem.
    pub fn new(config: RouterConfig, loader: impl ControllerLoader + 'static) -> Self {
        Self::with_source(config, loader, FsSource)
    }

    /// Create a router with an explicit filesystem collaborator.
    pub fn with_source(
        config: RouterConfig,
        loader: impl ControllerLoader + 'static,
        source: impl RoutesSource + 'static,
    ) -> Self {
        Self {
            config,
            source: Box::new(source),
            loader: Box::new(loader),
            table: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub(crate) fn source(&self) -> &dyn RoutesSource {
        self.source.as_ref()
    }

    pub(crate) fn loader(&self) -> &dyn ControllerLoader {
        self.loader.as_ref()
    }

    /// The compiled route table, built on first call.
    ///
    /// Repeated calls return the memoized table without re-reading the
    /// routes file. Entries preserve configuration order; wildcard lines
    /// have already been expanded into concrete entries.
    pub fn get_routes(&self) -> Result<&[RouteEntry], RouteError> {
        let table = self.ensure_table()?;
        Ok(table.as_slice())
    }

    /// A cloneable reverse-resolution handle over the built table, suitable
    /// for publishing into a host's template context.
    pub fn url_map(&self) -> Result<UrlMap, RouteError> {
        let table = self.ensure_table()?;
        Ok(UrlMap {
            routes: Arc::clone(table),
            policy: self.config.unbound_values,
        })
    }

    /// Bind an argument list into a URL pattern using this router's
    /// unbound-value policy. See [`binder::bind_url`].
    pub fn bind_url(
        &self,
        pattern: &str,
        args: impl Into<BindArgs>,
    ) -> Result<String, RouteError> {
        binder::bind_url(pattern, args, self.config.unbound_values)
    }

    /// Resolve an action identifier (`controller.method`) to a concrete URL,
    /// backtracking across same-action route variants. See
    /// [`binder::reverse`].
    pub fn reverse(&self, action: &str, args: impl Into<BindArgs>) -> Result<String, RouteError> {
        let routes = self.get_routes()?;
        binder::reverse(routes, action, &args.into(), self.config.unbound_values)
    }

    /// Print the compiled table to stdout, one entry per line.
    pub fn dump_routes(&self) -> Result<(), RouteError> {
        let routes = self.get_routes()?;
        println!(
            "[routes] file={} count={}",
            self.config.routes_file.display(),
            routes.len()
        );
        for entry in routes {
            println!("[route] {}", entry);
        }
        Ok(())
    }

    fn ensure_table(&self) -> Result<&Arc<Vec<RouteEntry>>, RouteError> {
        self.table.get_or_try_init(|| self.build_table().map(Arc::new))
    }

    fn build_table(&self) -> Result<Vec<RouteEntry>, RouteError> {
        let routes_path = self.config.routes_path();
        let text = self
            .source
            .read_text(&routes_path)
            .map_err(|source| RouteError::RoutesFileUnreadable {
                path: routes_path.clone(),
                source,
            })?;

        let raw_routes = parse(&text)?;
        let controllers_dir = self.config.controllers_dir();

        let mut entries = Vec::new();
        for raw in &raw_routes {
            entries.extend(build_entries(raw, self.loader.as_ref(), &controllers_dir)?);
        }

        let summary: Vec<String> = entries.iter().take(10).map(ToString::to_string).collect();
        info!(
            routes_file = %routes_path.display(),
            route_count = entries.len(),
            routes_summary = ?summary,
            "route table built"
        );

        Ok(entries)
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("built", &self.table.get().is_some())
            .finish_non_exhaustive()
    }
}

/// A cheap, cloneable handle over a finished route table.
///
/// This is what [`Router::bind_routes`](crate::Router::bind_routes)
/// publishes into the host's shared template context, so views can compute
/// URLs without owning the router:
///
/// ```rust,ignore
/// let url = urls.reverse("demos.show", json!({ "id": 42 }))?;
/// ```
#[derive(Debug, Clone)]
pub struct UrlMap {
    routes: Arc<Vec<RouteEntry>>,
    policy: UnboundPolicy,
}

impl UrlMap {
    /// The table entries, in configuration order.
    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Resolve an action identifier to a URL. See [`binder::reverse`].
    pub fn reverse(&self, action: &str, args: impl Into<BindArgs>) -> Result<String, RouteError> {
        binder::reverse(&self.routes, action, &args.into(), self.policy)
    }

    /// Bind arguments into a URL pattern. See [`binder::bind_url`].
    pub fn bind_url(
        &self,
        pattern: &str,
        args: impl Into<BindArgs>,
    ) -> Result<String, RouteError> {
        binder::bind_url(pattern, args, self.policy)
    }
}
