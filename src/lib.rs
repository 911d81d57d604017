//! # Waymark
//!
//! **Waymark** is a declarative route-table compiler and bidirectional URL
//! binder: routes live in a plain-text configuration file, compile once into
//! an ordered table, and bind in both directions: forward onto a host
//! serving framework at startup, and in reverse from a logical action name
//! back to a concrete URL at any time.
//!
//! ## Overview
//!
//! A routes file declares one route per line:
//!
//! ```text
//! # application routes
//! GET    /                app.index
//! GET    /demos/:test     demos.index
//! GET    /demos           demos.index
//! POST   /users/login     users.login
//! GET    /api/{method}    api.{method}
//! GET    /public          staticDir:public
//! ```
//!
//! - `:name` tokens are path placeholders, filled during URL binding.
//! - `{method}` is a wildcard: the line expands at table-build time into one
//!   entry per callable export of the controller.
//! - `staticDir:<path>` mounts a static directory instead of a handler.
//!
//! Reverse binding is the interesting half. Given an action identifier and
//! parameters, the router scans the table in configuration order, binds
//! named and positional parameters into the first matching pattern, and
//! backtracks past variants that cannot bind, so a parameterized route and
//! a parameterless fallback can share one action name, listed most-specific
//! first:
//!
//! ```rust,ignore
//! router.reverse("demos.index", json!({ "test": "something" }))?; // "/demos/something"
//! router.reverse("demos.index", ())?;                             // "/demos"
//! ```
//!
//! ## Architecture
//!
//! - **[`routes`]** - the configuration language: tokenizer, entry types,
//!   and wildcard expansion
//! - **[`binder`]** - placeholder substitution and backtracking reverse
//!   resolution
//! - **[`router`]** - the memoized route table and the public surface
//! - **[`controller`]** - controller modules and the loader collaborator
//! - **[`host`]** - the boundary trait the serving framework implements
//! - **[`config`]** - construction options, YAML loading, `WAYMARK_*`
//!   environment overrides
//! - **[`static_files`]** - safe static-directory serving for mounted
//!   prefixes
//! - **[`cli`]** - the `waymark` binary: `routes`, `check`, `reverse`
//!
//! ## Quick Start
//!
//! ```no_run
//! use waymark::{Controller, ControllerRegistry, HandlerResponse, Router, RouterConfig};
//!
//! let mut controllers = ControllerRegistry::new();
//! controllers.register(
//!     "app",
//!     Controller::new().handler("index", |_req| HandlerResponse::ok_json("hello")),
//! );
//!
//! let router = Router::new(RouterConfig::default(), controllers);
//! let routes = router.get_routes().expect("invalid routes file");
//! println!("{} routes", routes.len());
//! ```
//!
//! ## Runtime Considerations
//!
//! The route table is compiled at most once per router and memoized through
//! an unsynchronized cell: waymark assumes single-threaded, synchronous
//! access. If a router must be reached from several threads, serialize the
//! first table access yourself; after that the table is immutable and the
//! [`UrlMap`] handle can be cloned freely. Bound values are substituted
//! verbatim; URL-encoding is the caller's concern.

pub mod binder;
pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod host;
pub mod router;
pub mod routes;
pub mod source;
pub mod static_files;

pub use binder::{BindArg, BindArgs};
pub use config::{RouterConfig, UnboundPolicy};
pub use controller::{Controller, ControllerLoader, ControllerRegistry, Export};
pub use errors::RouteError;
pub use host::{Handler, HandlerRequest, HandlerResponse, HostApp, ParamVec};
pub use router::{Router, UrlMap};
pub use routes::{RouteEntry, RouteTarget, Verb};
pub use source::{FsSource, RoutesSource};
pub use static_files::{StaticFile, StaticFiles};
