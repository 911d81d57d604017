//! # Route Configuration Language
//!
//! Parsing and expansion of the routes file: a line-oriented configuration
//! where each route is `VERB <path-pattern> <controller.method>`:
//!
//! ```text
//! # application routes
//! GET    /                  app.index
//! GET    /demos/:test       demos.index
//! GET    /demos             demos.index
//! POST   /users/login       users.login
//! GET    /api/{method}      api.{method}
//! GET    /public            staticDir:public
//! ```
//!
//! [`parse`] tokenizes the text into [`RawRoute`] lines;
//! [`build_entries`] turns each line into concrete [`RouteEntry`] records,
//! expanding `{method}` wildcards against the controller's callable exports.
//! Wildcards never survive into the finished table.

mod build;
mod parse;
mod types;

pub use build::build_entries;
pub use parse::{parse, RawRoute};
pub use types::{RouteEntry, RouteTarget, Verb, STATIC_PREFIX, WILDCARD_METHOD};
