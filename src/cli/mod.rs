//! # CLI Module
//!
//! Command-line utilities over a routes configuration file.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Compile the table and print one line per entry:
//!
//! ```bash
//! waymark routes --routes-file config/routes.conf
//! ```
//!
//! ### `check`
//!
//! Compile the table and exit non-zero on the first configuration error:
//!
//! ```bash
//! waymark check --root . --routes-file config/routes.conf
//! ```
//!
//! ### `reverse`
//!
//! Resolve an action identifier to a URL, binding `key=value` pairs and
//! bare positional values:
//!
//! ```bash
//! waymark reverse demos.show id=42 page=2
//! ```
//!
//! Controllers are compiled into the embedding application, so wildcard
//! (`{method}`) routes cannot be expanded from the command line; `check`
//! reports them as unresolvable controllers.

mod commands;

pub use commands::{run_cli, Cli, Commands, ConfigOpts};
