//! # URL Binder
//!
//! Placeholder substitution and reverse resolution. [`bind_url`] consumes a
//! path pattern and a heterogeneous argument list (positional scalars and
//! key-value objects) and produces a fully resolved URL or a typed error.
//! [`reverse`] scans a route table for an action identifier and applies the
//! binder with backtracking across duplicate action names.
//!
//! Backtracking is a `Result`-inspecting loop, not unwinding: a failed bind
//! is an ordinary value the resolver remembers while it keeps scanning.

mod bind;
mod reverse;

pub use bind::{bind_url, BindArg, BindArgs};
pub use reverse::reverse;
