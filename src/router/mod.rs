//! # Router
//!
//! The [`Router`] owns the compiled route table and exposes the crate's
//! public surface: [`Router::get_routes`] (the table),
//! [`Router::bind_routes`] (forward binding against a host),
//! [`Router::bind_url`] / [`Router::reverse`] (reverse binding), and
//! [`Router::url_map`] (the publishable [`UrlMap`] handle).

mod core;
mod mount;

pub use core::{Router, UrlMap};

#[cfg(test)]
mod tests;
