//! Middleware layer.
//!
//! Middleware intercepts requests and responses and is the right place for
//! cross-cutting concerns. Each piece is a plain function or value composed
//! explicitly around the router, not a decorator on individual handlers:
//!
//! - [`trace`]: per-request span with method, path, peer, status, latency.
//!   Wrapped around [`Router::handle`](crate::Router::handle) by the server.
//! - [`cors`]: cross-origin policy. Installed with
//!   [`Router::cors`](crate::Router::cors); answers preflights before routing
//!   and stamps `access-control-*` headers on the way out.

pub mod cors;
pub mod trace;

pub use cors::CorsPolicy;
