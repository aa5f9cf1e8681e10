//! # vellum
//!
//! A small blog-post API: JSON over HTTP, records kept in memory.
//!
//! ## Layout
//!
//! - [`blog`]: the post record, its validation rules, and [`BlogStore`],
//!   the ordered in-memory collection that owns every mutation.
//! - [`api`]: the route table, one handler per endpoint, and the
//!   `{success, data | error | errors}` envelope every answer is wrapped in.
//! - [`Router`], [`Server`], [`middleware`]: a thin HTTP layer on hyper:
//!   radix-tree routing via [`matchit`], per-request tracing, a cross-origin
//!   policy, graceful shutdown on SIGTERM / Ctrl-C.
//! - [`config`]: command-line / environment configuration for the binary.
//!
//! Not provided: persistence across restarts, authentication, pagination,
//! rate limiting, caching.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use vellum::api::{self, AppState};
//! use vellum::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vellum::Error> {
//!     let app = api::router(AppState::seeded());
//!     Server::bind("0.0.0.0:5000".parse().unwrap()).serve(app).await
//! }
//! ```
//!
//! Handlers are plain async functions over the shared state:
//!
//! ```rust
//! use std::sync::Arc;
//! use vellum::api::{ApiError, AppState, Envelope};
//! use vellum::{Request, Response, Status};
//!
//! async fn count_blogs(state: Arc<AppState>, _req: Request) -> Result<Response, ApiError> {
//!     let count = state.read()?.len();
//!     Ok(Envelope::ok(count).respond(Status::Ok))
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod blog;
pub mod config;
pub mod middleware;

pub use blog::{BlogInput, BlogRecord, BlogStore, StoreError};
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use status::Status;
