//! The blog JSON API: route table, handlers, and the response envelope.
//!
//! ```rust,no_run
//! use vellum::api::{self, AppState};
//! use vellum::middleware::CorsPolicy;
//! use vellum::Server;
//!
//! # async fn run() -> Result<(), vellum::Error> {
//! let app = api::router(AppState::seeded())
//!     .cors(CorsPolicy::new(["http://localhost:3000"]));
//! Server::bind("127.0.0.1:5000".parse().unwrap()).serve(app).await
//! # }
//! ```

mod envelope;
mod error;
pub mod handlers;
pub mod health;
mod state;

pub use envelope::Envelope;
pub use error::ApiError;
pub use state::AppState;

use crate::router::Router;

/// Builds the router with every endpoint registered over `state`.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new(state)
        .get("/", health::root)
        .get("/api", health::api_info)
        .get("/api/health", health::health)
        .get("/api/blogs", handlers::list_blogs)
        .post("/api/blogs", handlers::create_blog)
        .get("/api/blogs/favorites", handlers::list_favorites)
        .get("/api/blogs/search", handlers::search_blogs)
        .get("/api/blogs/author/{author}", handlers::blogs_by_author)
        .get("/api/blogs/{id}", handlers::get_blog)
        .put("/api/blogs/{id}", handlers::update_blog)
        .delete("/api/blogs/{id}", handlers::delete_blog)
        .patch("/api/blogs/{id}/favorite", handlers::toggle_favorite)
}
