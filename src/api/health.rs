//! Health check and self-description endpoints.
//!
//! | Path | Answer |
//! |---|---|
//! | `/api/health` | `{success, message: "API is healthy", status: "success"}` |
//! | `/` | service name, version and the main endpoints |
//! | `/api` | one line per blog endpoint |
//!
//! None of them touch the store: if the process can answer HTTP at all, it is
//! healthy.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use super::envelope::Envelope;
use super::state::AppState;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// Every blog route, as listed by `/api` and logged at start-up.
pub const ENDPOINTS: [&str; 10] = [
    "GET /api/blogs - Get all blogs",
    "POST /api/blogs - Create new blog",
    "GET /api/blogs/favorites - Get favorite blogs",
    "GET /api/blogs/search?q=<query> - Search blogs",
    "GET /api/blogs/author/<author> - Get blogs by author",
    "GET /api/blogs/<id> - Get specific blog",
    "PUT /api/blogs/<id> - Update blog",
    "DELETE /api/blogs/<id> - Delete blog",
    "PATCH /api/blogs/<id>/favorite - Toggle favorite",
    "GET /api/health - Health check",
];

/// `GET /api/health`
pub async fn health(_state: Arc<AppState>, _req: Request) -> Response {
    info!("health check requested");
    Envelope::success()
        .with_message("API is healthy")
        .with_status("success")
        .respond(Status::Ok)
}

/// `GET /`
pub async fn root(_state: Arc<AppState>, _req: Request) -> Response {
    Response::to_json(Status::Ok, &json!({
        "message": "Blog API is running!",
        "status": "success",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "blogs": "/api/blogs",
            "favorites": "/api/blogs/favorites",
        },
    }))
}

/// `GET /api`
pub async fn api_info(_state: Arc<AppState>, _req: Request) -> Response {
    Response::to_json(Status::Ok, &json!({
        "message": "Blog API endpoints",
        "endpoints": ENDPOINTS,
    }))
}
