//! Blog endpoints.
//!
//! Each handler takes the shared [`AppState`] and the request, talks to the
//! store, and answers with an [`Envelope`]. Failures are returned as
//! [`ApiError`] and rendered by its `IntoResponse` impl.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::envelope::Envelope;
use super::error::ApiError;
use super::state::AppState;
use crate::blog::BlogInput;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// `GET /api/blogs`
pub async fn list_blogs(state: Arc<AppState>, _req: Request) -> Result<Response, ApiError> {
    let blogs = state.read()?.list_all().to_vec();
    info!(count = blogs.len(), "fetched all blogs");
    Ok(Envelope::ok(blogs).respond(Status::Ok))
}

/// `POST /api/blogs`
pub async fn create_blog(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let input = blog_input(&req)?;
    if !input.has_required_fields() {
        return Err(ApiError::BadRequest("Heading and description are required".to_owned()));
    }

    let blog = state.write()?.create(input)?;
    info!(id = blog.id, "blog created");

    let location = format!("/api/blogs/{}", blog.id);
    let mut response = Envelope::ok(blog).respond(Status::Created);
    response.set_header("location", location);
    Ok(response)
}

/// `GET /api/blogs/{id}`
pub async fn get_blog(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let id = blog_id(&req)?;
    let blog = state.read()?.get(id).cloned().ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    info!(id, "fetched blog");
    Ok(Envelope::ok(blog).respond(Status::Ok))
}

/// `PUT /api/blogs/{id}`
///
/// The body is checked before the id is looked up, so a missing or
/// unreadable body is a 400 even for an unknown post.
pub async fn update_blog(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let raw = id_segment(&req)?;
    let patch = blog_input(&req)?;
    let id = parse_id(&raw)?;

    let blog = state.write()?.update(id, patch)?;
    info!(id, "blog updated");
    Ok(Envelope::ok(blog).respond(Status::Ok))
}

/// `DELETE /api/blogs/{id}`
pub async fn delete_blog(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let id = blog_id(&req)?;
    let blog = state.write()?.delete(id)?;
    info!(id, "blog deleted");
    Ok(Envelope::ok(blog).respond(Status::Ok))
}

/// `PATCH /api/blogs/{id}/favorite`
pub async fn toggle_favorite(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let id = blog_id(&req)?;
    let blog = state.write()?.toggle_favorite(id)?;
    info!(id, is_favorite = blog.is_favorite, "favorite toggled");
    Ok(Envelope::ok(blog).respond(Status::Ok))
}

/// `GET /api/blogs/favorites`
pub async fn list_favorites(state: Arc<AppState>, _req: Request) -> Result<Response, ApiError> {
    let blogs = state.read()?.favorites();
    info!(count = blogs.len(), "fetched favorite blogs");
    let count = blogs.len();
    Ok(Envelope::ok(blogs).with_count(count).respond(Status::Ok))
}

/// `GET /api/blogs/search?q=…`
pub async fn search_blogs(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let query = req.query("q")
        .ok_or_else(|| ApiError::BadRequest("Query parameter 'q' is required".to_owned()))?;
    let blogs = state.read()?.search(&query);
    info!(query = %query, count = blogs.len(), "searched blogs");
    let count = blogs.len();
    Ok(Envelope::ok(blogs).with_count(count).respond(Status::Ok))
}

/// `GET /api/blogs/author/{author}`
pub async fn blogs_by_author(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let author = req.param("author").ok_or(ApiError::NoRoute)?;
    let blogs = state.read()?.by_author(&author);
    info!(author = %author, count = blogs.len(), "fetched blogs by author");
    let count = blogs.len();
    Ok(Envelope::ok(blogs).with_count(count).respond(Status::Ok))
}

// ── Request parsing ───────────────────────────────────────────────────────────

/// The `{id}` path segment as a post id.
fn blog_id(req: &Request) -> Result<u64, ApiError> {
    parse_id(&id_segment(req)?)
}

/// The raw `{id}` segment. Anything but a run of ASCII digits is treated as
/// an unmatched route.
fn id_segment(req: &Request) -> Result<String, ApiError> {
    req.param("id")
        .filter(|raw| !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()))
        .map(Cow::into_owned)
        .ok_or(ApiError::NoRoute)
}

/// A digit run too large for `u64` cannot belong to any post.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(raw.to_owned()))
}

/// Decodes the body into a [`BlogInput`].
///
/// An empty body, `null` and `{}` all count as no data; any other non-object
/// is rejected before field decoding.
fn blog_input(req: &Request) -> Result<BlogInput, ApiError> {
    if req.body().iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::MissingBody);
    }
    let value: Value = serde_json::from_slice(req.body())?;

    let no_data = match &value {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    if no_data {
        return Err(ApiError::MissingBody);
    }
    if !value.is_object() {
        return Err(ApiError::BadRequest("Request body must be a JSON object".to_owned()));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::BadRequest(format!("Invalid blog fields: {e}")))
}
