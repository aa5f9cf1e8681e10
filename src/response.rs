//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it, or return anything that
//! implements [`IntoResponse`]. Handlers in this crate mostly return
//! `Result<Response, ApiError>`.

use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::status::Status;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use vellum::{Response, Status};
///
/// Response::text("hello");
/// Response::status(Status::NoContent);
/// Response::to_json(Status::NotFound, &serde_json::json!({ "error": "Endpoint not found" }));
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Bytes,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: Status,
}

impl Response {
    /// `application/json` with the given status, serialised with serde_json.
    ///
    /// A value that fails to serialise becomes a bare `500`.
    pub fn to_json<T: Serialize + ?Sized>(status: Status, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::bytes_raw(status, JSON, body.into()),
            Err(e) => {
                error!("response serialisation failed: {e}");
                Self::status(Status::InternalServerError)
            }
        }
    }

    /// `200 OK`, `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::bytes_raw(Status::Ok, TEXT, Bytes::from(body.into()))
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: Bytes::new(), headers: Vec::new(), status: code }
    }

    pub fn status_code(&self) -> Status { self.status }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Sets a header, replacing any existing value with the same name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }

    /// Drops the body and keeps every header, as a `HEAD` answer needs.
    pub(crate) fn clear_body(&mut self) {
        self.body = Bytes::new();
    }

    fn bytes_raw(status: Status, content_type: &str, body: Bytes) -> Self {
        Self {
            body,
            headers: vec![("content-type".to_owned(), content_type.to_owned())],
            status,
        }
    }

    /// Converts into the hyper response type written to the connection.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(http::StatusCode::from(self.status));
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(Full::new(self.body)).unwrap_or_else(|e| {
            error!("invalid response head: {e}");
            let mut fallback = http::Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

/// Return a [`Status`] directly from a handler: `return Status::NoContent`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}

/// Lets handlers use `?` and return their error type as the response.
impl<T: IntoResponse, E: IntoResponse> IntoResponse for Result<T, E> {
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_json_sets_status_and_content_type() {
        let resp = Response::to_json(Status::Created, &serde_json::json!({ "id": 5 }));
        assert_eq!(resp.status_code(), Status::Created);
        assert_eq!(resp.header("Content-Type"), Some("application/json"));
        assert_eq!(resp.body(), br#"{"id":5}"#);
    }

    #[test]
    fn clear_body_keeps_headers() {
        let mut resp = Response::to_json(Status::Ok, &serde_json::json!({ "id": 1 }));
        resp.set_header("location", "/api/blogs/1");
        resp.clear_body();
        assert!(resp.body().is_empty());
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("location"), Some("/api/blogs/1"));
    }

    #[test]
    fn set_header_replaces_existing_value() {
        let mut resp = Response::text("ok");
        resp.set_header("vary", "Accept");
        resp.set_header("Vary", "Origin");
        assert_eq!(resp.header("vary"), Some("Origin"));
        assert_eq!(resp.headers.iter().filter(|(k, _)| k.eq_ignore_ascii_case("vary")).count(), 1);
    }

    #[test]
    fn result_uses_error_branch() {
        let outcome: Result<Response, Status> = Err(Status::NotFound);
        assert_eq!(outcome.into_response().status_code(), Status::NotFound);
    }

    #[test]
    fn into_inner_carries_status_and_headers() {
        let inner = Response::to_json(Status::BadRequest, &serde_json::json!({})).into_inner();
        assert_eq!(inner.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(inner.headers()["content-type"], "application/json");
    }
}
