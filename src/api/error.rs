//! Errors a handler can end with, and how each one is rendered.

use thiserror::Error;
use tracing::{error, warn};

use super::envelope::Envelope;
use crate::blog::StoreError;
use crate::response::{IntoResponse, Response};
use crate::router;
use crate::status::Status;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Empty body, `null` or `{}`.
    #[error("No data provided")]
    MissingBody,

    #[error("Invalid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Any other client mistake, sent back verbatim.
    #[error("{0}")]
    BadRequest(String),

    /// Broken field rules, rendered as the `errors` list.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// No post under the requested id. The id is kept as sent, since a
    /// digit string too long for `u64` still names a (missing) post.
    #[error("Blog not found")]
    NotFound(String),

    /// A path parameter that does not fit its route, such as a non-numeric
    /// id. Answered exactly like an unmatched path.
    #[error("Endpoint not found")]
    NoRoute,

    /// Something went wrong on our side.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::MissingBody
            | Self::MalformedJson(_)
            | Self::BadRequest(_)
            | Self::Validation(_) => Status::BadRequest,
            Self::NotFound(_) | Self::NoRoute => Status::NotFound,
            Self::Internal(_) => Status::InternalServerError,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => Self::NotFound(id.to_string()),
            StoreError::Invalid(errors) => Self::Validation(errors),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::NoRoute = self {
            return router::endpoint_not_found();
        }
        let status = self.status();
        let message = self.to_string();
        let envelope = match self {
            Self::Validation(errors) => {
                warn!(?errors, "validation failed");
                Envelope::invalid(errors)
            }
            Self::NotFound(id) => {
                warn!(%id, "blog not found");
                Envelope::failure(message)
            }
            Self::Internal(_) => {
                error!(%message, "internal error");
                Envelope::failure(message)
            }
            _ => {
                warn!(error = %message, "bad request");
                Envelope::failure(message)
            }
        };
        envelope.respond(status)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn rendered(err: ApiError) -> (Status, Value) {
        let resp = err.into_response();
        (resp.status_code(), serde_json::from_slice(resp.body()).unwrap())
    }

    #[test]
    fn not_found_is_404_with_message() {
        assert_eq!(
            rendered(ApiError::NotFound("9".into())),
            (Status::NotFound, json!({ "success": false, "error": "Blog not found" }))
        );
    }

    #[test]
    fn validation_renders_errors_list() {
        let (status, body) = rendered(StoreError::Invalid(vec!["Heading is required".into()]).into());
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["errors"], json!(["Heading is required"]));
        assert!(body.get("error").is_none());
    }

    #[test]
    fn no_route_matches_unmatched_path_body() {
        assert_eq!(
            rendered(ApiError::NoRoute),
            (Status::NotFound, json!({ "error": "Endpoint not found" }))
        );
    }

    #[test]
    fn internal_is_500_with_message() {
        let (status, body) = rendered(ApiError::Internal("blog store lock poisoned".into()));
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body["error"], "blog store lock poisoned");
    }

    #[test]
    fn malformed_json_mentions_parser_error() {
        let parse_err = serde_json::from_str::<Value>("{oops").unwrap_err();
        let (status, body) = rendered(parse_err.into());
        assert_eq!(status, Status::BadRequest);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON: "));
    }
}
