//! The JSON wrapper every API response is sent in.

use serde::Serialize;

use crate::response::Response;
use crate::status::Status;

/// `{success, data?, count?, message?, status?, error?, errors?}`.
///
/// Members that are `None` are left out of the JSON entirely.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { data: Some(data), ..Self::bare(true) }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_status(mut self, status: &'static str) -> Self {
        self.status = Some(status);
        self
    }

    /// Serialises the envelope as the body of a response with `status`.
    pub fn respond(&self, status: Status) -> Response {
        Response::to_json(status, self)
    }

    fn bare(success: bool) -> Self {
        Self {
            success,
            data: None,
            count: None,
            message: None,
            status: None,
            error: None,
            errors: None,
        }
    }
}

impl Envelope<()> {
    /// A successful envelope with no `data` member.
    pub fn success() -> Self {
        Self::bare(true)
    }

    /// `{success: false, error}`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self { error: Some(error.into()), ..Self::bare(false) }
    }

    /// `{success: false, errors}`, one entry per broken rule.
    pub fn invalid(errors: Vec<String>) -> Self {
        Self { errors: Some(errors), ..Self::bare(false) }
    }
}
