//! Unified infrastructure error type.

use thiserror::Error;

/// The error type returned by the server's fallible operations.
///
/// Application-level errors (404, 400, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, see [`ApiError`](crate::api::ApiError).
/// This type surfaces infrastructure failures: resolving the listen address,
/// binding to a port or accepting a connection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid listen address `{0}`")]
    InvalidAddr(String),
}
