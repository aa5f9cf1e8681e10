//! Per-request tracing.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;

use tracing::{Instrument, error, info, info_span, warn};

use crate::method::Method;
use crate::response::Response;

/// Runs `handle` inside a `request` span and logs its outcome.
///
/// Everything the handler logs is nested under the span, so a single request
/// can be followed by its `method`, `path` and `peer` fields. Completion is
/// logged at `info` for 1xx–3xx, `warn` for 4xx and `error` for 5xx.
pub async fn traced<F>(method: Method, path: &str, peer: Option<SocketAddr>, handle: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = match peer {
        Some(peer) => info_span!("request", %method, path, %peer),
        None => info_span!("request", %method, path),
    };
    let start = Instant::now();

    let response = handle.instrument(span.clone()).await;

    let status = u16::from(response.status_code());
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    span.in_scope(|| {
        if response.status_code().is_server_error() {
            error!(status, latency_ms, "request failed");
        } else if response.status_code().is_client_error() {
            warn!(status, latency_ms, "request rejected");
        } else {
            info!(status, latency_ms, "request completed");
        }
    });
    response
}
