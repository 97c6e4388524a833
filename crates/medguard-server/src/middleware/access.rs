use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Access logging middleware.
///
/// Logs method, path, status and latency for every request. Bodies carry
/// PHI and are never logged.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        latency_ms = latency_ms(started.elapsed()),
        "api_request"
    );

    response
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
pub fn latency_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
