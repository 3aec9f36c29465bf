// src/server/audit.rs
//! Request accounting middleware
//!
//! Counts every request and, when audit logging is enabled, logs its
//! method, path, status and latency under the `audit` target.

use crate::server::SharedState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

pub async fn audit_requests(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let (metrics, audit_enabled) = {
        let state = state.read().await;
        (state.metrics.clone(), state.config.enable_audit_log)
    };
    metrics.record_request();

    if !audit_enabled {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        target: "audit",
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}
