// src/server/handlers/admin.rs
//! Admin endpoints

use crate::server::{MetricsSnapshot, SharedState};
use axum::{extract::State, Json};
use serde::Serialize;

/// Response for the stats endpoint
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Records currently held
    pub recipes: usize,
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
}

/// GET /admin/stats
pub async fn stats(State(state): State<SharedState>) -> Json<StatsResponse> {
    let state = state.read().await;
    Json(StatsResponse {
        recipes: state.store.len(),
        metrics: state.metrics.snapshot(),
    })
}
