//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub dataset: DatasetCounts,
    pub fallback: FallbackStatus,
}

/// Size of the loaded dataset.
#[derive(Debug, Serialize)]
pub struct DatasetCounts {
    pub records: usize,
    pub countries: usize,
}

#[derive(Debug, Serialize)]
pub struct FallbackStatus {
    pub model: String,
    pub configured: bool,
}

/// GET /health - Return service status.
///
/// A missing fallback credential degrades the service: dataset rules still
/// answer, everything else gets an error string.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset = state.router.dataset();
    let fallback = state.router.fallback();
    let configured = fallback.is_configured();

    Json(HealthResponse {
        status: if configured { "healthy" } else { "degraded" }.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        dataset: DatasetCounts {
            records: dataset.len(),
            countries: dataset.countries().len(),
        },
        fallback: FallbackStatus {
            model: fallback.model().to_string(),
            configured,
        },
    })
}
