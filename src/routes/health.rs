//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ACI, and load balancers to decide whether the instance
//! should remain in rotation, so it must answer quickly and without side
//! effects or external calls.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{SERVICE_NAME, SERVICE_VERSION};
use crate::state::AppState;

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status; always "healthy" while the process can respond
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
    /// Service version
    pub version: &'static str,
    /// Instant the probe was answered (RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// Host identity of this instance
    pub hostname: String,
}

/// Health check handler.
///
/// This is a liveness probe - it only reports that the process can respond
/// to HTTP, never the state of anything downstream.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: Utc::now(),
        hostname: state.hostname.to_string(),
    })
}
