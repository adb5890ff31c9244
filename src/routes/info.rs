//! Deployment info endpoint.
//!
//! Reports the runtime configuration the instance was started with, so a
//! deployment pipeline can verify that environment variables actually reached
//! the container.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::{APP_LABEL, RUST_VERSION};
use crate::state::AppState;

/// Deployment info response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Descriptive application label
    pub app: &'static str,
    /// Deployment environment (ENV, default "production")
    pub environment: String,
    /// Listen port (PORT, default 8000), reported as configured
    pub port: String,
    /// Host identity of this instance
    pub hostname: String,
    /// Toolchain the image was built with
    pub rust_version: &'static str,
}

/// Deployment info handler.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app: APP_LABEL,
        environment: state.config.environment.clone(),
        port: state.config.port.to_string(),
        hostname: state.hostname.to_string(),
        rust_version: RUST_VERSION,
    })
}
