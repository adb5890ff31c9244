//! Greeting page handler.
//!
//! Renders a small HTML status page showing where the service is running:
//! deployment platform, host identity, current time, and version.

use axum::{extract::State, response::Html};
use chrono::Utc;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Timestamp format for the greeting page
const PAGE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Greeting page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let timestamp = Utc::now().format(PAGE_TIME_FORMAT).to_string();

    let mut context = tera::Context::new();
    context.insert("config", &state.config.display);
    context.insert("hostname", state.hostname.as_ref());
    context.insert("timestamp", &timestamp);

    let html = state.tera.render("index.html", &context)?;
    Ok(Html(html))
}
