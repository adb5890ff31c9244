//! Beacon: a minimal HTTP service for validating container deployments.
//!
//! This is the application entry point. It reads configuration from the
//! environment, initializes tracing, loads templates, sets up the Axum router
//! with all routes, and starts the HTTP server. Startup failures (bad PORT,
//! missing templates, occupied port) are logged and exit non-zero so the
//! deployment pipeline sees them immediately.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon::config::{ServiceConfig, DEFAULT_LOG_FILTER};
use beacon::http::start_server;
use beacon::routes::create_router;
use beacon::state::{hostname, AppState};
use beacon::templates::init_templates;

#[tokio::main]
async fn main() {
    // Configuration errors happen before tracing is up; report them plainly.
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("beacon: {err}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        port = config.port,
        environment = %config.environment,
        "Starting beacon"
    );

    // Initialize Tera templates
    let tera = match init_templates() {
        Ok(tera) => tera,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load templates");
            std::process::exit(1);
        }
    };

    // Host identity is resolved once so every response within this process
    // lifetime reports the same name.
    let host = hostname();
    tracing::info!(hostname = %host, "Resolved host identity");

    // Create application state and router
    let state = AppState::new(config.clone(), tera, host);
    let app = create_router(state);

    // Start server; an occupied port fails here
    if let Err(err) = start_server(app, &config).await {
        tracing::error!(error = %err, "Server failed");
        std::process::exit(1);
    }
}
