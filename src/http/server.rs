//! HTTP server startup logic.
//!
//! Binds the listener before serving so an occupied port fails fast at
//! startup instead of surfacing on the first request.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;

use crate::config::ServiceConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Bind `0.0.0.0:PORT` and serve the router until a shutdown signal arrives.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &ServiceConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Listening at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
