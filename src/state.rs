//! Shared application state for request handlers.

use std::sync::Arc;

use tera::Tera;

use crate::config::ServiceConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the immutable service configuration, the Tera template engine,
/// and the host identity resolved once at startup. Handlers never mutate any
/// of it, so no synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub tera: Arc<Tera>,
    pub hostname: Arc<str>,
}

impl AppState {
    /// Creates a new application state from the given configuration,
    /// templates, and host identity.
    pub fn new(config: ServiceConfig, tera: Tera, hostname: String) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            hostname: hostname.into(),
        }
    }
}

/// Resolve the OS-reported hostname.
///
/// Inside a container this is the container ID (or the name the orchestrator
/// assigned), which is exactly what the deployment-validation endpoints want
/// to surface. An empty name is reported as "unknown" so responses never
/// carry an empty field.
pub fn hostname() -> String {
    let name = gethostname::gethostname().to_string_lossy().into_owned();
    if name.is_empty() {
        "unknown".to_string()
    } else {
        name
    }
}
