//! Configuration loading and constants.
//!
//! All configuration comes from the process environment and is read once at
//! startup; `ServiceConfig` is the root configuration struct and is immutable
//! for the lifetime of the process. Display strings shown on the greeting
//! page default to the deployment pipeline's labels and can be overridden
//! per environment.

use serde::Serialize;

// =============================================================================
// Environment Variables
// =============================================================================

/// TCP port to listen on
pub const ENV_PORT: &str = "PORT";

/// Deployment environment label reported by `/info`
pub const ENV_ENVIRONMENT: &str = "ENV";

/// Log output format ("text" or "json")
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Title shown on the greeting page
pub const ENV_SITE_NAME: &str = "SITE_NAME";

/// Platform label shown on the greeting page
pub const ENV_DEPLOYMENT_PLATFORM: &str = "DEPLOYMENT_PLATFORM";

/// Build banner shown in the greeting page footer
pub const ENV_BUILD_INFO: &str = "BUILD_INFO";

// =============================================================================
// Defaults and Fixed Strings
// =============================================================================

/// Default listen port when PORT is not set
pub const DEFAULT_PORT: u16 = 8000;

/// Default deployment environment when ENV is not set
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Default log format when LOG_FORMAT is not set
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "beacon=info,tower_http=info";

/// Service name reported by `/health`
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

/// Fixed service version reported on every route
pub const SERVICE_VERSION: &str = "1.0";

/// Descriptive application label reported by `/info`
pub const APP_LABEL: &str = "Rust Axum Application";

/// Toolchain label reported by `/info`
pub const RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Default greeting page title
pub const DEFAULT_SITE_NAME: &str = "Beacon";

/// Default platform label for the greeting page
pub const DEFAULT_DEPLOYMENT_PLATFORM: &str = "Azure Container Instances";

/// Default build banner for the greeting page footer
pub const DEFAULT_BUILD_INFO: &str = "Built with Terraform + ACR + ACI";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Cache-Control for all routes; every response embeds per-request data
pub const CACHE_CONTROL_DYNAMIC: &str = "no-store";

/// Root configuration, constructed once at process start.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Deployment environment label (ENV)
    pub environment: String,
    /// TCP port to listen on (PORT)
    pub port: u16,
    /// Greeting page display strings
    pub display: DisplayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Display strings for the greeting page, serialized into template contexts.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayConfig {
    /// Page title
    pub site_name: String,
    /// Platform the service is deployed on
    pub platform: String,
    /// Build banner shown in the footer
    pub build_info: String,
    /// Service version
    pub version: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl LoggingConfig {
    /// Whether structured JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Split out from [`from_env`](Self::from_env) so tests can supply values
    /// without mutating the process environment.
    fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match get(ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let environment =
            get(ENV_ENVIRONMENT).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let display = DisplayConfig {
            site_name: get(ENV_SITE_NAME).unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            platform: get(ENV_DEPLOYMENT_PLATFORM)
                .unwrap_or_else(|| DEFAULT_DEPLOYMENT_PLATFORM.to_string()),
            build_info: get(ENV_BUILD_INFO).unwrap_or_else(|| DEFAULT_BUILD_INFO.to_string()),
            version: SERVICE_VERSION.to_string(),
        };

        let logging = LoggingConfig {
            format: get(ENV_LOG_FORMAT).unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string()),
        };

        Ok(Self {
            environment,
            port,
            display,
            logging,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': expected a TCP port number")]
    InvalidPort(String),
}
