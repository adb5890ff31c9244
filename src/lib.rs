//! Beacon: a minimal HTTP service for validating container deployments.
//!
//! Exposes a greeting page, a liveness probe, and a deployment-info endpoint.
//! Each handler is a pure function of (current time, host identity,
//! configuration); there is no persistent state.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;
