//! HTTP server startup and shutdown plumbing.

pub mod server;
pub mod shutdown;

pub use server::{start_server, ServerError};
