//! Crate error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from configuration, logging setup and the transports.
///
/// Registry lookups never fail; this covers everything around them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Socket or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
    /// The MCP service failed to start or stopped abnormally
    #[error("MCP service error: {0}")]
    Service(String),
}

pub type Result<T> = std::result::Result<T, Error>;
