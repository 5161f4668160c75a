//! Configuration schema types for `memory-bank.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryBankConfig {
    /// HTTP front end settings
    pub server: ServerConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Path the MCP endpoint is mounted at
    pub mcp_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080, mcp_path: "/mcp".to_string() }
    }
}

impl ServerConfig {
    /// `host:port`, for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Also append logs to this file
    pub file: Option<PathBuf>,
}

impl MemoryBankConfig {
    /// Checks the configuration, returning one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }
        if self.server.port == 0 {
            errors.push("server.port must be between 1 and 65535".to_string());
        }
        if let Some(problem) = mcp_path_problem(&self.server.mcp_path) {
            errors.push(problem);
        }

        errors
    }
}

/// Paths routed by the HTTP front end besides the MCP endpoint.
pub const RESERVED_PATHS: [&str; 2] = ["/", "/health"];

/// Why `path` cannot be used as the MCP mount point, if it can't.
fn mcp_path_problem(path: &str) -> Option<String> {
    if !path.starts_with('/') {
        return Some(format!("server.mcp_path must start with '/' (got '{}')", path));
    }
    if path == "/" {
        return Some("server.mcp_path must not be '/', the homepage is served there".to_string());
    }
    if RESERVED_PATHS.contains(&path) {
        return Some(format!("server.mcp_path must not be '{}', that route is reserved", path));
    }
    if path.contains(['{', '}', '*']) {
        return Some(format!(
            "server.mcp_path must be a literal path without '{{', '}}' or '*' (got '{}')",
            path
        ));
    }
    if path.ends_with('/') {
        return Some(format!("server.mcp_path must not end with '/' (got '{}')", path));
    }
    None
}
