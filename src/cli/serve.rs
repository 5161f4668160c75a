//! Server command implementations

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::ExitCode;

use tokio::runtime::Runtime;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::{load_config, merge_cli_overrides, CliOverrides, MemoryBankConfig};
use crate::error::Result;
use crate::logging;

type ServeFuture = Pin<Box<dyn Future<Output = Result<()>>>>;

/// Load config, apply CLI overrides and install logging.
fn prepare(config_path: Option<&Path>, overrides: &CliOverrides) -> Result<MemoryBankConfig> {
    let mut config = load_config(config_path)?;
    merge_cli_overrides(&mut config, overrides)?;
    logging::init(&config.logging)?;
    Ok(config)
}

fn block_on_server<F>(config_path: Option<&Path>, overrides: &CliOverrides, serve: F) -> ExitCode
where
    F: FnOnce(MemoryBankConfig) -> ServeFuture,
{
    let config = match prepare(config_path, overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: Failed to create async runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match rt.block_on(serve(config)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "server stopped");
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the HTTP server command
#[cfg(feature = "http")]
pub fn run_serve(config_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    block_on_server(config_path, overrides, |config| {
        Box::pin(async move { crate::http::serve(&config.server).await })
    })
}

/// Execute the stdio MCP server command
pub fn run_stdio(config_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    block_on_server(config_path, overrides, |_config| Box::pin(crate::mcp::run_stdio()))
}
