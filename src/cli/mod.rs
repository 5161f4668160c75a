//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for the server and content commands.

mod serve;
mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::logging::LogLevel;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Memory Bank helper - serve Memory Bank templates and guides over MCP
#[derive(Parser)]
#[command(name = "memory-bank")]
#[command(about = "Memory Bank helper - serve Memory Bank templates and guides over MCP")]
#[command(version)]
pub struct Cli {
    /// Path to memory-bank.toml (default: search upward, then XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (homepage, health check and MCP endpoint)
    #[cfg(feature = "http")]
    Serve {
        /// Host to bind to (default: 0.0.0.0)
        #[arg(long, env = "MEMORY_BANK_HOST")]
        host: Option<String>,

        /// Port to listen on (default: 8080)
        #[arg(long, env = "MEMORY_BANK_PORT")]
        port: Option<u16>,

        /// Path to mount the MCP endpoint at (default: /mcp)
        #[arg(long)]
        mcp_path: Option<String>,
    },

    /// Serve MCP over stdin/stdout (for AI tool integration)
    Stdio,

    /// Print the Memory Bank structure guide
    Structure,

    /// Print the template for a Memory Bank file
    Template {
        /// File name, e.g. projectbrief.md
        name: String,
    },

    /// Print a guide section
    Guide {
        /// Section: setup, usage, benefits, structure
        section: String,
    },

    /// Suggest Memory Bank content for a project summary
    Analyze {
        /// Project summary (multiple words are joined with spaces)
        #[arg(required = true)]
        summary: Vec<String>,
    },

    /// List available templates and guide sections
    List,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        #[cfg(feature = "http")]
        Commands::Serve { host, port, mcp_path } => {
            let overrides = CliOverrides { host, port, mcp_path, log_level: cli.log_level };
            serve::run_serve(config_path, &overrides)
        }
        Commands::Stdio => {
            let overrides = CliOverrides { log_level: cli.log_level, ..Default::default() };
            serve::run_stdio(config_path, &overrides)
        }
        Commands::Structure => show::run_structure(),
        Commands::Template { name } => show::run_template(&name),
        Commands::Guide { section } => show::run_guide(&section),
        Commands::Analyze { summary } => show::run_analyze(&summary.join(" ")),
        Commands::List => show::run_list(),
    }
}
