//! Memory Bank helper - an MCP server for Memory Bank documentation
//!
//! This library provides functionality to:
//! - Look up Memory Bank file templates and guide sections
//! - Suggest Memory Bank content for a project summary
//! - Serve all of it as MCP tools and `guide://` resources, over stdio or HTTP

pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod logging;
pub mod mcp;
pub mod registry;

pub use error::{Error, Result};
