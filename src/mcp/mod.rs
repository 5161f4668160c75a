//! MCP (Model Context Protocol) server implementation for the Memory Bank
//!
//! Exposes the template and guide registry as MCP tools and resources so AI
//! assistants can set up and maintain a project's Memory Bank.
//!
//! Serve it with `memory-bank stdio`, or over HTTP with `memory-bank serve`.

pub mod resources;
mod server;
pub mod tools;

pub use server::{run_stdio, MemoryBankServer, SERVER_NAME};
