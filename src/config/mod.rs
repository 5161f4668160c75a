//! Configuration for the memory-bank server
//!
//! Provides types and loading for `memory-bank.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
