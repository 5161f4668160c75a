//! MCP tool input schemas
//!
//! Each tool wraps one registry operation. `get_memory_bank_structure` takes
//! no arguments and has no schema type here.

pub mod analyze;
pub mod template;
