//! Input schema for generate_memory_bank_template tool.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TemplateInput {
    /// The name of the file to generate a template for (e.g., "projectbrief.md").
    pub file_name: String,
}
