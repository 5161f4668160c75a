//! Input schema for analyze_project_summary tool.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AnalyzeInput {
    /// A summary of the project.
    pub project_summary: String,
}
