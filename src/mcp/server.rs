//! Core MCP server implementation.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData, RoleServer, ServerHandler, ServiceExt};
use tracing::{debug, info};

use super::resources;
use super::tools::analyze::AnalyzeInput;
use super::tools::template::TemplateInput;
use crate::error::Error;
use crate::registry;

/// Server name reported during initialization.
pub const SERVER_NAME: &str = "memory-bank-mcp";

/// The Memory Bank MCP Server
///
/// Exposes the template and guide registry as MCP tools and `guide://`
/// resources. Holds no state besides its tool router.
#[derive(Debug, Clone)]
pub struct MemoryBankServer {
    tool_router: ToolRouter<Self>,
}

impl Default for MemoryBankServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl MemoryBankServer {
    pub fn new() -> Self {
        Self { tool_router: Self::tool_router() }
    }

    /// Name and description of every tool, in registration order.
    pub fn tool_summaries(&self) -> Vec<(String, String)> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| (t.name.to_string(), t.description.map(|d| d.to_string()).unwrap_or_default()))
            .collect()
    }

    #[tool(description = "Get a detailed description of the Memory Bank file structure.")]
    async fn get_memory_bank_structure(&self) -> String {
        debug!("get_memory_bank_structure");
        registry::structure_guide().to_string()
    }

    #[tool(
        description = "Generate a template for a specific Memory Bank file (e.g., \"projectbrief.md\")."
    )]
    async fn generate_memory_bank_template(
        &self,
        Parameters(input): Parameters<TemplateInput>,
    ) -> String {
        debug!(file_name = %input.file_name, "generate_memory_bank_template");
        registry::generate_template(&input.file_name).into_owned()
    }

    #[tool(
        description = "Analyze a project summary and provide suggestions for Memory Bank content."
    )]
    async fn analyze_project_summary(&self, Parameters(input): Parameters<AnalyzeInput>) -> String {
        debug!(len = input.project_summary.len(), "analyze_project_summary");
        registry::analyze_summary(&input.project_summary)
    }
}

#[tool_handler]
impl ServerHandler for MemoryBankServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Memory Bank Helper".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Memory Bank helper: set up and maintain a Memory Bank, the Markdown files \
                 that preserve project context across sessions. Use get_memory_bank_structure \
                 for the file layout, generate_memory_bank_template for a file skeleton, \
                 analyze_project_summary for suggestions, and the guide://{section} \
                 resources for setup and usage help."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::list_guide_resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(resources::list_resource_templates()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        debug!(uri = %request.uri, "read_resource");
        resources::read_guide_resource(&request.uri).ok_or_else(|| {
            ErrorData::resource_not_found(
                format!(
                    "Unknown resource '{}'. Guides are served as {}",
                    request.uri,
                    resources::URI_TEMPLATE_GUIDE
                ),
                None,
            )
        })
    }
}

/// Run the MCP server on stdin/stdout
pub async fn run_stdio() -> crate::error::Result<()> {
    info!("serving MCP over stdio");
    let service = MemoryBankServer::new()
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| Error::Service(e.to_string()))?;
    let reason = service.waiting().await.map_err(|e| Error::Service(e.to_string()))?;
    info!(?reason, "stdio session ended");
    Ok(())
}
