//! HTTP front end.
//!
//! Routes:
//! - `GET /` informational homepage listing the MCP tools
//! - `GET /health` liveness probe
//! - `{mcp_path}` the MCP endpoint (streamable HTTP, responses as SSE streams)

use std::sync::Arc;

use axum::{http::StatusCode, response::Html, response::IntoResponse, routing::get, Json, Router};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::mcp::{MemoryBankServer, SERVER_NAME};

const HOMEPAGE_TEMPLATE: &str = include_str!("../docs/homepage.html");

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    let mcp_service = StreamableHttpService::new(
        || Ok(MemoryBankServer::new()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    let page: Arc<str> = render_homepage(&config.mcp_path).into();

    Router::new()
        .route(
            "/",
            get(move || {
                let page = Arc::clone(&page);
                async move { Html(page.to_string()) }
            }),
        )
        .route("/health", get(health))
        .nest_service(&config.mcp_path, mcp_service)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(
        address = %listener.local_addr()?,
        mcp_path = %config.mcp_path,
        "Memory Bank MCP server listening"
    );

    axum::serve(listener, router(config)).with_graceful_shutdown(shutdown_signal()).await?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "name": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": "The requested resource was not found"
        })),
    )
}

/// Homepage HTML with the endpoint path and tool list filled in.
pub fn render_homepage(mcp_path: &str) -> String {
    let tools: String = MemoryBankServer::new()
        .tool_summaries()
        .iter()
        .map(|(name, description)| {
            format!(
                "        <div class=\"tool-item\">\n            <h3>{}</h3>\n            <p>{}</p>\n        </div>\n",
                escape_html(name),
                escape_html(description)
            )
        })
        .collect();

    HOMEPAGE_TEMPLATE
        .replace("{{version}}", env!("CARGO_PKG_VERSION"))
        .replace("{{mcp_path}}", &escape_html(mcp_path))
        .replace("{{tools}}", &tools)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
