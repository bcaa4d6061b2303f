//! `web_search` tool - forwards MCP tool calls to a [`WebSearchService`].

use brave_search::{SearchError, SearchRequest, WebSearchResponse, WebSearchService};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Implementation, LoggingLevel, LoggingMessageNotificationParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::Peer;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::SERVICE_NAME;

const QUERY_PREVIEW_CHARS: usize = 80;

/// MCP server exposing Brave Search as the `web_search` tool.
///
/// The search service is injected once at startup and shared by every
/// session the server handles.
#[derive(Clone)]
pub struct BraveSearchTools {
    service: Arc<dyn WebSearchService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BraveSearchTools {
    pub fn new(service: Arc<dyn WebSearchService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Runs a search, reporting progress and failures to the client when a
    /// peer is available. Errors are returned unchanged.
    pub async fn run_web_search(
        &self,
        request: SearchRequest,
        peer: Option<&Peer<RoleServer>>,
    ) -> Result<WebSearchResponse, SearchError> {
        let preview: String = request.query.chars().take(QUERY_PREVIEW_CHARS).collect();
        info!(query = %preview, count = request.count, "web_search called");
        notify(
            peer,
            LoggingLevel::Info,
            format!("Searching Brave for: {preview}..."),
        );

        match self.service.search(&request).await {
            Ok(response) => {
                debug!(total_results = response.total_results(), "web_search succeeded");
                Ok(response)
            }
            Err(e) => {
                error!(status = e.status(), error = %e, "web_search failed");
                notify(
                    peer,
                    LoggingLevel::Error,
                    format!("Brave Search API error: {}", e.message()),
                );
                Err(e)
            }
        }
    }

    #[tool(
        description = "Search the web using Brave Search. Returns titles, URLs, and descriptions of matching pages.",
        output_schema = cached_schema_for_type::<WebSearchResponse>()
    )]
    async fn web_search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
        peer: Peer<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.run_web_search(request, Some(&peer)).await;
        into_call_result(outcome)
    }
}

#[tool_handler]
impl ServerHandler for BraveSearchTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Brave Search. Use web_search to look up current information on the web."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_logging()
                .build(),
            server_info: Implementation {
                name: SERVICE_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// ============================================
// Helper Functions
// ============================================

/// Sends an MCP log notification without waiting on it. Delivery failures
/// are only traced.
fn notify(peer: Option<&Peer<RoleServer>>, level: LoggingLevel, message: String) {
    let Some(peer) = peer.cloned() else {
        return;
    };

    tokio::spawn(async move {
        let param = LoggingMessageNotificationParam {
            level,
            logger: Some(SERVICE_NAME.to_string()),
            data: Value::String(message),
        };
        if let Err(e) = peer.notify_logging_message(param).await {
            debug!(error = %e, "Failed to deliver MCP log notification");
        }
    });
}

/// Search failures are tool results with `isError` set, not protocol errors.
fn into_call_result(
    outcome: Result<WebSearchResponse, SearchError>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(response) => {
            let payload = serde_json::to_value(&response)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::structured(payload))
        }
        Err(e) => Ok(CallToolResult::structured_error(error_payload(&e))),
    }
}

fn error_payload(err: &SearchError) -> Value {
    json!({
        "error": err.to_string(),
        "status": err.status(),
        "message": err.message(),
        "details": err.details(),
    })
}
