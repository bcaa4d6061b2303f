//! Web Search Service Port
//!
//! Abstract interface for web search operations.

use async_trait::async_trait;

use crate::domain::{ConnectionStatus, SearchError, SearchRequest, WebSearchResponse};

/// Service interface for web search operations
#[async_trait]
pub trait WebSearchService: Send + Sync {
    /// Search the web.
    ///
    /// Performs exactly one attempt; failures are returned, never retried.
    async fn search(&self, request: &SearchRequest) -> Result<WebSearchResponse, SearchError>;

    /// Probe the provider with a one-result query.
    ///
    /// Never fails: errors are reported in the returned status.
    async fn test_connection(&self) -> ConnectionStatus {
        match self.search(&SearchRequest::new("test").with_count(1)).await {
            Ok(response) => ConnectionStatus::ok(response.total_results()),
            Err(e) => ConnectionStatus::failed(e.message()),
        }
    }
}
