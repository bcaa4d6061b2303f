//! WebSearchResponse - Envelope returned by the `web_search` tool

use schemars::JsonSchema;
use serde::Serialize;

use super::SearchResult;

/// Response for a single web search.
///
/// `total_results` is derived from `results` when the response is built and
/// has no setter, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WebSearchResponse {
    query: String,
    results: Vec<SearchResult>,
    total_results: usize,
}

impl WebSearchResponse {
    /// Build a response echoing `query`, preserving result order
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        let total_results = results.len();
        Self {
            query: query.into(),
            results,
            total_results,
        }
    }

    /// Create an empty response for a query
    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }

    /// The original search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results in provider rank order
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Number of results returned
    pub fn total_results(&self) -> usize {
        self.total_results
    }
}
