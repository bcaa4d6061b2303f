//! SearchRequest - Parameters of a web search
//!
//! Doubles as the argument schema of the `web_search` tool, so field docs
//! are what MCP clients see.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of results
pub const DEFAULT_COUNT: i64 = 10;
/// Largest `count` ever sent to the provider
pub const MAX_COUNT: i64 = 20;
/// Default safe search level
pub const DEFAULT_SAFESEARCH: &str = "moderate";
/// Default country code
pub const DEFAULT_COUNTRY: &str = "us";

fn default_count() -> i64 {
    DEFAULT_COUNT
}

fn default_safesearch() -> String {
    DEFAULT_SAFESEARCH.to_string()
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

/// Parameters for a web search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchRequest {
    /// Search keywords or natural language question.
    pub query: String,
    /// Number of results to return (default: 10, max: 20).
    #[serde(default = "default_count")]
    pub count: i64,
    /// Safe search filter level: "off", "moderate", or "strict" (default: "moderate").
    #[serde(default = "default_safesearch")]
    pub safesearch: String,
    /// Time filter: "pd" (past day), "pw" (past week), "pm" (past month), "py" (past year).
    #[serde(default)]
    pub freshness: Option<String>,
    /// 2-letter country code (default: "us").
    #[serde(default = "default_country")]
    pub country: String,
}

impl SearchRequest {
    /// Create a request with default parameters
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            count: DEFAULT_COUNT,
            safesearch: default_safesearch(),
            freshness: None,
            country: default_country(),
        }
    }

    /// Set the requested number of results
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Set the safe search level
    pub fn with_safesearch(mut self, safesearch: impl Into<String>) -> Self {
        self.safesearch = safesearch.into();
        self
    }

    /// Set the freshness filter
    pub fn with_freshness(mut self, freshness: impl Into<String>) -> Self {
        self.freshness = Some(freshness.into());
        self
    }

    /// Set the country code
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Count actually sent to the provider.
    ///
    /// Capped at [`MAX_COUNT`]; zero and negative values pass through.
    pub fn effective_count(&self) -> i64 {
        self.count.min(MAX_COUNT)
    }

    /// Freshness filter, if set to a non-empty value
    pub fn effective_freshness(&self) -> Option<&str> {
        self.freshness.as_deref().filter(|f| !f.is_empty())
    }
}
