//! SearchResult - A single ranked web search hit

use schemars::JsonSchema;
use serde::Serialize;

/// A single web search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SearchResult {
    /// 1-based position in the returned result list
    pub position: u32,
    /// Page title
    pub title: String,
    /// Page URL
    pub url: String,
    /// Page description snippet
    pub description: String,
    /// How old the result is (e.g. "2 days ago")
    pub age: Option<String>,
}

impl SearchResult {
    /// Create a new search result without an age
    pub fn new(
        position: u32,
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            position,
            title: title.into(),
            url: url.into(),
            description: description.into(),
            age: None,
        }
    }

    /// Set the recency string
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }
}
