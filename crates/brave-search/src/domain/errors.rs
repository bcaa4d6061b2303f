//! Domain Errors
//!
//! Error types for configuring and calling the search provider.

use serde_json::Value;
use thiserror::Error;

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "BRAVE_SEARCH_API_KEY";

const AUTHENTICATION_MESSAGE: &str = "Invalid API key. Check your BRAVE_SEARCH_API_KEY.";
const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please wait before retrying.";

/// Configuration errors, raised before any request is made
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BRAVE_SEARCH_API_KEY is required. Get your API key from https://brave.com/search/api/")]
    MissingApiKey,

    #[error("BRAVE_SEARCH_API_KEY contains characters not allowed in an HTTP header")]
    InvalidApiKey,
}

/// Errors surfaced by a web search.
///
/// Every variant maps onto an HTTP-like status, a message and optional
/// provider details through [`SearchError::status`], [`SearchError::message`]
/// and [`SearchError::details`].
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP 401 from the provider
    #[error("Brave Search API Error 401: Invalid API key. Check your BRAVE_SEARCH_API_KEY.")]
    Authentication,

    /// HTTP 429 from the provider
    #[error("Brave Search API Error 429: Rate limit exceeded. Please wait before retrying.")]
    RateLimited,

    /// Any other HTTP status >= 400
    #[error("Brave Search API Error {status}: {message}")]
    Provider {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    /// Failure below the HTTP layer (timeout, connect, DNS, body decode)
    #[error("Brave Search API Error 500: {message}")]
    Transport {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SearchError {
    /// Wrap a transport failure, keeping it as the error source
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: format!("Network error: {err}"),
            source: Box::new(err),
        }
    }

    /// HTTP-like status code
    pub fn status(&self) -> u16 {
        match self {
            SearchError::Authentication => 401,
            SearchError::RateLimited => 429,
            SearchError::Provider { status, .. } => *status,
            SearchError::Transport { .. } => 500,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            SearchError::Authentication => AUTHENTICATION_MESSAGE,
            SearchError::RateLimited => RATE_LIMIT_MESSAGE,
            SearchError::Provider { message, .. } => message,
            SearchError::Transport { message, .. } => message,
        }
    }

    /// Provider payload, when the provider sent one
    pub fn details(&self) -> Option<&Value> {
        match self {
            SearchError::Provider { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}
