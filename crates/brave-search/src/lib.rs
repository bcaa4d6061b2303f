//! Brave Search Domain Library
//!
//! Core domain types and interfaces for the Brave Search MCP server.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types without infrastructure dependencies
//!   - `entities/`: Search results and the response envelope
//!   - `value_objects/`: Request parameters and connection probe status
//!   - `errors/`: Configuration and search error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: The web search service interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use brave_search::{SearchRequest, WebSearchService};
//!
//! let response = service.search(&SearchRequest::new("rust async")).await?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ConfigError, ConnectionStatus, SearchError, SearchRequest, SearchResult, WebSearchResponse,
    API_KEY_ENV, DEFAULT_COUNT, DEFAULT_COUNTRY, DEFAULT_SAFESEARCH, MAX_COUNT,
};
pub use ports::WebSearchService;
