//! MCP tools exposed by the server.

mod web_search;

pub use web_search::BraveSearchTools;
