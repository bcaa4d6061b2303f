//! Domain Entities

mod search_result;
mod web_search_response;

pub use search_result::*;
pub use web_search_response::*;
