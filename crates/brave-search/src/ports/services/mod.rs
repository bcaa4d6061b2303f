//! Service Ports
//!
//! Abstract interfaces for external services.

mod web_search;

pub use web_search::*;
