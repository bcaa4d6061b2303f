//! Value Objects
//!
//! Immutable value types used in the domain.

mod connection_status;
mod search_request;

pub use connection_status::*;
pub use search_request::*;
