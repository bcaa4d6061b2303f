//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the tool layer
//! interacts with the search provider.
//!
//! Implementations of these traits live in the server crate.

pub mod services;

// Re-exports
pub use services::*;
