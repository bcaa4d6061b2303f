pub mod brave;

pub use brave::{BraveSearchClient, DEFAULT_TIMEOUT};
