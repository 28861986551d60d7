//! Infrastructure layer for BorderPass
//!
//! Adapters for the outside world: the Groq completion gateway,
//! configuration loading, and questionnaire catalog sources.

pub mod catalog;
pub mod config;
pub mod providers;

pub use catalog::{CatalogError, builtin_catalog, load_catalog};
pub use config::{ConfigLoader, FileConfig};
pub use providers::GroqCompletionGateway;
