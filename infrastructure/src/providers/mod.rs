//! Completion provider adapters

pub mod groq;

pub use groq::GroqCompletionGateway;
