//! Conversation session domain.
//!
//! - [`entities::Message`] — a single role-tagged message in a conversation
//! - [`stream::StreamEvent`] — events in a streaming completion response

pub mod entities;
pub mod stream;
