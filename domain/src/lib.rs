//! Domain layer for BorderPass
//!
//! This crate contains the pure questionnaire logic. It has no I/O and no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! The fixed ordered sequence of [`Question`]s defining the questionnaire.
//! It is immutable for the lifetime of a session.
//!
//! ## Flow
//!
//! A small state machine paging through the catalog. Transitions are pure:
//! [`FlowState::apply`] takes an event and returns a new snapshot, gated on
//! whether the current question is answered.
//!
//! ## Prompt context
//!
//! Every question id maps to a hand-authored guidance entry that is folded
//! into the system prompt for the assistant. This is the entirety of the
//! local "AI" logic; the actual model call happens behind a gateway port.

pub mod catalog;
pub mod core;
pub mod flow;
pub mod prompt;
pub mod response;
pub mod session;
pub mod summary;
pub mod util;
pub mod validation;

// Re-export commonly used types
pub use catalog::{Catalog, DEFAULT_RATING_MAX, Question, QuestionKind};
pub use core::error::DomainError;
pub use flow::{Direction, FlowEvent, FlowState};
pub use prompt::{build_system_prompt, initial_message, quick_suggestions};
pub use response::{ResponseStore, ResponseValue};
pub use session::{
    entities::{Message, Role},
    stream::StreamEvent,
};
pub use summary::{SummaryItem, summarize};
pub use validation::{ValidationError, ValidationErrors, is_answered, validate};
