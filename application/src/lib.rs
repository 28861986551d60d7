//! Application layer for BorderPass
//!
//! This crate contains use cases, port definitions, and assistant
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AssistantParams;
pub use ports::completion_gateway::{
    CompletionGateway, CompletionRequest, GatewayError, StreamHandle,
};
pub use use_cases::assist::{AssistError, AssistInput, AssistUseCase};
pub use use_cases::survey_session::{StepOutcome, SurveySession};
