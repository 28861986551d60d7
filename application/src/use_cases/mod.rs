//! Use cases — the operations the application exposes.
//!
//! - [`survey_session`] — drive the questionnaire flow
//! - [`assist`] — one contextual completion call for the chat widget

pub mod assist;
pub mod survey_session;
