//! Assistant parameters — upstream completion call tuning.
//!
//! [`AssistantParams`] groups the static parameters passed on every call to
//! the completion service. These are application-layer concerns, not domain
//! policy.

use serde::{Deserialize, Serialize};

/// Parameters for the upstream completion call.
///
/// Defaults target a small, fast model with a modest token budget — the
/// chat widget answers short contextual questions, not essays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantParams {
    /// Model identifier sent to the completion service.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens in the completion.
    pub max_tokens: u32,
}

impl Default for AssistantParams {
    fn default() -> Self {
        Self {
            model: "llama3-8b-8192".to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

impl AssistantParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = AssistantParams::default();
        assert_eq!(params.model, "llama3-8b-8192");
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 500);
    }

    #[test]
    fn builder_overrides() {
        let params = AssistantParams::default()
            .with_model("llama-3.1-70b-versatile")
            .with_temperature(0.2)
            .with_max_tokens(1024);
        assert_eq!(params.model, "llama-3.1-70b-versatile");
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_tokens, 1024);
    }
}
