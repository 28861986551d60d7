//! Prompt context building for the assistant.
//!
//! [`build_system_prompt`] is a pure, total function: every question id
//! maps to a guidance entry (with a declared fallback), interpolated into a
//! shared preamble. It prepares instruction text only — the actual model
//! call happens behind the gateway port in the application layer.

pub mod guidance;

pub use guidance::{FALLBACK, Guidance, guidance_for};

use crate::catalog::Question;
use crate::response::ResponseStore;

/// Shared behavioral preamble for every assistant call.
const PREAMBLE: &str = r#"You are a helpful AI assistant for BorderPass, a travel questionnaire application. You provide context-aware support to users as they complete their travel profile.

IMPORTANT GUIDELINES:
- Be concise, friendly, and professional
- Provide specific, actionable answers
- Stay focused on the current question context
- Don't answer questions for the user - guide them to make their own choices
- Use encouraging language
- If asked about technical issues, provide helpful troubleshooting steps"#;

/// Build the system prompt for the current question.
///
/// Deterministic: identical `(question, responses)` inputs yield
/// byte-identical output.
pub fn build_system_prompt(question: &Question, responses: &ResponseStore) -> String {
    let guidance = guidance_for(&question.id);

    let mut prompt = format!(
        "{PREAMBLE}\n\nCurrent Question Context: {}\nQuestion Type: {}\nQuestion Subtitle: {}\n\nCONTEXT: {}\n",
        question.title,
        question.kind,
        question.subtitle.as_deref().unwrap_or("N/A"),
        guidance.context,
    );

    if !guidance.help_with.is_empty() {
        prompt.push_str("\nYou should help with:\n");
        for topic in guidance.help_with {
            prompt.push_str("- ");
            prompt.push_str(topic);
            prompt.push('\n');
        }
    }

    if !guidance.examples.is_empty() {
        prompt.push_str("\nExample responses:\n");
        for example in guidance.examples {
            prompt.push_str("- \"");
            prompt.push_str(example);
            prompt.push_str("\"\n");
        }
    }

    prompt.push_str(&format!(
        "\nThe user has answered {} question(s) so far.",
        responses.len(),
    ));

    prompt
}

/// Greeting shown when the chat widget opens on this question.
pub fn initial_message(question: &Question) -> &'static str {
    guidance_for(&question.id).greeting
}

/// One-tap question suggestions for this question.
pub fn quick_suggestions(question: &Question) -> &'static [&'static str] {
    guidance_for(&question.id).suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Question, QuestionKind};
    use crate::response::ResponseValue;

    fn email_question() -> Question {
        Question::new("email", QuestionKind::ShortText, "What's your email address?")
            .with_subtitle("We'll send your profile here.")
            .required()
            .with_input_type("email")
    }

    #[test]
    fn prompt_interpolates_question_fields() {
        let prompt = build_system_prompt(&email_question(), &ResponseStore::new());
        assert!(prompt.contains("Current Question Context: What's your email address?"));
        assert!(prompt.contains("Question Type: short_text"));
        assert!(prompt.contains("Question Subtitle: We'll send your profile here."));
        assert!(prompt.contains("CONTEXT: User is entering their email address."));
        assert!(prompt.contains("Example responses:"));
    }

    #[test]
    fn missing_subtitle_renders_as_na() {
        let q = Question::new("full_name", QuestionKind::ShortText, "Name?");
        let prompt = build_system_prompt(&q, &ResponseStore::new());
        assert!(prompt.contains("Question Subtitle: N/A"));
    }

    #[test]
    fn unknown_id_uses_the_fallback_entry() {
        let q = Question::new("favorite_airline", QuestionKind::ShortText, "Airline?");
        let prompt = build_system_prompt(&q, &ResponseStore::new());
        assert!(prompt.contains("General questionnaire assistance"));
        assert!(!prompt.contains("You should help with:"));
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let q = email_question();
        let mut responses = ResponseStore::new();
        responses.set("full_name", ResponseValue::text("Jane Doe"));
        let a = build_system_prompt(&q, &responses);
        let b = build_system_prompt(&q, &responses);
        assert_eq!(a, b);
    }

    #[test]
    fn answered_count_reflects_the_store() {
        let q = email_question();
        let mut responses = ResponseStore::new();
        responses.set("full_name", ResponseValue::text("Jane Doe"));
        responses.set("travel_frequency", ResponseValue::text("Rarely"));
        let prompt = build_system_prompt(&q, &responses);
        assert!(prompt.contains("answered 2 question(s)"));
    }

    #[test]
    fn greeting_and_suggestions_by_question() {
        let q = email_question();
        assert!(initial_message(&q).contains("email section"));
        assert_eq!(quick_suggestions(&q).len(), 3);

        let unknown = Question::new("other", QuestionKind::ShortText, "Other?");
        assert!(initial_message(&unknown).contains("any questions about this section"));
    }
}
