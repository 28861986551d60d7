//! Validation engine — per-field answer checks.
//!
//! [`validate`] decides whether one answer satisfies its question's
//! constraints; [`is_answered`] is the looser predicate gating the `Next`
//! transition. Each call evaluates exactly one question against its own
//! current value — there is no cross-field validation.

use crate::catalog::Question;
use crate::response::ResponseValue;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Permissive email shape check: ASCII local part, dotted domain, TLD of
/// at least two letters. Deliberately loose (no length bounds); a known
/// approximation rather than full address syntax.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// A field-scoped, user-correctable validation failure.
///
/// The `Display` strings are the inline messages shown next to the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Please select at least one option")]
    EmptySelection,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Check one question against its current value.
///
/// Rules apply in order:
/// 1. An optional question is always `Ok`, whatever the value.
/// 2. A missing value, or whitespace-only text, is `Required`.
/// 3. An empty selection is `EmptySelection`.
/// 4. A present text value on an email-flagged question must match the
///    email pattern.
pub fn validate(question: &Question, value: Option<&ResponseValue>) -> Result<(), ValidationError> {
    if !question.required {
        return Ok(());
    }

    let Some(value) = value else {
        return Err(ValidationError::Required);
    };

    match value {
        ResponseValue::Text(s) if s.trim().is_empty() => return Err(ValidationError::Required),
        ResponseValue::Selection(items) if items.is_empty() => {
            return Err(ValidationError::EmptySelection);
        }
        _ => {}
    }

    if question.is_email_field()
        && let ResponseValue::Text(s) = value
        && !EMAIL_RE.is_match(s)
    {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Whether the question counts as answered for the purpose of advancing.
///
/// Welcome steps and optional questions always do. Otherwise the value must
/// be present and non-blank; a rating of at least 1 counts; email-flagged
/// fields must additionally match the email pattern.
pub fn is_answered(question: &Question, value: Option<&ResponseValue>) -> bool {
    if question.is_welcome() || !question.required {
        return true;
    }

    let Some(value) = value else {
        return false;
    };

    match value {
        ResponseValue::Text(s) => {
            if s.trim().is_empty() {
                false
            } else if question.is_email_field() {
                EMAIL_RE.is_match(s)
            } else {
                true
            }
        }
        ResponseValue::Rating(n) => *n >= 1,
        ResponseValue::Selection(items) => !items.is_empty(),
    }
}

/// Inline error messages keyed by question id.
///
/// A validation pass replaces the whole map (stale errors for other fields
/// are not preserved); editing a field clears only that field's entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole map with this one failure.
    pub fn replace(&mut self, id: impl Into<String>, error: &ValidationError) {
        self.entries.clear();
        self.entries.insert(id.into(), error.to_string());
    }

    /// Drop every entry (a validation pass that found nothing).
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Drop the entry for one field, leaving the rest untouched.
    pub fn clear_field(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn message_for(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QuestionKind;

    fn text_q(required: bool) -> Question {
        let q = Question::new("full_name", QuestionKind::ShortText, "Name?");
        if required { q.required() } else { q }
    }

    fn email_q() -> Question {
        Question::new("email", QuestionKind::ShortText, "Email?")
            .required()
            .with_input_type("email")
    }

    fn checkbox_q() -> Question {
        Question::new("destinations", QuestionKind::Checkbox, "Regions?")
            .required()
            .with_options(["Asia", "Europe"])
    }

    #[test]
    fn optional_always_ok() {
        let q = text_q(false);
        assert!(validate(&q, None).is_ok());
        assert!(validate(&q, Some(&ResponseValue::text(""))).is_ok());
        assert!(validate(&q, Some(&ResponseValue::text("   "))).is_ok());
    }

    #[test]
    fn required_text_rejects_blank() {
        let q = text_q(true);
        assert_eq!(validate(&q, None), Err(ValidationError::Required));
        assert_eq!(
            validate(&q, Some(&ResponseValue::text("  "))),
            Err(ValidationError::Required)
        );
        assert!(validate(&q, Some(&ResponseValue::text("Jane"))).is_ok());
    }

    #[test]
    fn required_checkbox_rejects_empty_set() {
        let q = checkbox_q();
        assert_eq!(
            validate(&q, Some(&ResponseValue::selection(Vec::<String>::new()))),
            Err(ValidationError::EmptySelection)
        );
        assert!(validate(&q, Some(&ResponseValue::selection(["Asia"]))).is_ok());
    }

    #[test]
    fn email_pattern_cases() {
        let q = email_q();
        assert!(validate(&q, Some(&ResponseValue::text("user@example.com"))).is_ok());
        assert_eq!(
            validate(&q, Some(&ResponseValue::text("not-an-email"))),
            Err(ValidationError::InvalidEmail)
        );
        // TLD of one letter is rejected
        assert_eq!(
            validate(&q, Some(&ResponseValue::text("a@b.c"))),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn answered_predicate() {
        let welcome = Question::new("welcome", QuestionKind::Welcome, "Welcome");
        assert!(is_answered(&welcome, None));

        assert!(is_answered(&text_q(false), None));
        assert!(!is_answered(&text_q(true), None));
        assert!(!is_answered(&text_q(true), Some(&ResponseValue::text(" "))));
        assert!(is_answered(&text_q(true), Some(&ResponseValue::text("x"))));

        let rating = Question::new("r", QuestionKind::Rating, "Rate").required();
        assert!(is_answered(&rating, Some(&ResponseValue::rating(1))));
        assert!(!is_answered(&rating, Some(&ResponseValue::rating(0))));

        assert!(!is_answered(
            &checkbox_q(),
            Some(&ResponseValue::selection(Vec::<String>::new()))
        ));

        assert!(!is_answered(
            &email_q(),
            Some(&ResponseValue::text("nope"))
        ));
    }

    #[test]
    fn error_map_replace_and_clear() {
        let mut errors = ValidationErrors::new();
        errors.replace("full_name", &ValidationError::Required);
        assert_eq!(errors.message_for("full_name"), Some("This field is required"));

        // A new pass replaces the whole map
        errors.replace("email", &ValidationError::InvalidEmail);
        assert_eq!(errors.len(), 1);
        assert!(errors.message_for("full_name").is_none());

        // Editing clears only that field
        errors.clear_field("email");
        assert!(errors.is_empty());
    }
}
