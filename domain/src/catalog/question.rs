//! Question record — one step of the questionnaire.

use serde::{Deserialize, Serialize};

/// Rating upper bound used when a rating question omits `max`.
pub const DEFAULT_RATING_MAX: u32 = 5;

/// The closed set of question kinds.
///
/// `Welcome` and `Submission` are structural steps: they render no input
/// and always count as answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Welcome,
    Submission,
    ShortText,
    LongText,
    Radio,
    Checkbox,
    Dropdown,
    Rating,
    Date,
}

impl QuestionKind {
    /// Get the wire identifier for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Welcome => "welcome",
            QuestionKind::Submission => "submission",
            QuestionKind::ShortText => "short_text",
            QuestionKind::LongText => "long_text",
            QuestionKind::Radio => "radio",
            QuestionKind::Checkbox => "checkbox",
            QuestionKind::Dropdown => "dropdown",
            QuestionKind::Rating => "rating",
            QuestionKind::Date => "date",
        }
    }

    /// Structural steps don't count toward questionnaire progress.
    pub fn is_structural(self) -> bool {
        matches!(self, QuestionKind::Welcome | QuestionKind::Submission)
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of the questionnaire (Value Object).
///
/// The wire shape matches the catalog JSON consumed by the UI: the kind is
/// serialized under the field name `type`, and optional fields are omitted
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique stable key, referenced by responses and prompt guidance.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Choices for radio/checkbox/dropdown kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Upper bound for rating kinds; `None` means [`DEFAULT_RATING_MAX`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Rendering refinement for short text. The value `email` additionally
    /// enables format validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}

impl Question {
    /// Create a new optional question with no subtitle or options.
    pub fn new(id: impl Into<String>, kind: QuestionKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            subtitle: None,
            required: false,
            options: Vec::new(),
            max: None,
            input_type: None,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    // ==================== Accessors ====================

    pub fn is_welcome(&self) -> bool {
        self.kind == QuestionKind::Welcome
    }

    pub fn is_submission(&self) -> bool {
        self.kind == QuestionKind::Submission
    }

    /// Whether a present answer must additionally pass the email format check.
    pub fn is_email_field(&self) -> bool {
        matches!(self.input_type.as_deref(), Some("email"))
    }

    /// Effective rating upper bound.
    pub fn rating_max(&self) -> u32 {
        self.max.unwrap_or(DEFAULT_RATING_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionKind::ShortText).unwrap();
        assert_eq!(json, "\"short_text\"");
    }

    #[test]
    fn question_wire_shape_uses_type_field() {
        let q = Question::new("email", QuestionKind::ShortText, "What's your email address?")
            .required()
            .with_input_type("email");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "short_text");
        assert_eq!(json["input_type"], "email");
        assert!(json.get("subtitle").is_none());
        assert!(json.get("options").is_none());
    }

    #[test]
    fn question_deserializes_with_defaults() {
        let q: Question =
            serde_json::from_str(r#"{"id":"feedback","type":"long_text","title":"Feedback?"}"#)
                .unwrap();
        assert!(!q.required);
        assert!(q.options.is_empty());
        assert!(q.subtitle.is_none());
    }

    #[test]
    fn rating_max_defaults_to_five() {
        let q = Question::new("r", QuestionKind::Rating, "Rate it");
        assert_eq!(q.rating_max(), 5);
        assert_eq!(q.with_max(10).rating_max(), 10);
    }

    #[test]
    fn email_flag_comes_from_input_type() {
        let plain = Question::new("name", QuestionKind::ShortText, "Name?");
        assert!(!plain.is_email_field());
        let email = plain.with_input_type("email");
        assert!(email.is_email_field());
    }

    #[test]
    fn structural_kinds() {
        assert!(QuestionKind::Welcome.is_structural());
        assert!(QuestionKind::Submission.is_structural());
        assert!(!QuestionKind::Radio.is_structural());
    }
}
