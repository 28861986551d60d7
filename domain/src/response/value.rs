//! Response value object

use serde::{Deserialize, Serialize};

/// The answer to one question (Value Object).
///
/// The shape depends on the question's kind: text for short/long text,
/// radio, dropdown and date; an integer for rating; an ordered list of
/// option strings for checkbox. Serialized untagged so the wire format
/// stays the plain JSON the UI sends (`"x"`, `3`, `["a","b"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Rating(u32),
    Text(String),
    Selection(Vec<String>),
}

impl ResponseValue {
    pub fn text(value: impl Into<String>) -> Self {
        ResponseValue::Text(value.into())
    }

    pub fn rating(value: u32) -> Self {
        ResponseValue::Rating(value)
    }

    pub fn selection<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResponseValue::Selection(items.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_rating(&self) -> Option<u32> {
        match self {
            ResponseValue::Rating(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            ResponseValue::Selection(items) => Some(items),
            _ => None,
        }
    }

    /// True when the value carries no usable content: whitespace-only text
    /// or an empty selection. Ratings are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            ResponseValue::Text(s) => s.trim().is_empty(),
            ResponseValue::Selection(items) => items.is_empty(),
            ResponseValue::Rating(_) => false,
        }
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::text(s)
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        ResponseValue::Text(s)
    }
}

impl From<u32> for ResponseValue {
    fn from(n: u32) -> Self {
        ResponseValue::Rating(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_wire_shapes() {
        let text: ResponseValue = serde_json::from_str("\"Jane Doe\"").unwrap();
        assert_eq!(text, ResponseValue::text("Jane Doe"));

        let rating: ResponseValue = serde_json::from_str("4").unwrap();
        assert_eq!(rating, ResponseValue::rating(4));

        let selection: ResponseValue = serde_json::from_str(r#"["Asia","Europe"]"#).unwrap();
        assert_eq!(selection, ResponseValue::selection(["Asia", "Europe"]));
    }

    #[test]
    fn blank_detection() {
        assert!(ResponseValue::text("   ").is_blank());
        assert!(ResponseValue::selection(Vec::<String>::new()).is_blank());
        assert!(!ResponseValue::text("hi").is_blank());
        assert!(!ResponseValue::rating(1).is_blank());
    }

    #[test]
    fn accessors_match_variants() {
        assert_eq!(ResponseValue::text("x").as_text(), Some("x"));
        assert_eq!(ResponseValue::rating(3).as_rating(), Some(3));
        assert!(ResponseValue::rating(3).as_text().is_none());
        assert_eq!(
            ResponseValue::selection(["a"]).as_selection(),
            Some(&["a".to_string()][..])
        );
    }
}
