//! Questionnaire catalog sources
//!
//! The catalog either comes from a JSON file on disk or from the
//! built-in BorderPass travel questionnaire.

use borderpass_domain::{Catalog, Question, QuestionKind};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog file contains no questions")]
    Empty,
}

/// Load a questionnaire catalog from a JSON file.
///
/// The file is an array of question objects in the same shape the
/// domain `Question` serializes to.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let questions: Vec<Question> = serde_json::from_str(&raw)?;
    Catalog::try_new(questions).map_err(|_| CatalogError::Empty)
}

/// The built-in BorderPass travel questionnaire.
pub fn builtin_catalog() -> Catalog {
    Catalog::new(vec![
        Question::new("welcome", QuestionKind::Welcome, "Welcome to BorderPass")
            .with_subtitle("Answer a few questions about how you travel and we'll build your personalized travel profile. It only takes a couple of minutes."),
        Question::new("full_name", QuestionKind::ShortText, "What is your full name?")
            .with_subtitle("As it appears on your passport or travel documents")
            .required(),
        Question::new("email", QuestionKind::ShortText, "What is your email address?")
            .with_subtitle("We'll send your BorderPass profile and travel updates here")
            .with_input_type("email")
            .required(),
        Question::new(
            "travel_frequency",
            QuestionKind::Radio,
            "How often do you travel internationally?",
        )
        .with_options([
            "First time traveler",
            "Once a year",
            "Multiple times a year",
            "Monthly or more",
        ])
        .required(),
        Question::new(
            "primary_purpose",
            QuestionKind::Dropdown,
            "What is the primary purpose of your travel?",
        )
        .with_options([
            "Leisure/Vacation",
            "Business",
            "Visiting family/friends",
            "Education",
            "Other",
        ])
        .required(),
        Question::new(
            "destinations",
            QuestionKind::Checkbox,
            "Which regions have you visited recently?",
        )
        .with_subtitle("Select all continents you've visited in the past 5 years")
        .with_options([
            "North America",
            "South America",
            "Europe",
            "Asia",
            "Africa",
            "Oceania",
        ])
        .required(),
        Question::new(
            "travel_experience_rating",
            QuestionKind::Rating,
            "How would you rate your typical airport experience?",
        )
        .with_subtitle("1 = very stressful, 5 = smooth sailing")
        .with_max(5)
        .required(),
        Question::new(
            "feedback",
            QuestionKind::LongText,
            "Anything else you'd like to share about your travel experiences?",
        )
        .with_subtitle("Optional - pain points, wishes, memorable moments"),
        Question::new("submission", QuestionKind::Submission, "You're all set!")
            .with_subtitle("Review your answers and submit to generate your BorderPass profile."),
    ])
}
