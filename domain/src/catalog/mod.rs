//! Question catalog — the fixed ordered sequence defining the questionnaire.
//!
//! The catalog is read-only input: created once at session start and never
//! mutated. Exactly one step has the `welcome` kind (first), and the flow
//! treats the last entry as terminal.

pub mod question;

pub use question::{DEFAULT_RATING_MAX, Question, QuestionKind};

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The immutable question sequence for one session (Value Object).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Create a new catalog
    ///
    /// # Panics
    /// Panics if `questions` is empty
    pub fn new(questions: Vec<Question>) -> Self {
        assert!(!questions.is_empty(), "Catalog cannot be empty");
        Self { questions }
    }

    /// Try to create a catalog, rejecting an empty question list
    pub fn try_new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            Err(DomainError::EmptyCatalog)
        } else {
            Ok(Self { questions })
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the last entry (the terminal position).
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Progress percentage for the progress bar.
    ///
    /// The welcome step (and anything before it) is 0%, the submission step
    /// and beyond is 100%, and interior positions scale linearly over the
    /// non-structural steps.
    pub fn progress_percent(&self, index: usize) -> f32 {
        let welcome = self.questions.iter().position(|q| q.is_welcome());
        let submission = self.questions.iter().position(|q| q.is_submission());

        if let Some(w) = welcome
            && index <= w
        {
            return 0.0;
        }
        if let Some(s) = submission
            && index >= s
        {
            return 100.0;
        }

        let total = self
            .questions
            .iter()
            .filter(|q| !q.kind.is_structural())
            .count();
        if total == 0 {
            return 0.0;
        }

        let end = index.min(self.questions.len());
        let done = self.questions[..end]
            .iter()
            .filter(|q| !q.kind.is_structural())
            .count();

        done as f32 / total as f32 * 100.0
    }
}
