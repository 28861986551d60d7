//! Survey session use case — drives one questionnaire run.
//!
//! Owns the catalog, the response store, the navigation snapshot, and the
//! inline error map, and serializes every mutation behind three methods:
//! [`record_response`](SurveySession::record_response), [`next`](SurveySession::next)
//! and [`back`](SurveySession::back). Rendering reads the accessors and
//! reacts to the returned [`StepOutcome`].

use borderpass_domain::{
    Catalog, DomainError, FlowEvent, FlowState, Question, ResponseStore, ResponseValue,
    SummaryItem, ValidationErrors, summarize, validate,
};
use tracing::debug;

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to another question.
    Moved,
    /// Advanced past the last entry; the flow is now complete.
    Completed,
    /// Validation failed; the error map was replaced with the failure.
    Rejected,
    /// Dropped by the re-entrancy guard or at a boundary.
    Ignored,
}

/// One questionnaire run: catalog, answers, position, inline errors.
///
/// Created at session start, discarded at session end. Nothing is
/// persisted.
#[derive(Debug, Clone)]
pub struct SurveySession {
    catalog: Catalog,
    state: FlowState,
    responses: ResponseStore,
    errors: ValidationErrors,
}

impl SurveySession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: FlowState::initial(),
            responses: ResponseStore::new(),
            errors: ValidationErrors::new(),
        }
    }

    // ==================== Accessors ====================

    /// The question at the current position.
    pub fn current_question(&self) -> &Question {
        // Position is always within bounds: apply() never moves past the
        // last index.
        self.catalog
            .get(self.state.position)
            .unwrap_or_else(|| &self.catalog.questions()[self.catalog.last_index()])
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    /// Progress percentage for the current position.
    pub fn progress(&self) -> f32 {
        self.catalog.progress_percent(self.state.position)
    }

    /// Render the answered questions for the completion screen.
    pub fn summary(&self) -> Vec<SummaryItem> {
        summarize(&self.catalog, &self.responses)
    }

    // ==================== Mutations ====================

    /// Record an answer — the single mutation entry point for responses.
    ///
    /// Clears only this field's inline error; other fields' errors are
    /// left untouched.
    pub fn record_response(&mut self, id: &str, value: ResponseValue) -> Result<(), DomainError> {
        if self.catalog.by_id(id).is_none() {
            return Err(DomainError::UnknownQuestion(id.to_string()));
        }
        self.responses.set(id, value);
        self.errors.clear_field(id);
        Ok(())
    }

    /// Advance to the next question, gated on validation.
    pub fn next(&mut self) -> StepOutcome {
        if self.state.transitioning || self.state.complete {
            return StepOutcome::Ignored;
        }

        let question = self.current_question().clone();
        if let Err(error) = validate(&question, self.responses.get(&question.id)) {
            debug!("Validation rejected '{}': {}", question.id, error);
            self.errors.replace(&question.id, &error);
            return StepOutcome::Rejected;
        }

        self.errors.clear_all();
        let before = self.state;
        self.state = self.state.apply(FlowEvent::Next, &self.catalog, &self.responses);

        if self.state.complete {
            debug!("Survey complete after '{}'", question.id);
            StepOutcome::Completed
        } else if self.state.position != before.position {
            StepOutcome::Moved
        } else {
            StepOutcome::Ignored
        }
    }

    /// Step back to the previous question.
    pub fn back(&mut self) -> StepOutcome {
        let before = self.state;
        self.state = self.state.apply(FlowEvent::Back, &self.catalog, &self.responses);
        if self.state.position != before.position {
            StepOutcome::Moved
        } else {
            StepOutcome::Ignored
        }
    }

    /// Set the animation re-entrancy guard.
    pub fn begin_transition(&mut self) {
        self.state = self.state.begin_transition();
    }

    /// Clear the animation re-entrancy guard.
    pub fn end_transition(&mut self) {
        self.state = self.state.end_transition();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borderpass_domain::{Direction, QuestionKind};

    fn session() -> SurveySession {
        SurveySession::new(Catalog::new(vec![
            Question::new("welcome", QuestionKind::Welcome, "Welcome"),
            Question::new("full_name", QuestionKind::ShortText, "Name?").required(),
            Question::new("email", QuestionKind::ShortText, "Email?")
                .required()
                .with_input_type("email"),
            Question::new("feedback", QuestionKind::LongText, "Feedback?"),
            Question::new("submission", QuestionKind::Submission, "Thanks"),
        ]))
    }

    #[test]
    fn welcome_advances_without_an_answer() {
        let mut s = session();
        assert_eq!(s.next(), StepOutcome::Moved);
        assert_eq!(s.current_question().id, "full_name");
        assert_eq!(s.state().direction, Direction::Forward);
    }

    #[test]
    fn required_question_rejects_and_records_error() {
        let mut s = session();
        s.next();
        assert_eq!(s.next(), StepOutcome::Rejected);
        assert_eq!(
            s.errors().message_for("full_name"),
            Some("This field is required")
        );
        assert_eq!(s.current_question().id, "full_name");
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut s = session();
        s.next();
        s.next(); // rejected, error recorded
        s.record_response("full_name", ResponseValue::text("Jane Doe"))
            .unwrap();
        assert!(s.errors().is_empty());
    }

    #[test]
    fn unknown_id_is_rejected_by_the_mutation_entry_point() {
        let mut s = session();
        let err = s
            .record_response("favorite_airline", ResponseValue::text("x"))
            .unwrap_err();
        assert!(err.is_unknown_question());
    }

    #[test]
    fn full_walk_to_completion() {
        let mut s = session();
        assert_eq!(s.next(), StepOutcome::Moved); // welcome -> full_name
        s.record_response("full_name", ResponseValue::text("Jane Doe"))
            .unwrap();
        assert_eq!(s.next(), StepOutcome::Moved); // -> email

        s.record_response("email", ResponseValue::text("not-an-email"))
            .unwrap();
        assert_eq!(s.next(), StepOutcome::Rejected);
        assert_eq!(
            s.errors().message_for("email"),
            Some("Please enter a valid email address")
        );

        s.record_response("email", ResponseValue::text("jane@example.com"))
            .unwrap();
        assert_eq!(s.next(), StepOutcome::Moved); // -> feedback (optional)
        assert_eq!(s.next(), StepOutcome::Moved); // -> submission
        assert_eq!(s.next(), StepOutcome::Completed);
        assert!(s.is_complete());
        assert_eq!(s.progress(), 100.0);

        // Complete is terminal
        assert_eq!(s.next(), StepOutcome::Ignored);
        assert_eq!(s.back(), StepOutcome::Ignored);

        let summary = s.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].answer, "Jane Doe");
    }

    #[test]
    fn back_is_ignored_on_welcome() {
        let mut s = session();
        assert_eq!(s.back(), StepOutcome::Ignored);
        assert_eq!(s.current_question().id, "welcome");
    }

    #[test]
    fn guard_drops_navigation() {
        let mut s = session();
        s.begin_transition();
        assert_eq!(s.next(), StepOutcome::Ignored);
        assert_eq!(s.current_question().id, "welcome");
        s.end_transition();
        assert_eq!(s.next(), StepOutcome::Moved);
    }

    #[test]
    fn progress_tracks_position() {
        let mut s = session();
        assert_eq!(s.progress(), 0.0);
        s.next(); // full_name, nothing behind it yet
        assert_eq!(s.progress(), 0.0);
        s.record_response("full_name", ResponseValue::text("Jane Doe"))
            .unwrap();
        s.next(); // email, one of three steps done
        assert!((s.progress() - 100.0 / 3.0).abs() < 0.01);
    }
}
