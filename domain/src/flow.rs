//! Navigation state machine — pages through the catalog.
//!
//! Transitions are pure: [`FlowState::apply`] takes an event and returns a
//! new immutable snapshot, decoupled from any rendering concern. `Next` is
//! gated on the answered predicate; from the last catalog entry it marks
//! the flow complete, which is terminal.
//!
//! The `transitioning` flag is a plain boolean re-entrancy guard standing
//! in for the original exit-animation lock: events arriving while it is
//! set are dropped. It is not a concurrency primitive.

use crate::catalog::Catalog;
use crate::response::ResponseStore;
use crate::validation::is_answered;
use serde::{Deserialize, Serialize};

/// Direction of the last committed move, for entrance/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

/// A navigation request from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    Next,
    Back,
}

/// Immutable snapshot of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowState {
    /// Current index into the catalog.
    pub position: usize,
    pub direction: Direction,
    /// Re-entrancy guard, set for the duration of an exit animation.
    pub transitioning: bool,
    /// Set exactly once, when advancing past the last catalog entry.
    pub complete: bool,
}

impl Default for FlowState {
    fn default() -> Self {
        Self::initial()
    }
}

impl FlowState {
    /// The session's starting state: first question, facing forward.
    pub fn initial() -> Self {
        Self {
            position: 0,
            direction: Direction::Forward,
            transitioning: false,
            complete: false,
        }
    }

    /// Apply one navigation event, returning the next snapshot.
    ///
    /// `Next` requires the current question to be answered; from the last
    /// index it completes the flow instead of advancing. `Back` is a no-op
    /// at the first entry. Both are no-ops while `transitioning` is set or
    /// after completion.
    pub fn apply(self, event: FlowEvent, catalog: &Catalog, responses: &ResponseStore) -> FlowState {
        if self.transitioning || self.complete {
            return self;
        }

        match event {
            FlowEvent::Next => {
                let Some(question) = catalog.get(self.position) else {
                    return self;
                };
                if !is_answered(question, responses.get(&question.id)) {
                    return self;
                }
                if self.position == catalog.last_index() {
                    FlowState {
                        direction: Direction::Forward,
                        complete: true,
                        ..self
                    }
                } else {
                    FlowState {
                        position: self.position + 1,
                        direction: Direction::Forward,
                        ..self
                    }
                }
            }
            FlowEvent::Back => {
                if self.position == 0 {
                    return self;
                }
                FlowState {
                    position: self.position - 1,
                    direction: Direction::Backward,
                    ..self
                }
            }
        }
    }

    /// Set the re-entrancy guard for the duration of an exit animation.
    pub fn begin_transition(self) -> FlowState {
        FlowState {
            transitioning: true,
            ..self
        }
    }

    /// Clear the guard once the move has committed.
    pub fn end_transition(self) -> FlowState {
        FlowState {
            transitioning: false,
            ..self
        }
    }
}
