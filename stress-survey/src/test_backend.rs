//! Test backend for running surveys without user interaction.
//!
//! `TestBackend` replays a fixed script of events against an engine. Between
//! two scripted events any parked move is applied, as if the user waited for
//! the transition to finish before clicking again.
//!
//! # Example
//!
//! ```rust
//! use stress_survey::{AnswerValue, Config, TestBackend, pss};
//!
//! let mut engine = pss::engine(&Config::default());
//! let outcome = engine
//!     .run(
//!         TestBackend::new()
//!             .with_all(AnswerValue::Sometimes)
//!             .with_score_request(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(outcome.score.map(|s| s.value()), Some(25));
//! ```

use crate::engine::{SubmitOutcome, SurveyEngine};
use crate::event::{EventOutcome, SurveyEvent};
use crate::{AnswerValue, SessionOutcome, SurveyBackend, SurveyError};

/// A test backend that replays pre-configured events.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    events: Vec<SurveyEvent>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Scripted event {step} ({event:?}) failed: {source}")]
    EventFailed {
        step: usize,
        event: SurveyEvent,
        source: SurveyError,
    },
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a raw event.
    pub fn with_event(mut self, event: SurveyEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Answer question `index`.
    pub fn with_answer(self, index: usize, value: AnswerValue) -> Self {
        self.with_event(SurveyEvent::AnswerSelected { index, value })
    }

    /// Answer the given questions in the given order.
    pub fn with_answers(mut self, answers: impl IntoIterator<Item = (usize, AnswerValue)>) -> Self {
        for (index, value) in answers {
            self = self.with_answer(index, value);
        }
        self
    }

    /// Answer every PSS question, in order, with the same value.
    pub fn with_all(self, value: AnswerValue) -> Self {
        self.with_answers((0..crate::pss::QUESTIONS.len()).map(|index| (index, value)))
    }

    pub fn with_next(self) -> Self {
        self.with_event(SurveyEvent::Next)
    }

    pub fn with_previous(self) -> Self {
        self.with_event(SurveyEvent::Previous)
    }

    pub fn with_score_request(self) -> Self {
        self.with_event(SurveyEvent::ScoreRequested)
    }

    pub fn with_submit(self) -> Self {
        self.with_event(SurveyEvent::SubmitRequested)
    }
}

impl SurveyBackend for TestBackend {
    type Error = TestBackendError;

    fn conduct(&self, engine: &mut SurveyEngine) -> Result<SessionOutcome, Self::Error> {
        let mut outcome = SessionOutcome::default();

        for (step, event) in self.events.iter().copied().enumerate() {
            engine.settle();

            match engine.handle(event) {
                Ok(EventOutcome::Submit(SubmitOutcome::Proceed { link })) => {
                    outcome.submitted_link = Some(link);
                }
                Ok(_) => {}
                // The engine has already moved to the gap; keep replaying.
                Err(err) if err.is_incomplete() => {}
                Err(source) => {
                    return Err(TestBackendError::EventFailed {
                        step,
                        event,
                        source,
                    });
                }
            }
        }

        engine.settle();
        outcome.score = engine.score();
        Ok(outcome)
    }
}
