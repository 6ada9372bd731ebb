//! Input events from the presentation layer.

use std::time::Instant;

use stress_survey_types::{AnswerValue, SurveyError};

use crate::engine::{AfterAnswer, SubmitOutcome, SurveyEngine};
use crate::scoring::Score;

/// A discrete user action, or the settle tick that follows an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyEvent {
    AnswerSelected { index: usize, value: AnswerValue },
    Next,
    Previous,
    ScoreRequested,
    SubmitRequested,
    Settle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Answered(AfterAnswer),
    /// `false` when the move was a no-op at a boundary.
    Moved(bool),
    Scored(Score),
    Submit(SubmitOutcome),
    /// The index moved to, if a move was parked and due.
    Settled(Option<usize>),
}

impl SurveyEngine {
    /// Apply one event.
    ///
    /// `ScoreRequested` on an incomplete survey returns
    /// [`SurveyError::Incomplete`] after redirecting to the first gap.
    pub fn handle(&mut self, event: SurveyEvent) -> Result<EventOutcome, SurveyError> {
        self.handle_at(event, Instant::now())
    }

    pub fn handle_at(
        &mut self,
        event: SurveyEvent,
        now: Instant,
    ) -> Result<EventOutcome, SurveyError> {
        let outcome = match event {
            SurveyEvent::AnswerSelected { index, value } => {
                EventOutcome::Answered(self.select_answer_at(index, value, now)?)
            }
            SurveyEvent::Next => EventOutcome::Moved(self.next_question()),
            SurveyEvent::Previous => EventOutcome::Moved(self.previous_question()),
            SurveyEvent::ScoreRequested => EventOutcome::Scored(self.compute_score()?),
            SurveyEvent::SubmitRequested => EventOutcome::Submit(self.request_submit()),
            SurveyEvent::Settle => EventOutcome::Settled(self.poll(now)),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pss;

    #[test]
    fn settle_tick_before_delay_does_nothing() {
        let mut engine = pss::engine(&Config::default());
        let start = Instant::now();
        engine
            .handle_at(
                SurveyEvent::AnswerSelected {
                    index: 0,
                    value: AnswerValue::Often,
                },
                start,
            )
            .unwrap();

        let outcome = engine.handle_at(SurveyEvent::Settle, start).unwrap();
        assert_eq!(outcome, EventOutcome::Settled(None));

        let later = start + Config::default().engine.settle_delay();
        let outcome = engine.handle_at(SurveyEvent::Settle, later).unwrap();
        assert_eq!(outcome, EventOutcome::Settled(Some(1)));
    }

    #[test]
    fn score_request_surfaces_incomplete() {
        let mut engine = pss::engine(&Config::default());
        let err = engine.handle(SurveyEvent::ScoreRequested).unwrap_err();
        assert!(matches!(err, SurveyError::Incomplete { first_unanswered: 0 }));
        assert!(engine.is_skip_mode());
    }

    #[test]
    fn boundary_moves_report_no_op() {
        let mut engine = pss::engine(&Config::default());
        assert_eq!(
            engine.handle(SurveyEvent::Previous).unwrap(),
            EventOutcome::Moved(false)
        );
        assert_eq!(
            engine.handle(SurveyEvent::Next).unwrap(),
            EventOutcome::Moved(true)
        );
    }
}
