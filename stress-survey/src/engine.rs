//! The survey state machine.
//!
//! `SurveyEngine` owns the answers and the navigation state for one session.
//! It is `Answering` until [`SurveyEngine::compute_score`] succeeds, then
//! `Complete`. Skip mode is a flag of the answering state: once the user is
//! sent back to a gap, every further answer routes to the next remaining gap
//! instead of simply moving forward.

use std::time::{Duration, Instant};

use stress_survey_types::{
    AnswerMap, AnswerValue, ChoiceOption, Direction, Question, SurveyDefinition, SurveyError,
};
use tracing::{debug, info};

use crate::config::{Config, EditPolicy};
use crate::navigation::find_next_unanswered;
use crate::scoring::{self, ItemScoring, Score};
use crate::settle::SettleSlot;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyState {
    Answering,
    Complete(Score),
}

/// What the engine did after recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterAnswer {
    /// Every question is answered; the view stays put.
    Completed,
    /// A move to `target` is parked until the settle delay passes.
    Advancing { target: usize, direction: Direction },
    /// Nothing to move to (the last question in sequential mode).
    Stay,
}

/// Result of a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All questions answered; the caller may follow `link`.
    Proceed { link: String },
    /// The caller must not follow the link. The engine has moved to the gap.
    Blocked { first_unanswered: usize },
}

#[derive(Debug, Clone)]
pub struct SurveyEngine {
    definition: SurveyDefinition,
    scoring: Vec<ItemScoring>,
    edit_policy: EditPolicy,
    counseling_url: String,

    answers: AnswerMap,
    current_index: usize,
    direction: Direction,
    skip_mode: bool,
    score: Option<Score>,
    settle: SettleSlot,

    progress_visible: bool,
    last_question_answered: bool,
}

impl SurveyEngine {
    /// Start a session for `definition`.
    ///
    /// `scoring` must have exactly one entry per question.
    pub fn new(
        definition: SurveyDefinition,
        scoring: Vec<ItemScoring>,
        config: &Config,
    ) -> Result<Self, SurveyError> {
        if definition.is_empty() {
            return Err(SurveyError::InvalidDefinition(
                "survey has no questions".to_string(),
            ));
        }
        if scoring.len() != definition.len() {
            return Err(SurveyError::InvalidDefinition(format!(
                "scoring table has {} entries for {} questions",
                scoring.len(),
                definition.len()
            )));
        }
        Ok(Self::from_parts(definition, scoring, config))
    }

    pub(crate) fn from_parts(
        definition: SurveyDefinition,
        scoring: Vec<ItemScoring>,
        config: &Config,
    ) -> Self {
        let answers = AnswerMap::new(definition.len());
        Self {
            definition,
            scoring,
            edit_policy: config.engine.edit_policy,
            counseling_url: config.submit.counseling_url.clone(),
            answers,
            current_index: 0,
            direction: Direction::Forward,
            skip_mode: false,
            score: None,
            settle: SettleSlot::new(config.engine.settle_delay()),
            progress_visible: false,
            last_question_answered: false,
        }
    }

    // === Operations ===

    /// Record `value` as the answer to question `index`.
    pub fn select_answer(
        &mut self,
        index: usize,
        value: AnswerValue,
    ) -> Result<AfterAnswer, SurveyError> {
        self.select_answer_at(index, value, Instant::now())
    }

    /// Like [`select_answer`](Self::select_answer), with an explicit clock
    /// reading for the settle delay.
    pub fn select_answer_at(
        &mut self,
        index: usize,
        value: AnswerValue,
        now: Instant,
    ) -> Result<AfterAnswer, SurveyError> {
        let total = self.total();
        if index >= total {
            return Err(SurveyError::QuestionOutOfRange { index, total });
        }
        if self.score.is_some() && self.edit_policy == EditPolicy::Locked {
            return Err(SurveyError::ScoreLocked);
        }

        self.progress_visible = true;
        let previous = self.answers.insert(index, value)?;
        debug!(index, value = %value, "Answer recorded");

        if self.score.is_some() && previous != Some(value) {
            self.score = None;
            info!(index, "Answer changed after scoring, score cleared");
        }
        if index == total - 1 {
            self.last_question_answered = true;
        }

        if self.answers.is_complete() {
            self.skip_mode = false;
            return Ok(AfterAnswer::Completed);
        }

        let target = if self.skip_mode {
            find_next_unanswered(index + 1, &self.answers)
        } else if index + 1 < total {
            Some(index + 1)
        } else {
            None
        };

        match target {
            Some(target) => {
                let direction = if self.skip_mode {
                    Direction::between(self.current_index, target)
                } else {
                    Direction::Forward
                };
                self.direction = direction;
                self.settle.schedule(target, now);
                debug!(to = target, skip_mode = self.skip_mode, "Advance scheduled");
                Ok(AfterAnswer::Advancing { target, direction })
            }
            None => Ok(AfterAnswer::Stay),
        }
    }

    /// Apply the parked move if its settle delay has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        let target = self.settle.poll(now)?;
        self.current_index = target;
        Some(target)
    }

    /// Apply the parked move immediately.
    pub fn settle(&mut self) -> Option<usize> {
        let target = self.settle.take()?;
        self.current_index = target;
        Some(target)
    }

    /// Move to the next question. No-op on the last one.
    pub fn next_question(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.settle.cancel();
        self.direction = Direction::Forward;
        self.current_index += 1;
        true
    }

    /// Move to the previous question. No-op on the first one.
    pub fn previous_question(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.settle.cancel();
        self.direction = Direction::Backward;
        self.current_index -= 1;
        true
    }

    /// Compute the score from the collected answers.
    ///
    /// With questions still open this refuses, enters skip mode, moves to the
    /// earliest gap and returns [`SurveyError::Incomplete`].
    pub fn compute_score(&mut self) -> Result<Score, SurveyError> {
        if let Some(first_unanswered) = self.redirect_to_first_gap() {
            info!(first_unanswered, "Score requested before every question was answered");
            return Err(SurveyError::Incomplete { first_unanswered });
        }

        let score = scoring::total(&self.answers, &self.scoring).ok_or_else(|| {
            SurveyError::InvalidDefinition("scoring table does not cover every question".into())
        })?;
        self.score = Some(score);
        info!(score = score.value(), "Score computed");
        Ok(score)
    }

    /// Gate the outbound action tied to submission.
    pub fn request_submit(&mut self) -> SubmitOutcome {
        match self.redirect_to_first_gap() {
            Some(first_unanswered) => {
                info!(first_unanswered, "Submit blocked");
                SubmitOutcome::Blocked { first_unanswered }
            }
            None => SubmitOutcome::Proceed {
                link: self.counseling_url.clone(),
            },
        }
    }

    fn redirect_to_first_gap(&mut self) -> Option<usize> {
        let gap = find_next_unanswered(0, &self.answers)?;
        self.settle.cancel();
        self.skip_mode = true;
        self.direction = Direction::between(self.current_index, gap);
        self.current_index = gap;
        Some(gap)
    }

    // === Queries ===

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    /// Prompt text for question `index`.
    pub fn question_text(&self, index: usize) -> Option<&str> {
        self.definition.question(index).map(Question::ask)
    }

    /// The question currently on screen.
    pub fn current_question(&self) -> &Question {
        &self.definition.questions()[self.current_index]
    }

    /// The shared answer scale.
    pub fn options(&self) -> &[ChoiceOption] {
        self.definition.options()
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// The answer recorded for question `index`.
    pub fn selected(&self, index: usize) -> Option<AnswerValue> {
        self.answers.get(index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn total(&self) -> usize {
        self.definition.len()
    }

    pub fn is_all_answered(&self) -> bool {
        self.answers.is_complete()
    }

    /// Percentage of questions answered (`0.0..=100.0`).
    pub fn progress(&self) -> f64 {
        self.answered_count() as f64 / self.total() as f64 * 100.0
    }

    /// [`progress`](Self::progress) rounded for display.
    pub fn progress_percent(&self) -> u8 {
        self.progress().round() as u8
    }

    /// The progress bar appears once the user has picked any answer.
    pub fn is_progress_visible(&self) -> bool {
        self.progress_visible
    }

    /// The result panel appears once the final question has an answer.
    pub fn is_last_question_answered(&self) -> bool {
        self.last_question_answered
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.total()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_skip_mode(&self) -> bool {
        self.skip_mode
    }

    /// Target of the parked move, if one is waiting on the settle delay.
    pub fn pending_target(&self) -> Option<usize> {
        self.settle.pending()
    }

    /// Pause between an answer and the move it triggers.
    pub fn settle_delay(&self) -> Duration {
        self.settle.delay()
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn state(&self) -> SurveyState {
        match self.score {
            Some(score) => SurveyState::Complete(score),
            None => SurveyState::Answering,
        }
    }

    pub fn edit_policy(&self) -> EditPolicy {
        self.edit_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small(config: &Config) -> SurveyEngine {
        let definition = SurveyDefinition::new(
            "Small",
            ["a?", "b?", "c?", "d?"],
            AnswerValue::ALL
                .iter()
                .map(|value| ChoiceOption::new(*value, value.as_str()))
                .collect(),
        );
        let scoring = vec![
            ItemScoring::Forward,
            ItemScoring::Reverse,
            ItemScoring::Forward,
            ItemScoring::Reverse,
        ];
        SurveyEngine::new(definition, scoring, config).unwrap()
    }

    #[test]
    fn rejects_mismatched_scoring_table() {
        let definition = SurveyDefinition::new("x", ["a?", "b?"], Vec::new());
        let err =
            SurveyEngine::new(definition, vec![ItemScoring::Forward], &Config::default())
                .unwrap_err();
        assert!(matches!(err, SurveyError::InvalidDefinition(_)));
    }

    #[test]
    fn rejects_empty_survey() {
        let definition = SurveyDefinition::new("x", Vec::<String>::new(), Vec::new());
        assert!(SurveyEngine::new(definition, Vec::new(), &Config::default()).is_err());
    }

    #[test]
    fn sequential_answer_parks_forward_move() {
        let mut engine = small(&Config::default());
        let outcome = engine.select_answer(0, AnswerValue::Sometimes).unwrap();

        assert_eq!(
            outcome,
            AfterAnswer::Advancing {
                target: 1,
                direction: Direction::Forward
            }
        );
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.settle(), Some(1));
        assert_eq!(engine.current_index(), 1);
        assert!(engine.is_progress_visible());
    }

    #[test]
    fn poll_respects_settle_delay() {
        let mut engine = small(&Config::default());
        let start = Instant::now();
        engine
            .select_answer_at(0, AnswerValue::Never, start)
            .unwrap();

        assert_eq!(engine.poll(start), None);
        assert_eq!(engine.current_index(), 0);
        let later = start + engine.settle_delay();
        assert_eq!(engine.poll(later), Some(1));
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn manual_navigation_cancels_parked_move() {
        let mut engine = small(&Config::default());
        engine.select_answer(0, AnswerValue::Never).unwrap();
        assert!(engine.next_question());

        assert_eq!(engine.pending_target(), None);
        assert_eq!(engine.settle(), None);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn navigation_clamps_at_boundaries() {
        let mut engine = small(&Config::default());
        assert!(!engine.previous_question());
        assert_eq!(engine.current_index(), 0);

        for _ in 0..10 {
            engine.next_question();
        }
        assert_eq!(engine.current_index(), 3);
        assert!(!engine.has_next());
        assert_eq!(engine.direction(), Direction::Forward);

        assert!(engine.previous_question());
        assert_eq!(engine.direction(), Direction::Backward);
        assert_eq!(engine.current_index(), 2);
    }

    #[test]
    fn last_question_in_sequence_stays() {
        let mut engine = small(&Config::default());
        engine.next_question();
        engine.next_question();
        engine.next_question();

        assert_eq!(
            engine.select_answer(3, AnswerValue::Never).unwrap(),
            AfterAnswer::Stay
        );
        assert!(engine.is_last_question_answered());
        assert!(!engine.is_skip_mode());
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let mut engine = small(&Config::default());
        let err = engine.select_answer(4, AnswerValue::Never).unwrap_err();
        assert!(matches!(
            err,
            SurveyError::QuestionOutOfRange { index: 4, total: 4 }
        ));
        assert_eq!(engine.answered_count(), 0);
        assert!(!engine.is_progress_visible());
    }

    fn answer_all(engine: &mut SurveyEngine, value: AnswerValue) {
        for index in 0..engine.total() {
            engine.select_answer(index, value).unwrap();
            engine.settle();
        }
    }

    #[test]
    fn changed_answer_invalidates_score() {
        let mut engine = small(&Config::default());
        answer_all(&mut engine, AnswerValue::Never);
        let score = engine.compute_score().unwrap();
        assert_eq!(engine.state(), SurveyState::Complete(score));

        // same value keeps the score
        engine.select_answer(2, AnswerValue::Never).unwrap();
        assert_eq!(engine.score(), Some(score));

        engine.select_answer(2, AnswerValue::Often).unwrap();
        assert_eq!(engine.score(), None);
        assert_eq!(engine.state(), SurveyState::Answering);
    }

    #[test]
    fn locked_policy_rejects_edits_after_scoring() {
        let mut config = Config::default();
        config.engine.edit_policy = EditPolicy::Locked;
        let mut engine = small(&config);
        answer_all(&mut engine, AnswerValue::Often);
        let score = engine.compute_score().unwrap();

        let err = engine.select_answer(0, AnswerValue::Never).unwrap_err();
        assert!(matches!(err, SurveyError::ScoreLocked));
        assert_eq!(engine.score(), Some(score));
        assert_eq!(engine.selected(0), Some(AnswerValue::Often));
    }

    #[test]
    fn submit_proceeds_with_configured_link() {
        let mut config = Config::default();
        config.submit.counseling_url = "https://example.org/help".to_string();
        let mut engine = small(&config);
        answer_all(&mut engine, AnswerValue::Sometimes);

        assert_eq!(
            engine.request_submit(),
            SubmitOutcome::Proceed {
                link: "https://example.org/help".to_string()
            }
        );
        assert!(!engine.is_skip_mode());
    }
}
