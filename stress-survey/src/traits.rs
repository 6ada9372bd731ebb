use crate::engine::SurveyEngine;
use crate::scoring::Score;

/// What a finished session produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The computed score, if the user got that far.
    pub score: Option<Score>,

    /// The outbound link the user was allowed to follow, if any.
    pub submitted_link: Option<String>,
}

/// Trait for backend implementations that present a survey to a user.
///
/// Backends own the input loop: they render the engine's current question,
/// translate user input into engine operations, and let the settle delay
/// play out between an answer and the move it triggers.
pub trait SurveyBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Drive `engine` until the user finishes or leaves.
    ///
    /// # Returns
    /// * `Ok(outcome)` when the session ends normally
    /// * `Err` on cancellation or backend failure
    fn conduct(&self, engine: &mut SurveyEngine) -> Result<SessionOutcome, Self::Error>;
}

impl SurveyEngine {
    /// Run this session through `backend`.
    pub fn run<B: SurveyBackend>(&mut self, backend: B) -> Result<SessionOutcome, anyhow::Error> {
        backend.conduct(self).map_err(Into::into)
    }
}
