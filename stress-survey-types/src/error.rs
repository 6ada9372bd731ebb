/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// A score was requested before every question was answered.
    ///
    /// Not a fault: the engine has already moved to `first_unanswered`.
    #[error("Every question must be answered (question index {first_unanswered} is still open)")]
    Incomplete { first_unanswered: usize },

    /// The question index does not exist in this survey.
    #[error("Question index {index} is out of range (survey has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },

    /// The survey definition cannot drive an engine (no questions, or a
    /// scoring table that does not cover every question).
    #[error("Invalid survey definition: {0}")]
    InvalidDefinition(String),

    /// A raw answer outside the fixed option enumeration.
    #[error("Invalid answer option: {0:?}")]
    InvalidOption(String),

    /// Answers are frozen once the score has been computed.
    #[error("Answers cannot be changed after the score has been computed")]
    ScoreLocked,
}

impl SurveyError {
    /// Check if this error is the recoverable "not yet complete" branch.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}
