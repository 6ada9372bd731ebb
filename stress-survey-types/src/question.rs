use crate::AnswerValue;

/// A single prompt in a survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Position of this question (0-based).
    index: usize,

    /// The prompt text shown to the user.
    ask: String,
}

impl Question {
    /// Create a new question.
    pub fn new(index: usize, ask: impl Into<String>) -> Self {
        Self {
            index,
            ask: ask.into(),
        }
    }

    /// Get the question index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the prompt text.
    pub fn ask(&self) -> &str {
        &self.ask
    }
}

/// One entry of the answer scale as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: AnswerValue,
    pub label: String,
}

impl ChoiceOption {
    /// Create a new option.
    pub fn new(value: AnswerValue, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}
