use crate::{ChoiceOption, Question};

/// The top-level structure containing all questions and metadata for a survey.
///
/// Presentation-agnostic: it can be rendered as a paged wizard, a terminal
/// prompt loop, or anything else that can show a prompt and a scale.
#[derive(Debug, Clone)]
pub struct SurveyDefinition {
    /// Heading shown above the questions.
    pub title: String,

    /// Optional line shown under the title.
    pub subtitle: Option<String>,

    /// All questions in order. Immutable once the survey starts.
    pub questions: Vec<Question>,

    /// The answer scale, shared by every question.
    pub options: Vec<ChoiceOption>,

    /// Optional message shown next to the computed score.
    pub epilogue: Option<String>,
}

impl SurveyDefinition {
    /// Create a new survey definition from prompts and the shared option scale.
    ///
    /// Question indices follow the order of `prompts`.
    pub fn new<I, S>(title: impl Into<String>, prompts: I, options: Vec<ChoiceOption>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions = prompts
            .into_iter()
            .enumerate()
            .map(|(index, ask)| Question::new(index, ask))
            .collect();

        Self {
            title: title.into(),
            subtitle: None,
            questions,
            options,
            epilogue: None,
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a question by index.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Get the answer scale.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
