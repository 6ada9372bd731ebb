//! Core types for the stress-survey crate.
//!
//! This crate provides the foundational types for defining a questionnaire:
//! - `SurveyDefinition` - The top-level survey structure
//! - `Question` and `ChoiceOption` - Individual prompts and the shared answer scale
//! - `AnswerValue` and `AnswerMap` - Collected answers keyed by question index
//! - `SurveyError` - The error type shared by the engine and its backends

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::AnswerMap;

mod question;
pub use question::{ChoiceOption, Question};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod error;
pub use error::SurveyError;

mod direction;
pub use direction::Direction;
