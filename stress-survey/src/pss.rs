//! The Korean Perceived Stress Scale (PSS-10).
//!
//! Prompts, answer labels and the item weighting are fixed instrument data.
//! The forward/reverse split is part of the validated scale and must not be
//! changed or computed.

use stress_survey_types::{AnswerValue, ChoiceOption, SurveyDefinition};

use crate::config::Config;
use crate::engine::SurveyEngine;
use crate::scoring::ItemScoring;

pub const TITLE: &str = "한국판 지각된 스트레스 척도";
pub const SUBTITLE: &str = "(Perceived Stress Scale, PSS)";
pub const INTERPRETATION: &str = "점수가 높을수록 지각된 스트레스가 높음을 의미합니다.";

pub const QUESTIONS: [&str; 10] = [
    "예상치 못한 일이 생겨서 기분 나빠진 적이 얼마나 있었나요?",
    "중요한 일들을 통제할 수 없다고 느낀 적은 얼마나 있었나요?",
    "어려운 일이 너무 많이 쌓여서 극복할 수 없다고 느낀 적이 얼마나 있었나요?",
    "당신이 통제할 수 없는 범위에서 발생한 일 때문에 화가 난 적이 얼마나 있었나요?",
    "매사를 잘 컨트롤하고 있다고 느낀 적이 얼마나 있었나요?",
    "자신의 뜻대로 일이 진행된다고 느낀 적이 얼마나 있었나요?",
    "개인적인 문제를 처리하는 능력에 대해 자신감을 느낀적은 얼마나 있었나요?",
    "생활 속에서 일어난 중요한 변화들을 효과적으로 대처한 적이 얼마나 있었나요?",
    "짜증나고 성가신 일들을 성공적으로 처리한 적이 얼마나 있었나요?",
    "초조하거나 스트레스가 쌓인다고 느낀적이 얼마나 있었나요?",
];

pub const OPTION_LABELS: [(AnswerValue, &str); 4] = [
    (AnswerValue::Never, "전혀 없었다"),
    (AnswerValue::AlmostNever, "거의 없었다"),
    (AnswerValue::Sometimes, "때때로 있었다"),
    (AnswerValue::Often, "자주 있었다"),
];

/// Item weighting by question index. Items 4-8 are positively worded and
/// reverse-scored.
pub const SCORING: [ItemScoring; 10] = [
    ItemScoring::Forward,
    ItemScoring::Forward,
    ItemScoring::Forward,
    ItemScoring::Forward,
    ItemScoring::Reverse,
    ItemScoring::Reverse,
    ItemScoring::Reverse,
    ItemScoring::Reverse,
    ItemScoring::Reverse,
    ItemScoring::Forward,
];

pub const MIN_SCORE: u16 = 10;
pub const MAX_SCORE: u16 = 40;

pub fn options() -> Vec<ChoiceOption> {
    OPTION_LABELS
        .iter()
        .map(|(value, label)| ChoiceOption::new(*value, *label))
        .collect()
}

pub fn definition() -> SurveyDefinition {
    SurveyDefinition::new(TITLE, QUESTIONS, options())
        .with_subtitle(SUBTITLE)
        .with_epilogue(INTERPRETATION)
}

/// A fresh PSS session.
pub fn engine(config: &Config) -> SurveyEngine {
    SurveyEngine::from_parts(definition(), SCORING.to_vec(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_question() {
        assert_eq!(SCORING.len(), QUESTIONS.len());
        let reversed: Vec<usize> = SCORING
            .iter()
            .enumerate()
            .filter(|(_, scoring)| **scoring == ItemScoring::Reverse)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(reversed, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn definition_metadata() {
        let definition = definition();
        assert_eq!(definition.len(), 10);
        assert_eq!(definition.options().len(), 4);
        assert_eq!(definition.options()[2].label, "때때로 있었다");
        assert_eq!(definition.title, TITLE);
        assert_eq!(definition.epilogue.as_deref(), Some(INTERPRETATION));
    }
}
