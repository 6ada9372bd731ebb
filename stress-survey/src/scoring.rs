//! Item weighting and score totals.

use std::fmt;

use stress_survey_types::{AnswerMap, AnswerValue};

/// How a single item's raw answer contributes to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemScoring {
    /// Contribution is `raw + 1` (1..=4).
    Forward,
    /// Contribution is `4 - raw` (4..=1). Used for positively worded items,
    /// where a frequent answer means less stress.
    Reverse,
}

/// Points one answer contributes under the given weighting.
pub fn contribution(scoring: ItemScoring, value: AnswerValue) -> u16 {
    let raw = u16::from(value.raw());
    let top = u16::from(AnswerValue::MAX_RAW) + 1;
    match scoring {
        ItemScoring::Forward => raw + 1,
        ItemScoring::Reverse => top - raw,
    }
}

/// A computed survey total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u16);

impl Score {
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sum every item in `table`, keyed by question index.
///
/// Returns `None` if any question covered by the table is unanswered.
pub fn total(answers: &AnswerMap, table: &[ItemScoring]) -> Option<Score> {
    table
        .iter()
        .enumerate()
        .try_fold(0u16, |sum, (index, scoring)| {
            answers
                .get(index)
                .map(|value| sum + contribution(*scoring, value))
        })
        .map(Score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn forward_items_add_one() {
        assert_eq!(contribution(ItemScoring::Forward, AnswerValue::Never), 1);
        assert_eq!(contribution(ItemScoring::Forward, AnswerValue::Often), 4);
    }

    #[test]
    fn reverse_items_invert() {
        assert_eq!(contribution(ItemScoring::Reverse, AnswerValue::Never), 4);
        assert_eq!(contribution(ItemScoring::Reverse, AnswerValue::AlmostNever), 3);
        assert_eq!(contribution(ItemScoring::Reverse, AnswerValue::Often), 1);
    }

    #[test]
    fn total_requires_every_item() {
        let table = [ItemScoring::Forward, ItemScoring::Reverse];
        let mut answers = AnswerMap::new(2);
        answers.insert(0, AnswerValue::Sometimes).unwrap();
        assert_eq!(total(&answers, &table), None);

        answers.insert(1, AnswerValue::Sometimes).unwrap();
        assert_eq!(total(&answers, &table), Some(Score::new(3 + 2)));
    }
}
