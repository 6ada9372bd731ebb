use std::collections::BTreeMap;

use crate::{AnswerValue, SurveyError};

/// Answers collected so far, keyed by question index.
///
/// Keys only appear through an explicit answer; there are no defaults. An
/// answer may be overwritten but never removed, so the map only grows until
/// every index in `0..total` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerMap {
    total: usize,
    values: BTreeMap<usize, AnswerValue>,
}

impl AnswerMap {
    /// Create an empty map for a survey with `total` questions.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            values: BTreeMap::new(),
        }
    }

    /// Record an answer, returning the value it replaced.
    pub fn insert(
        &mut self,
        index: usize,
        value: AnswerValue,
    ) -> Result<Option<AnswerValue>, SurveyError> {
        if index >= self.total {
            return Err(SurveyError::QuestionOutOfRange {
                index,
                total: self.total,
            });
        }
        Ok(self.values.insert(index, value))
    }

    /// Get the answer for a question.
    pub fn get(&self, index: usize) -> Option<AnswerValue> {
        self.values.get(&index).copied()
    }

    /// Check if a question has been answered.
    pub fn contains(&self, index: usize) -> bool {
        self.values.contains_key(&index)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of questions this map covers.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.values.len() == self.total
    }

    /// Indices that have no answer yet, in order.
    pub fn unanswered(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.total).filter(|index| !self.values.contains_key(index))
    }
}
