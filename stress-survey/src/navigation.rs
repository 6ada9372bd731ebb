use stress_survey_types::AnswerMap;

/// Find the first unanswered question at or after `start`, wrapping around.
///
/// The scan visits `start..total` and then `0..start`, so the result is the
/// nearest remaining gap in forward order. A `start` past the end wraps to
/// the first question. Returns `None` once every question is answered.
pub fn find_next_unanswered(start: usize, answers: &AnswerMap) -> Option<usize> {
    let total = answers.total();
    if total == 0 {
        return None;
    }
    let start = start % total;
    (0..total)
        .map(|offset| (start + offset) % total)
        .find(|index| !answers.contains(*index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stress_survey_types::AnswerValue;

    fn answered(total: usize, indices: &[usize]) -> AnswerMap {
        let mut answers = AnswerMap::new(total);
        for &index in indices {
            answers.insert(index, AnswerValue::AlmostNever).unwrap();
        }
        answers
    }

    #[test]
    fn first_gap_at_or_after_start() {
        let answers = answered(10, &[0, 1, 2]);
        assert_eq!(find_next_unanswered(5, &answers), Some(5));
        assert_eq!(find_next_unanswered(0, &answers), Some(3));
    }

    #[test]
    fn wraps_around_to_earlier_gap() {
        let answers = answered(10, &[0, 1, 2, 4, 5, 6, 7, 8, 9]);
        assert_eq!(find_next_unanswered(8, &answers), Some(3));
    }

    #[test]
    fn start_is_inclusive() {
        let answers = answered(4, &[1, 2]);
        assert_eq!(find_next_unanswered(3, &answers), Some(3));
    }

    #[test]
    fn start_past_end_wraps_to_zero() {
        let answers = answered(4, &[1, 3]);
        assert_eq!(find_next_unanswered(4, &answers), Some(0));
    }

    #[test]
    fn none_when_complete() {
        let answers = answered(3, &[0, 1, 2]);
        assert_eq!(find_next_unanswered(1, &answers), None);
        assert_eq!(find_next_unanswered(0, &AnswerMap::new(0)), None);
    }
}
