use std::fmt;
use std::str::FromStr;

use crate::SurveyError;

/// A single answer on the four-point frequency scale.
///
/// The scale is identical for every question. Raw values are `0..=3`; their
/// wire form is the decimal string (`"0"` to `"3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnswerValue {
    /// 전혀 없었다
    Never = 0,
    /// 거의 없었다
    AlmostNever = 1,
    /// 때때로 있었다
    Sometimes = 2,
    /// 자주 있었다
    Often = 3,
}

impl AnswerValue {
    /// All options in display order.
    pub const ALL: [AnswerValue; 4] = [
        Self::Never,
        Self::AlmostNever,
        Self::Sometimes,
        Self::Often,
    ];

    /// The highest raw value on the scale.
    pub const MAX_RAW: u8 = 3;

    /// The raw value (`0..=3`).
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// The wire form of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Never => "0",
            Self::AlmostNever => "1",
            Self::Sometimes => "2",
            Self::Often => "3",
        }
    }

    /// Build from a raw value, if it is on the scale.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(usize::from(raw)).copied()
    }
}

impl FromStr for AnswerValue {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| SurveyError::InvalidOption(s.to_string()))
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = SurveyError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or_else(|| SurveyError::InvalidOption(raw.to_string()))
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_values() {
        assert_eq!("0".parse::<AnswerValue>().unwrap(), AnswerValue::Never);
        assert_eq!("3".parse::<AnswerValue>().unwrap(), AnswerValue::Often);
    }

    #[test]
    fn rejects_values_off_the_scale() {
        for bad in ["4", "-1", "", " 1", "often"] {
            let err = bad.parse::<AnswerValue>().unwrap_err();
            assert!(matches!(err, SurveyError::InvalidOption(ref s) if s == bad));
        }
        assert!(AnswerValue::try_from(4).is_err());
    }

    #[test]
    fn raw_matches_position() {
        for (i, value) in AnswerValue::ALL.iter().enumerate() {
            assert_eq!(usize::from(value.raw()), i);
            assert_eq!(AnswerValue::from_raw(value.raw()), Some(*value));
        }
    }
}
