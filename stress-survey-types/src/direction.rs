/// Which way the question view slides when the current index changes.
///
/// Only a transition hint for the presentation layer; it never affects scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a move from `from` to `to`.
    ///
    /// Moving to the same or a lower index counts as backward.
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}
