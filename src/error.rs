use std::fmt::{self, Display, Formatter};

/// Position of an operand in a two argument call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Position {
    First,
    Second,
}

impl Display for Position {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let text = match self {
            Position::First => "first",
            Position::Second => "second",
        };

        write!(fmt, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// an operand is not a sequence of unicode code points
    #[error("{position} argument is not text (found {found})")]
    InvalidArgumentType {
        position: Position,
        found: &'static str,
    },

    /// the operands of an equal length metric differ in length
    #[error("sequences of different length provided ({len1} and {len2})")]
    LengthMismatch { len1: usize, len2: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
