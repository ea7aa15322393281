//! Error types for numerology calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date parsing and name-based calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnkError {
    /// Input was empty after trimming.
    EmptyInput,
    /// Input matched neither `DD.MM.YYYY` nor `YYYY-MM-DD`.
    UnrecognizedDateFormat(String),
    /// A date field was empty, non-numeric or out of integer range.
    NonNumericField(&'static str),
    /// Strict parsing rejected a date that does not exist in the Gregorian calendar.
    InvalidCalendarDate { day: u32, month: u32, year: i32 },
    /// Too few Latin letters for a name triangle.
    InsufficientLetters { found: usize, required: usize },
}

impl Display for AnkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::UnrecognizedDateFormat(s) => {
                write!(f, "unrecognized date format: {s:?} (expected DD.MM.YYYY or YYYY-MM-DD)")
            }
            Self::NonNumericField(field) => write!(f, "non-numeric {field} field"),
            Self::InvalidCalendarDate { day, month, year } => {
                write!(f, "no such calendar date: {day:02}.{month:02}.{year:04}")
            }
            Self::InsufficientLetters { found, required } => write!(
                f,
                "not enough Latin letters: found {found}, need {required}"
            ),
        }
    }
}

impl Error for AnkError {}
