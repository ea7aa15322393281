//! Behavior fractal: a four-digit code summarising a birth date.
//!
//! Each of day, month, year and their sum is reduced to a single digit
//! independently, without master numbers.

use ank_math::reduce_to_single_digit;
use serde::Serialize;

use crate::date::{CalendarDate, parse_or_log};

/// Four independently reduced digits and their concatenated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BehaviorFractal {
    pub digit1: u8,
    pub digit2: u8,
    pub digit3: u8,
    pub digit4: u8,
    /// `digit1..digit4` concatenated, e.g. `"6311"`.
    pub fractal: String,
}

impl BehaviorFractal {
    pub fn from_date(date: CalendarDate) -> Self {
        let digit1 = reduce_to_single_digit(i64::from(date.day));
        let digit2 = reduce_to_single_digit(i64::from(date.month));
        let digit3 = reduce_to_single_digit(i64::from(date.year));
        let digit4 = reduce_to_single_digit(date.field_sum());
        Self {
            digit1,
            digit2,
            digit3,
            digit4,
            fractal: format!("{digit1}{digit2}{digit3}{digit4}"),
        }
    }

    pub const fn digits(&self) -> [u8; 4] {
        [self.digit1, self.digit2, self.digit3, self.digit4]
    }
}

/// Behavior fractal for a birth date string; `None` if it does not parse.
pub fn behavior_fractal(birth_date: &str) -> Option<BehaviorFractal> {
    parse_or_log(birth_date, "behavior_fractal").map(BehaviorFractal::from_date)
}
