//! Pythagorean square (psychomatrix).
//!
//! Four working numbers are derived from the written birth date:
//! 1. sum of all date digits
//! 2. digit sum of (1)
//! 3. (1) minus twice the leading non-zero digit of the day
//! 4. digit sum of |(3)|
//!
//! The square counts how often each digit 1..=9 occurs across the date and
//! the working numbers. Zeros are not counted.

use ank_math::{digit_sum, digits, leading_nonzero_digit};
use serde::Serialize;

use crate::date::{CalendarDate, parse_or_log};

/// Working numbers and digit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PythagoreanSquare {
    pub working: [i64; 4],
    /// `counts[d - 1]` is the number of occurrences of digit `d`.
    pub counts: [u8; 9],
}

impl PythagoreanSquare {
    pub fn from_date(date: CalendarDate) -> Self {
        let date_digits = date.written_digits();
        let first: u64 = date_digits.iter().map(|&d| u64::from(d)).sum();
        let second = digit_sum(first);
        let lead = leading_nonzero_digit(u64::from(date.day)).unwrap_or(0);
        let third = first as i64 - 2 * i64::from(lead);
        let fourth = digit_sum(third.unsigned_abs());
        let working = [first as i64, second as i64, third, fourth as i64];

        let mut counts = [0u8; 9];
        let all = date_digits
            .into_iter()
            .chain(working.iter().flat_map(|w| digits(w.unsigned_abs())));
        for d in all.filter(|&d| d != 0) {
            counts[usize::from(d - 1)] += 1;
        }
        Self { working, counts }
    }

    /// Occurrences of digit `d` (1..=9); 0 for anything else.
    pub fn count(&self, d: u8) -> u8 {
        match d {
            1..=9 => self.counts[usize::from(d - 1)],
            _ => 0,
        }
    }

    /// Cell text: the digit repeated, or `—` when absent.
    pub fn cell(&self, d: u8) -> String {
        match self.count(d) {
            0 => "—".to_string(),
            n => d.to_string().repeat(usize::from(n)),
        }
    }

    /// Cells in the traditional layout: columns 1-2-3, 4-5-6, 7-8-9.
    pub fn grid(&self) -> [[String; 3]; 3] {
        [1u8, 2, 3].map(|r| [r, r + 3, r + 6].map(|d| self.cell(d)))
    }
}

/// Pythagorean square for a birth date string; `None` if it does not parse.
pub fn pythagorean_square(birth_date: &str) -> Option<PythagoreanSquare> {
    parse_or_log(birth_date, "pythagorean_square").map(PythagoreanSquare::from_date)
}
