//! Personal numbers derived from a birth date (and optionally a full name).
//!
//! Master-number handling differs per value:
//! - soul, mind, helping mind, full name: 11 / 22 / 33 kept
//! - destiny, year of birth: reduced to a single digit
//! - ruling: 11 / 22 kept, 33 reduced

use ank_math::{reduce_for_ruling, reduce_to_single_digit, reduce_with_master_numbers};
use serde::Serialize;

use crate::date::{CalendarDate, parse_or_log};
use crate::letters::full_name_number;
use crate::task::{TaskNumbers, task_numbers};

/// The personal numbers card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalNumbers {
    /// Reduced birth day.
    pub soul: u8,
    /// Reduced birth month.
    pub mind: u8,
    /// Reduced `day + month`.
    pub helping_mind: u8,
    /// Reduced `day + month + year`.
    pub destiny: u8,
    /// Reduced birth year.
    pub year: u8,
    /// `day + month + year` under the ruling policy.
    pub ruling: u8,
    pub full_name: Option<u8>,
}

impl PersonalNumbers {
    pub fn from_date(date: CalendarDate, full_name: Option<&str>) -> Self {
        let day = u64::from(date.day);
        let month = u64::from(date.month);
        Self {
            soul: reduce_with_master_numbers(day),
            mind: reduce_with_master_numbers(month),
            helping_mind: reduce_with_master_numbers(day + month),
            destiny: reduce_to_single_digit(date.field_sum()),
            year: reduce_to_single_digit(i64::from(date.year)),
            ruling: reduce_for_ruling(date.field_sum()),
            full_name: full_name.and_then(full_name_number),
        }
    }

    /// Task numbers fed from this card.
    pub fn task_numbers(&self) -> Option<TaskNumbers> {
        task_numbers(
            Some(i64::from(self.soul)),
            Some(i64::from(self.mind)),
            Some(i64::from(self.destiny)),
            Some(i64::from(self.year)),
        )
    }
}

/// Personal numbers for a birth date string; `None` if it does not parse.
pub fn personal_numbers(birth_date: &str, full_name: Option<&str>) -> Option<PersonalNumbers> {
    parse_or_log(birth_date, "personal_numbers").map(|d| PersonalNumbers::from_date(d, full_name))
}
