//! Individual year, month and day numbers (ЧИГ / ЧИМ / ЧИД) and their
//! "problem" counterparts (ЧПГ / ЧПМ / ЧПД), relative to a target date.
//!
//! Every value is returned with a trace string showing operands, the
//! intermediate result and the reduced value, e.g. `15 + 3 + 2025 = 2043 → 9`.

use std::fmt::{Display, Formatter};

use ank_math::{reduce_difference, reduce_to_single_digit};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::date::{CalendarDate, parse_or_log};

/// A reduced value with the arithmetic that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traced {
    pub value: u8,
    pub trace: String,
}

impl Traced {
    /// `a + b + ... = sum → value`.
    fn sum(operands: &[i64]) -> Self {
        let total: i64 = operands.iter().sum();
        let value = reduce_to_single_digit(total);
        let lhs = operands
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        Self {
            value,
            trace: format!("{lhs} = {total} → {value}"),
        }
    }

    /// `|a - b| = diff → value`.
    fn difference(a: i64, b: i64) -> Self {
        let value = reduce_difference(a, b);
        Self {
            value,
            trace: format!("|{a} - {b}| = {} → {value}", a.abs_diff(b)),
        }
    }
}

impl Display for Traced {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.trace)
    }
}

/// Individual numbers for one birth date at one target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualNumbers {
    pub target_date: CalendarDate,
    pub destiny_number: i64,
    /// Individual year number (ЧИГ).
    pub chig: Traced,
    /// Individual month number (ЧИМ).
    pub chim: Traced,
    /// Individual day number (ЧИД).
    pub chid: Traced,
    /// Year problem number (ЧПГ).
    pub chpg: Traced,
    /// Month problem number (ЧПМ).
    pub chpm: Traced,
    /// Day problem number (ЧПД).
    pub chpd: Traced,
}

impl IndividualNumbers {
    /// Compute for a parsed birth date. `destiny` defaults to the reduced
    /// `day + month + year` of birth.
    pub fn compute(birth: CalendarDate, target: CalendarDate, destiny: Option<i64>) -> Self {
        let destiny_number =
            destiny.unwrap_or_else(|| i64::from(reduce_to_single_digit(birth.field_sum())));
        let birth_day = i64::from(birth.day);
        let birth_month = i64::from(birth.month);

        let chig = Traced::sum(&[birth_day, birth_month, i64::from(target.year)]);
        let chim = Traced::sum(&[i64::from(chig.value), i64::from(target.month)]);
        let chid = Traced::sum(&[i64::from(chim.value), i64::from(target.day)]);

        let chpg = Traced::difference(i64::from(chig.value), destiny_number);
        let chpm = Traced::difference(birth_month, i64::from(chim.value));
        let chpd = Traced::difference(birth_day, i64::from(chid.value));

        Self {
            target_date: target,
            destiny_number,
            chig,
            chim,
            chid,
            chpg,
            chpm,
            chpd,
        }
    }
}

/// Individual numbers at an explicit target date.
pub fn individual_numbers_at(
    birth_date: &str,
    target: NaiveDate,
    destiny: Option<i64>,
) -> Option<IndividualNumbers> {
    let birth = parse_or_log(birth_date, "individual_numbers")?;
    Some(IndividualNumbers::compute(birth, target.into(), destiny))
}

/// Individual numbers at `target`, or at today's local date when `None`.
pub fn individual_numbers(
    birth_date: &str,
    target: Option<NaiveDate>,
    destiny: Option<i64>,
) -> Option<IndividualNumbers> {
    let target = target.unwrap_or_else(|| Local::now().date_naive());
    individual_numbers_at(birth_date, target, destiny)
}
