//! Birth-date parsing.
//!
//! Two textual forms are accepted:
//! - `DD.MM.YYYY`
//! - `YYYY-MM-DD`, optionally followed by a `T...` time part which is dropped
//!
//! Parsing is lenient by default: `31.02.1990` yields day 31, month 2. Use
//! [`DateParsing::Strict`] to reject dates absent from the Gregorian calendar.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::Serialize;

use crate::error::AnkError;

/// A calendar date as written, without validity guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Whether the date exists in the proleptic Gregorian calendar.
    pub fn is_valid_gregorian(&self) -> bool {
        self.to_naive_date().is_some()
    }

    /// Convert to a `chrono` date, if valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// `day + month + year`.
    pub fn field_sum(&self) -> i64 {
        i64::from(self.day) + i64::from(self.month) + i64::from(self.year)
    }

    /// Digits of day, month and year as written (`15.03.1990` → `1 5 3 1 9 9 0`).
    ///
    /// Leading zeros of day and month are not included; they never affect a
    /// digit sum or a digit count.
    pub fn written_digits(&self) -> Vec<u8> {
        let mut out = ank_math::digits(u64::from(self.day));
        out.extend(ank_math::digits(u64::from(self.month)));
        out.extend(ank_math::digits(u64::from(self.year.unsigned_abs())));
        out
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self::new(d.day(), d.month(), d.year())
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// Calendar checking applied after the textual parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateParsing {
    /// Accept any numeric day and month.
    #[default]
    Lenient,
    /// Reject dates that do not exist (`31.02.1990`, month 13, day 0).
    Strict,
}

/// Parse a birth date in `DD.MM.YYYY` or `YYYY-MM-DD[T...]` form, leniently.
pub fn parse_birth_date(input: &str) -> Result<CalendarDate, AnkError> {
    parse_birth_date_with(input, DateParsing::Lenient)
}

/// Parse a birth date with an explicit calendar-checking mode.
pub fn parse_birth_date_with(input: &str, mode: DateParsing) -> Result<CalendarDate, AnkError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AnkError::EmptyInput);
    }

    // The time part may itself contain '.' (fractional seconds).
    let s = s.split_once('T').map_or(s, |(d, _)| d);
    let date = if s.contains('.') {
        let [day, month, year] = split3(s, '.')?;
        CalendarDate::new(
            field(day, "day")?,
            field(month, "month")?,
            field(year, "year")?,
        )
    } else if s.contains('-') {
        let [year, month, day] = split3(s, '-')?;
        CalendarDate::new(
            field(day, "day")?,
            field(month, "month")?,
            field(year, "year")?,
        )
    } else {
        return Err(AnkError::UnrecognizedDateFormat(s.to_string()));
    };

    if mode == DateParsing::Strict && !date.is_valid_gregorian() {
        return Err(AnkError::InvalidCalendarDate {
            day: date.day,
            month: date.month,
            year: date.year,
        });
    }
    Ok(date)
}

fn split3(s: &str, sep: char) -> Result<[&str; 3], AnkError> {
    let parts: Vec<&str> = s.split(sep).collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(AnkError::UnrecognizedDateFormat(s.to_string())),
    }
}

fn field<T: FromStr>(s: &str, name: &'static str) -> Result<T, AnkError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnkError::NonNumericField(name));
    }
    s.parse().map_err(|_| AnkError::NonNumericField(name))
}

/// Lenient parse for fail-soft operations; logs the rejection reason.
pub(crate) fn parse_or_log(input: &str, op: &str) -> Option<CalendarDate> {
    match parse_birth_date(input) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!("{op}: birth date {input:?} rejected: {e}");
            None
        }
    }
}
