//! Shadows, peaks, challenges and transitions over a 100-year life.
//!
//! The table has two parts:
//! - `years`: one personal-year value (ЧЛГ) per age 1..=100
//! - `periods`: consecutive 9-year windows on a grid anchored at
//!   `27 - destiny`, each carrying a peak, a shadow, a challenge and a
//!   transition number
//!
//! Ages before the anchor are folded into the first period, so the periods
//! always partition `1..=100` without gaps. Every reduction here is to a
//! single digit; master numbers are never kept.

use ank_math::{reduce_difference, reduce_to_single_digit};
use log::trace;
use serde::Serialize;

use crate::date::{CalendarDate, parse_or_log};

/// Number of ages in the table.
pub const LIFE_SPAN_YEARS: u32 = 100;

/// Length of a period window in years (inclusive of both ends).
pub const PERIOD_YEARS: u32 = 9;

/// The period grid is anchored at this age minus the destiny number.
pub const PERIOD_ANCHOR_BASE: i64 = 27;

/// Personal-year value at one age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeYear {
    /// 1-based age.
    pub age: u32,
    /// Calendar year reached at this age (`birth year + age`).
    pub year: i64,
    /// Personal-year number (ЧЛГ), 0..=9.
    pub chlg: u8,
}

/// One window of the life-cycle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifePeriod {
    /// 1-based position.
    pub index: u8,
    pub start_age: u32,
    /// Inclusive; never above [`LIFE_SPAN_YEARS`].
    pub end_age: u32,
    pub shadow: u8,
    pub peak: u8,
    /// `None` when no year matches `end_age`.
    pub challenge: Option<u8>,
    pub transition: Option<u8>,
}

impl LifePeriod {
    pub const fn contains_age(&self, age: u32) -> bool {
        self.start_age <= age && age <= self.end_age
    }

    pub const fn span_years(&self) -> u32 {
        self.end_age - self.start_age + 1
    }
}

/// Full 100-year table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeCycleTable {
    pub destiny_number: u8,
    /// Reduced `day + month`.
    pub base_number: u8,
    /// `27 - destiny`: where the 9-year grid starts.
    pub anchor_age: i64,
    pub birth_date: CalendarDate,
    pub years: Vec<LifeYear>,
    pub periods: Vec<LifePeriod>,
    /// All `chlg` values, space-separated, in age order.
    pub sequence: String,
}

impl LifeCycleTable {
    pub fn from_date(date: CalendarDate) -> Self {
        let destiny_number = reduce_to_single_digit(date.field_sum());
        let base_number = reduce_to_single_digit(i64::from(date.day) + i64::from(date.month));
        let day_r = i64::from(reduce_to_single_digit(i64::from(date.day)));
        let month_r = i64::from(reduce_to_single_digit(i64::from(date.month)));
        let year_r = i64::from(reduce_to_single_digit(i64::from(date.year)));

        let years: Vec<LifeYear> = (1..=LIFE_SPAN_YEARS)
            .map(|age| {
                let year = i64::from(date.year) + i64::from(age);
                LifeYear {
                    age,
                    year,
                    chlg: reduce_to_single_digit(day_r + month_r + year),
                }
            })
            .collect();

        let anchor_age = PERIOD_ANCHOR_BASE - i64::from(destiny_number);
        let destiny = i64::from(destiny_number);
        let periods = period_windows(anchor_age)
            .into_iter()
            .enumerate()
            .map(|(i, (start_age, end_age))| {
                let index = (i + 1) as u8;
                let peak = match index {
                    1 => reduce_to_single_digit(day_r + month_r),
                    2 => reduce_to_single_digit(day_r + year_r),
                    3 => reduce_difference(day_r, destiny),
                    _ => reduce_to_single_digit(month_r + year_r),
                };
                let shadow = reduce_to_single_digit(day_r + i64::from(peak));
                let challenge = years
                    .iter()
                    .find(|y| y.age == end_age)
                    .map(|y| reduce_to_single_digit(day_r + i64::from(y.chlg)));
                let transition = challenge.map(|c| {
                    reduce_to_single_digit(i64::from(shadow) + i64::from(peak) + i64::from(c))
                });
                trace!(
                    "life cycle period {index}: ages {start_age}-{end_age} peak={peak} shadow={shadow} challenge={challenge:?}"
                );
                LifePeriod {
                    index,
                    start_age,
                    end_age,
                    shadow,
                    peak,
                    challenge,
                    transition,
                }
            })
            .collect();

        let sequence = years
            .iter()
            .map(|y| y.chlg.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            destiny_number,
            base_number,
            anchor_age,
            birth_date: date,
            years,
            periods,
            sequence,
        }
    }

    /// Personal-year entry for an age in `1..=100`.
    pub fn year_at_age(&self, age: u32) -> Option<&LifeYear> {
        self.years.iter().find(|y| y.age == age)
    }

    /// Period containing `age`, if any.
    pub fn period_for_age(&self, age: u32) -> Option<&LifePeriod> {
        self.periods.iter().find(|p| p.contains_age(age))
    }
}

/// Inclusive `(start, end)` windows of [`PERIOD_YEARS`] ages on a grid
/// anchored at `anchor`, clipped to `1..=100`. The first window always starts
/// at age 1.
fn period_windows(anchor: i64) -> Vec<(u32, u32)> {
    let last = i64::from(LIFE_SPAN_YEARS);
    let span = i64::from(PERIOD_YEARS);
    let mut out: Vec<(u32, u32)> = Vec::new();
    let mut start = anchor;
    while start <= last {
        let end = (start + span - 1).min(last);
        if end >= 1 {
            let first_age = if out.is_empty() { 1 } else { start };
            out.push((first_age as u32, end as u32));
        }
        start += span;
    }
    out
}

/// Life-cycle table for a birth date string; `None` if it does not parse.
pub fn shadows_peaks_challenges(birth_date: &str) -> Option<LifeCycleTable> {
    parse_or_log(birth_date, "shadows_peaks_challenges").map(LifeCycleTable::from_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_anchor_26() {
        let w = period_windows(26);
        assert_eq!(w[0], (1, 34));
        assert_eq!(w[1], (35, 43));
        assert_eq!(*w.last().unwrap(), (98, 100));
        assert_eq!(w.len(), 9);
    }

    #[test]
    fn windows_anchor_at_or_below_one() {
        assert_eq!(period_windows(1)[0], (1, 9));
        assert_eq!(period_windows(-3)[0], (1, 5));
        // a window ending before age 1 is skipped entirely
        assert_eq!(period_windows(-12)[0], (1, 5));
    }

    #[test]
    fn windows_final_shorter() {
        let w = period_windows(18);
        assert_eq!(*w.last().unwrap(), (99, 100));
    }

    #[test]
    fn known_table() {
        let t = shadows_peaks_challenges("15.03.1990").unwrap();
        assert_eq!(t.destiny_number, 1);
        assert_eq!(t.base_number, 9);
        assert_eq!(t.anchor_age, 26);
        assert_eq!(t.years.len(), 100);
        assert_eq!(t.years[0], LifeYear { age: 1, year: 1991, chlg: 2 });

        let p1 = t.periods[0];
        assert_eq!((p1.start_age, p1.end_age), (1, 34));
        assert_eq!(p1.peak, 9);
        assert_eq!(p1.shadow, 6);
        assert_eq!(p1.challenge, Some(5));
        assert_eq!(p1.transition, Some(2));

        let p2 = t.periods[1];
        assert_eq!((p2.peak, p2.shadow, p2.challenge, p2.transition), (7, 4, Some(5), Some(7)));

        let p3 = t.periods[2];
        assert_eq!((p3.peak, p3.shadow), (5, 2));

        for p in &t.periods[3..] {
            assert_eq!((p.peak, p.shadow), (4, 1));
        }
    }

    #[test]
    fn sequence_matches_years() {
        let t = shadows_peaks_challenges("1990-03-15").unwrap();
        let parsed: Vec<u8> = t.sequence.split(' ').map(|s| s.parse().unwrap()).collect();
        let expected: Vec<u8> = t.years.iter().map(|y| y.chlg).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn lookups() {
        let t = shadows_peaks_challenges("15.03.1990").unwrap();
        assert_eq!(t.year_at_age(100).unwrap().year, 2090);
        assert_eq!(t.period_for_age(40).unwrap().index, 2);
        assert!(t.year_at_age(0).is_none());
    }

    #[test]
    fn invalid_input() {
        assert!(shadows_peaks_challenges("").is_none());
    }
}
