//! Task (problem) numbers and the life periods they govern.
//!
//! Inputs are personal numbers that were already reduced elsewhere (soul,
//! mind, destiny, year of birth). The first two periods are 9 years long and
//! start at `36 - destiny`; no clamping is applied, so the start can fall
//! outside a plausible lifespan.

use std::fmt::{Display, Formatter};

use ank_math::reduce_difference;
use log::debug;
use serde::Serialize;

/// First task period starts at this age minus the destiny number.
pub const TASK_PERIOD_BASE_AGE: i64 = 36;

/// Length of the first two task periods in years.
pub const TASK_PERIOD_YEARS: i64 = 9;

/// An age window. `end == None` means it lasts for the rest of life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskPeriod {
    pub start: i64,
    pub end: Option<i64>,
}

impl TaskPeriod {
    pub const fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}

impl Display for TaskPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None if self.start == 0 => write!(f, "whole life"),
            None => write!(f, "{}+", self.start),
        }
    }
}

/// Four task numbers with their periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskNumbers {
    pub problem1: u8,
    pub problem2: u8,
    pub problem3: u8,
    pub problem4: u8,
    pub period1: TaskPeriod,
    pub period2: TaskPeriod,
    /// Always `0..` (whole life).
    pub period3: TaskPeriod,
    /// From the end of period 2 until the end of life.
    pub period4: TaskPeriod,
}

impl TaskNumbers {
    pub const fn problems(&self) -> [u8; 4] {
        [self.problem1, self.problem2, self.problem3, self.problem4]
    }

    pub const fn periods(&self) -> [TaskPeriod; 4] {
        [self.period1, self.period2, self.period3, self.period4]
    }
}

/// Compute task numbers; `None` if any input is missing.
pub fn task_numbers(
    soul: Option<i64>,
    mind: Option<i64>,
    destiny: Option<i64>,
    year: Option<i64>,
) -> Option<TaskNumbers> {
    let (Some(soul), Some(mind), Some(destiny), Some(year)) = (soul, mind, destiny, year) else {
        debug!(
            "task_numbers: missing input (soul={soul:?} mind={mind:?} destiny={destiny:?} year={year:?})"
        );
        return None;
    };

    let problem1 = reduce_difference(soul, mind);
    let p1_start = TASK_PERIOD_BASE_AGE.saturating_sub(destiny);
    let p1_end = p1_start.saturating_add(TASK_PERIOD_YEARS);

    let problem2 = reduce_difference(soul, year);
    let p2_start = p1_end;
    let p2_end = p2_start.saturating_add(TASK_PERIOD_YEARS);

    let problem3 = reduce_difference(i64::from(problem1), i64::from(problem2));
    let problem4 = reduce_difference(mind, year);

    Some(TaskNumbers {
        problem1,
        problem2,
        problem3,
        problem4,
        period1: TaskPeriod {
            start: p1_start,
            end: Some(p1_end),
        },
        period2: TaskPeriod {
            start: p2_start,
            end: Some(p2_end),
        },
        period3: TaskPeriod {
            start: 0,
            end: None,
        },
        period4: TaskPeriod {
            start: p2_end,
            end: None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_computation() {
        // soul 6, mind 3, destiny 1, year 1
        let t = task_numbers(Some(6), Some(3), Some(1), Some(1)).unwrap();
        assert_eq!(t.problems(), [3, 5, 2, 2]);
        assert_eq!(t.period1, TaskPeriod { start: 35, end: Some(44) });
        assert_eq!(t.period2, TaskPeriod { start: 44, end: Some(53) });
        assert_eq!(t.period3, TaskPeriod { start: 0, end: None });
        assert_eq!(t.period4, TaskPeriod { start: 53, end: None });
    }

    #[test]
    fn any_missing_input_gives_none() {
        assert_eq!(task_numbers(None, Some(5), Some(5), Some(5)), None);
        assert_eq!(task_numbers(Some(5), None, Some(5), Some(5)), None);
        assert_eq!(task_numbers(Some(5), Some(5), None, Some(5)), None);
        assert_eq!(task_numbers(Some(5), Some(5), Some(5), None), None);
    }

    #[test]
    fn large_destiny_is_not_clamped() {
        let t = task_numbers(Some(1), Some(1), Some(40), Some(1)).unwrap();
        assert_eq!(t.period1.start, -4);
        assert_eq!(t.period1.end, Some(5));
    }

    #[test]
    fn master_inputs_reduce_differences() {
        // |11 - 3| = 8; |11 - 22| = 11 -> 2; |8 - 2| = 6; |3 - 22| = 19 -> 1
        let t = task_numbers(Some(11), Some(3), Some(4), Some(22)).unwrap();
        assert_eq!(t.problems(), [8, 2, 6, 1]);
    }

    #[test]
    fn period_display() {
        let t = task_numbers(Some(6), Some(3), Some(1), Some(1)).unwrap();
        assert_eq!(t.period1.to_string(), "35-44");
        assert_eq!(t.period3.to_string(), "whole life");
        assert_eq!(t.period4.to_string(), "53+");
        assert!(t.period4.is_open_ended());
    }
}
