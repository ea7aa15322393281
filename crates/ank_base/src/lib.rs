//! Birth-date numerology built on the `ank_math` reduction primitives.
//!
//! This crate provides:
//! - Birth-date parsing (`DD.MM.YYYY`, `YYYY-MM-DD`) with optional strict
//!   calendar checking
//! - Behavior fractal, personal numbers and task numbers
//! - The 100-year shadows / peaks / challenges / transitions table
//! - Individual year, month and day numbers with calculation traces
//! - Pythagorean square and letter tables, abracadabra name triangle
//!
//! Every operation is pure. Operations that start from a raw birth-date
//! string return `None` when it does not parse; the reason is logged at
//! `debug` level.

pub mod abracadabra;
pub mod date;
pub mod error;
pub mod fractal;
pub mod individual;
pub mod letters;
pub mod life_cycle;
pub mod personal;
pub mod report;
pub mod square;
pub mod task;

pub use abracadabra::{AbracadabraTriangle, TRIANGLE_WIDTH, abracadabra};
pub use date::{CalendarDate, DateParsing, parse_birth_date, parse_birth_date_with};
pub use error::AnkError;
pub use fractal::{BehaviorFractal, behavior_fractal};
pub use individual::{IndividualNumbers, Traced, individual_numbers, individual_numbers_at};
pub use letters::{
    Alphabet, cyrillic_letter_value, full_name_number, latin_letter_value, letter_value,
};
pub use life_cycle::{
    LIFE_SPAN_YEARS, LifeCycleTable, LifePeriod, LifeYear, PERIOD_YEARS, shadows_peaks_challenges,
};
pub use personal::{PersonalNumbers, personal_numbers};
pub use report::{Report, ReportRequest, build_report};
pub use square::{PythagoreanSquare, pythagorean_square};
pub use task::{TaskNumbers, TaskPeriod, task_numbers};

// Re-export the reduction primitives so callers need only this crate.
pub use ank_math::{
    MasterPolicy, reduce, reduce_for_ruling, reduce_to_integer, reduce_to_single_digit,
    reduce_with_master_numbers,
};
