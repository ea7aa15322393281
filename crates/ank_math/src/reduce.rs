//! Repeated digit-sum reduction.
//!
//! Reduction replaces a number with the sum of its decimal digits until a
//! single digit remains. Master numbers may stop the loop early, and which
//! numbers count as "master" depends on the call site:
//!
//! | policy                  | stops at      | used for                          |
//! |-------------------------|---------------|-----------------------------------|
//! | [`MasterPolicy::None`]     | never      | fractal, life cycles, task numbers |
//! | [`MasterPolicy::Standard`] | 11, 22, 33 | soul, mind, full-name numbers      |
//! | [`MasterPolicy::Ruling`]   | 11, 22     | ruling number                      |
//!
//! The ruling policy excludes 33 on purpose; the two master sets must not be
//! merged.

use crate::digits::digit_sum;

/// Which master numbers short-circuit a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MasterPolicy {
    /// Reduce all the way to a single digit.
    #[default]
    None,
    /// Stop at 11, 22 or 33.
    Standard,
    /// Stop at 11 or 22 only.
    Ruling,
}

impl MasterPolicy {
    /// Master numbers recognised by this policy.
    pub const fn masters(self) -> &'static [u64] {
        match self {
            Self::None => &[],
            Self::Standard => &[11, 22, 33],
            Self::Ruling => &[11, 22],
        }
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Ruling => "ruling",
        }
    }
}

/// Whether `n` is a master number under `policy`.
pub fn is_master_number(n: u64, policy: MasterPolicy) -> bool {
    policy.masters().contains(&n)
}

/// Reduce `|n|` by repeated digit sums, honouring `policy`.
///
/// The master check runs before each summation, so a value that lands on a
/// master number mid-reduction is returned as-is.
pub fn reduce(n: i64, policy: MasterPolicy) -> u8 {
    reduce_unsigned(n.unsigned_abs(), policy)
}

fn reduce_unsigned(mut n: u64, policy: MasterPolicy) -> u8 {
    while n > 9 {
        if is_master_number(n, policy) {
            break;
        }
        n = digit_sum(n);
    }
    n as u8
}

/// Reduce with the standard master numbers 11, 22 and 33.
pub fn reduce_with_master_numbers(n: u64) -> u8 {
    reduce_unsigned(n, MasterPolicy::Standard)
}

/// Reduce `|n|`; with `allow_master` the ruling set (11, 22) stops the loop.
pub fn reduce_to_integer(n: i64, allow_master: bool) -> u8 {
    let policy = if allow_master {
        MasterPolicy::Ruling
    } else {
        MasterPolicy::None
    };
    reduce(n, policy)
}

/// Reduce `|n|` to a single digit `0..=9`.
pub fn reduce_to_single_digit(n: i64) -> u8 {
    reduce(n, MasterPolicy::None)
}

/// Reduce `|n|`, stopping at 11 or 22 but not 33.
pub fn reduce_for_ruling(n: i64) -> u8 {
    reduce(n, MasterPolicy::Ruling)
}

/// Reduce `|a - b|` to a single digit without overflowing.
pub fn reduce_difference(a: i64, b: i64) -> u8 {
    reduce_unsigned(a.abs_diff(b), MasterPolicy::None)
}
