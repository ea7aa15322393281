//! Digit primitives and digit-reduction policies.
//!
//! This crate provides:
//! - Decimal digit extraction and digit sums
//! - Repeated digit reduction under three master-number policies
//!
//! Every function is pure and allocation-free except [`digits`].

pub mod digits;
pub mod reduce;

pub use digits::{digit_sum, digits, leading_nonzero_digit};
pub use reduce::{
    MasterPolicy, is_master_number, reduce, reduce_difference, reduce_for_ruling,
    reduce_to_integer, reduce_to_single_digit, reduce_with_master_numbers,
};
