//! Abracadabra name triangle.
//!
//! The first nine Latin letters of name + surname form row 0; each further
//! row holds the single-digit reductions of adjacent pair sums, down to one
//! element.

use ank_math::reduce_to_single_digit;
use log::debug;
use serde::Serialize;

use crate::error::AnkError;
use crate::letters::{latin_letter_value, latin_letters};

/// Letters consumed from the name.
pub const TRIANGLE_WIDTH: usize = 9;

/// Reduction triangle over a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbracadabraTriangle {
    /// The nine uppercase letters used.
    pub letters: String,
    /// Row 0 has nine digits, the last row one.
    pub rows: Vec<Vec<u8>>,
}

impl AbracadabraTriangle {
    /// Single value at the bottom of the triangle.
    pub fn apex(&self) -> u8 {
        self.rows.last().and_then(|r| r.first()).copied().unwrap_or(0)
    }
}

/// Build the triangle from a first name and surname.
///
/// Non-Latin characters are skipped. Fewer than nine Latin letters yields
/// [`AnkError::InsufficientLetters`].
pub fn abracadabra(name: &str, surname: &str) -> Result<AbracadabraTriangle, AnkError> {
    let letters: String = latin_letters(name)
        .chain(latin_letters(surname))
        .take(TRIANGLE_WIDTH)
        .collect();
    if letters.len() < TRIANGLE_WIDTH {
        debug!("abracadabra: only {} Latin letters", letters.len());
        return Err(AnkError::InsufficientLetters {
            found: letters.len(),
            required: TRIANGLE_WIDTH,
        });
    }

    let first: Vec<u8> = letters.chars().filter_map(latin_letter_value).collect();
    let mut rows = vec![first];
    while let Some(prev) = rows.last().filter(|r| r.len() > 1) {
        let next = prev
            .windows(2)
            .map(|w| reduce_to_single_digit(i64::from(w[0]) + i64::from(w[1])))
            .collect();
        rows.push(next);
    }

    Ok(AbracadabraTriangle { letters, rows })
}
