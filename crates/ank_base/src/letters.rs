//! Pythagorean letter-to-digit tables.
//!
//! Letters are numbered in alphabet order and folded onto 1..=9:
//!
//! ```text
//! 1  2  3  4  5  6  7  8  9
//! A  B  C  D  E  F  G  H  I
//! J  K  L  M  N  O  P  Q  R
//! S  T  U  V  W  X  Y  Z
//! ```
//!
//! The Cyrillic table follows the same rule over the 33-letter Russian
//! alphabet (А=1 … И=1 … Я=6).

use ank_math::reduce_with_master_numbers;
use serde::Serialize;

/// Script a letter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Alphabet {
    Latin,
    Cyrillic,
}

const CYRILLIC: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Digit for a Latin letter (either case), or `None`.
pub fn latin_letter_value(c: char) -> Option<u8> {
    let u = c.to_ascii_uppercase();
    u.is_ascii_uppercase().then(|| (u as u8 - b'A') % 9 + 1)
}

/// Digit for a Russian Cyrillic letter (either case), or `None`.
pub fn cyrillic_letter_value(c: char) -> Option<u8> {
    let u = to_upper(c);
    CYRILLIC
        .iter()
        .position(|&l| l == u)
        .map(|i| (i % 9) as u8 + 1)
}

/// Digit and script for any supported letter.
pub fn letter_value(c: char) -> Option<(Alphabet, u8)> {
    latin_letter_value(c)
        .map(|v| (Alphabet::Latin, v))
        .or_else(|| cyrillic_letter_value(c).map(|v| (Alphabet::Cyrillic, v)))
}

/// Uppercase Latin letters of `s` in order; everything else is skipped.
pub fn latin_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
}

/// Full-name number: letter values summed and reduced with master numbers.
///
/// Latin and Cyrillic letters both count; other characters are ignored.
/// `None` when the name has no letter from either table.
pub fn full_name_number(name: &str) -> Option<u8> {
    let values: Vec<u8> = name.chars().filter_map(|c| letter_value(c).map(|(_, v)| v)).collect();
    if values.is_empty() {
        return None;
    }
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Some(reduce_with_master_numbers(total))
}
