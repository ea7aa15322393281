//! Decimal digit extraction.

/// Decimal digits of `n`, most significant first. `0` yields `[0]`.
pub fn digits(n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut out = Vec::with_capacity(20);
    let mut rest = n;
    while rest > 0 {
        out.push((rest % 10) as u8);
        rest /= 10;
    }
    out.reverse();
    out
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(n: u64) -> u64 {
    let mut rest = n;
    let mut sum = 0;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum
}

/// Most significant non-zero digit of `n`, or `None` for zero.
pub fn leading_nonzero_digit(n: u64) -> Option<u8> {
    digits(n).into_iter().find(|&d| d != 0)
}
