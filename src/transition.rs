//! Empirical first-order Markov matrix of the digit stream.

use crate::digits::DigitSequence;
use crate::types::{constants::DIGIT_RADIX, TransitionMatrix};
use crate::utils::logging;

/// Counts every adjacent `(current, next)` pair and normalises each row by its total.
///
/// A digit that never precedes another keeps an all-zero row instead of
/// dividing by zero.
pub fn estimate(digits: &DigitSequence) -> TransitionMatrix {
    let mut rows = [[0.0_f64; DIGIT_RADIX]; DIGIT_RADIX];
    for (current, next) in digits.pairs() {
        rows[current as usize][next as usize] += 1.0;
    }

    for (from, row) in rows.iter_mut().enumerate() {
        let total: f64 = row.iter().sum();
        if total == 0.0 {
            logging::log("TRANSITION", &format!("Digit {} never precedes another digit, leaving its row empty", from));
            continue;
        }
        for p in row.iter_mut() {
            *p /= total;
        }
    }

    TransitionMatrix::from_rows(rows)
}
