use rand::Rng;

use super::{sampler_for, SimulationError};
use crate::digits::DigitSequence;
use crate::statistics;
use crate::types::{constants::MATCHBOX_SPLIT_DIGIT, ResultPair, SimulationKind};

/// Banach's matchbox problem with `matches` in each box.
///
/// A digit of 5 or more takes a match from the second box, anything lower
/// from the first. Each trial records the matches left in the other box once
/// one box is empty.
pub fn simulate_banach_matchbox<R: Rng + ?Sized>(
    digits: &DigitSequence,
    rng: &mut R,
    matches: u32,
    trials: usize,
) -> Result<ResultPair, SimulationError> {
    let sampler = sampler_for(digits, SimulationKind::BanachMatchbox)?;

    let mut remaining = Vec::with_capacity(trials);
    for _ in 0..trials {
        let (mut low_box, mut high_box) = (matches, matches);
        while low_box > 0 && high_box > 0 {
            if sampler.draw(rng) >= MATCHBOX_SPLIT_DIGIT {
                high_box -= 1;
            } else {
                low_box -= 1;
            }
        }
        remaining.push(low_box.max(high_box) as f64);
    }

    Ok(statistics::summarize(&remaining)?)
}
