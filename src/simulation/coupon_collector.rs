use rand::Rng;

use super::{sampler_for, SimulationError};
use crate::digits::DigitSequence;
use crate::statistics;
use crate::types::{constants::DIGIT_RADIX, ResultPair, SimulationKind};

/// Coupon collector over the digit stream.
///
/// Each trial starts at a random position and walks forward cyclically until
/// all ten digit values have been seen, recording how many digits it read.
/// A walk that covers the whole cycle without completing can never complete,
/// so it fails with [`SimulationError::Diverged`].
pub fn simulate_coupon_collector<R: Rng + ?Sized>(
    digits: &DigitSequence,
    rng: &mut R,
    trials: usize,
) -> Result<ResultPair, SimulationError> {
    let sampler = sampler_for(digits, SimulationKind::CouponCollector)?;
    let max_steps = digits.len();

    let mut steps_taken = Vec::with_capacity(trials);
    for _ in 0..trials {
        let start = sampler.position(rng);
        let steps = collect_all(digits, start, max_steps).ok_or(SimulationError::Diverged {
            simulation: SimulationKind::CouponCollector,
            steps: max_steps,
        })?;
        steps_taken.push(steps as f64);
    }

    Ok(statistics::summarize(&steps_taken)?)
}

/// Number of digits read from `start` until every value is collected
fn collect_all(digits: &DigitSequence, start: usize, max_steps: usize) -> Option<usize> {
    let mut collected = [false; DIGIT_RADIX];
    let mut distinct = 0;
    for step in 0..max_steps {
        let digit = digits.get_cyclic(start + step) as usize;
        if !collected[digit] {
            collected[digit] = true;
            distinct += 1;
            if distinct == DIGIT_RADIX {
                return Some(step + 1);
            }
        }
    }
    None
}
