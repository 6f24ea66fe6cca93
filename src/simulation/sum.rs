use rand::Rng;

use super::{sampler_for, SimulationError};
use crate::digits::DigitSequence;
use crate::statistics;
use crate::types::{ResultPair, SimulationKind};

/// Sum of `draws` random digits, repeated over `trials` trials
pub fn simulate_sum<R: Rng + ?Sized>(
    digits: &DigitSequence,
    rng: &mut R,
    draws: usize,
    trials: usize,
) -> Result<ResultPair, SimulationError> {
    let sampler = sampler_for(digits, SimulationKind::Sum)?;

    let sums: Vec<f64> = (0..trials)
        .map(|_| (0..draws).map(|_| sampler.draw(rng) as f64).sum::<f64>())
        .collect();

    Ok(statistics::summarize(&sums)?)
}
