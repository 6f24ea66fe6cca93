use super::SimulationError;
use crate::digits::DigitSequence;
use crate::statistics;
use crate::types::ResultPair;

/// Lengths of runs of repeated digits, in one pass over the whole sequence.
///
/// A run is recorded when the next digit differs, so a run still open at the
/// end of the sequence is not recorded.
pub fn simulate_consecutive_runs(digits: &DigitSequence) -> Result<ResultPair, SimulationError> {
    let mut runs = Vec::new();
    let mut run = 1u64;
    for (current, next) in digits.pairs() {
        if current == next {
            run += 1;
        } else {
            runs.push(run as f64);
            run = 1;
        }
    }

    Ok(statistics::summarize(&runs)?)
}
