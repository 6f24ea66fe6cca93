//! Monte-Carlo procedures that sample the digit sequence.
//!
//! Every procedure takes the sequence by reference and an explicit random
//! generator, records one outcome per trial, and reduces the outcomes to a
//! [`ResultPair`](crate::types::ResultPair).

use thiserror::Error;

use crate::digits::{DigitSampler, DigitSequence};
use crate::statistics::StatisticsError;
use crate::types::SimulationKind;

pub mod sum;
pub mod coupon_collector;
pub mod birthdays;
pub mod banach_matchbox;
pub mod consecutive_runs;

pub use sum::simulate_sum;
pub use coupon_collector::simulate_coupon_collector;
pub use birthdays::simulate_birthdays;
pub use banach_matchbox::simulate_banach_matchbox;
pub use consecutive_runs::simulate_consecutive_runs;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("{0} simulation needs a non-empty digit sequence")]
    EmptySequence(SimulationKind),
    #[error("{simulation} simulation did not finish within {steps} steps")]
    Diverged {
        simulation: SimulationKind,
        steps: usize,
    },
    #[error("{simulation} simulation overflows with parameter {value}")]
    NumericOverflow {
        simulation: SimulationKind,
        value: usize,
    },
    #[error("Invalid parameter for {simulation} simulation: {reason}")]
    InvalidParameter {
        simulation: SimulationKind,
        reason: String,
    },
    #[error(transparent)]
    Statistics(#[from] StatisticsError),
}

/// Builds the shared sampler, failing when the sequence is empty
pub(crate) fn sampler_for(
    digits: &DigitSequence,
    simulation: SimulationKind,
) -> Result<DigitSampler<'_>, SimulationError> {
    DigitSampler::new(digits).ok_or(SimulationError::EmptySequence(simulation))
}
