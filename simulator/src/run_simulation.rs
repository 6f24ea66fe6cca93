use indicatif::{ProgressBar, ProgressStyle};
use pi_randomness::{
    digits::{DigitSequence, DigitSourceError},
    simulation::{
        simulate_banach_matchbox, simulate_birthdays, simulate_consecutive_runs,
        simulate_coupon_collector, simulate_sum, SimulationError,
    },
    transition,
    utils::logging,
    SimulationKind,
};
use rand::Rng;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::SimulationResults;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Digits(#[from] DigitSourceError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

// ------------------------------------------------------------------------------------------------
// Main Simulation Function
// ------------------------------------------------------------------------------------------------

/// Runs the transition matrix estimate and the five simulations
///
/// # Arguments
///
/// * `digits` - The loaded digit sequence, shared read-only by every step
/// * `config` - Trial counts for each simulation
/// * `rng` - Random source used for every draw
/// * `results` - Collects the matrix and each simulation's mean and variance
///
pub fn run_simulation<R: Rng + ?Sized>(
    digits: &DigitSequence,
    config: &Config,
    rng: &mut R,
    results: &mut SimulationResults,
) -> Result<(), SimulatorError> {
    results.digit_count = digits.len();

    // One step for the matrix, one per simulation
    let progress_bar = ProgressBar::new(1 + SimulationKind::ALL.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map(|style| style.progress_chars("##-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    progress_bar.set_message("transition matrix");
    logging::log("SIMULATOR", "Estimating transition matrix");
    results.transition_matrix = Some(transition::estimate(digits));
    progress_bar.inc(1);

    for kind in SimulationKind::ALL {
        progress_bar.set_message(kind.to_string());
        logging::log("SIMULATOR", &format!("Running {} simulation", kind));
        let result = match kind {
            SimulationKind::Sum => {
                simulate_sum(digits, rng, config.sum.draws, config.sum.trials)
            }
            SimulationKind::CouponCollector => {
                simulate_coupon_collector(digits, rng, config.coupon_collector.trials)
            }
            SimulationKind::Birthdays => {
                simulate_birthdays(digits, rng, config.birthdays.group_len, config.birthdays.trials)
            }
            SimulationKind::BanachMatchbox => simulate_banach_matchbox(
                digits,
                rng,
                config.banach_matchbox.matches,
                config.banach_matchbox.trials,
            ),
            SimulationKind::ConsecutiveRuns => simulate_consecutive_runs(digits),
        };
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                progress_bar.abandon_with_message(format!("{} failed", kind));
                return Err(e.into());
            }
        };
        results.record(kind, result);
        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("done");
    Ok(())
}
