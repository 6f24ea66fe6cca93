use std::env;
use chrono::Local;
use pi_randomness::{
    digits::{DigitSource, FileDigitSource},
    utils::logging,
};
use simulator::{config::Config, run_simulation, SimulationResults};


// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Loads the digits, runs every simulation and prints the report
fn main() -> anyhow::Result<()> {
    // Setup logging
    setup_logging();

    // Load configuration
    let config = Config::load()?;

    // Load the digit sequence before any computation
    let digits = FileDigitSource::new(&config.digits.path).load()?;

    // Initialize simulation results from configuration
    let mut results = initialize_simulation_results(&config);

    // Run simulation
    let mut rng = rand::thread_rng();
    run_simulation(&digits, &config, &mut rng, &mut results)?;

    results.print();
    Ok(())
}

/// Enables logging if the ENABLE_LOGS environment variable is set
fn setup_logging() {
    if env::var("ENABLE_LOGS").is_ok() {
        env::set_var(logging::LOGGING_ENV_VAR, "true");
    }
    logging::init_logging();
}

/// Initializes simulation results and logs the configuration
fn initialize_simulation_results(config: &Config) -> SimulationResults {
    let results = SimulationResults::default();

    let start_time = Local::now();
    logging::log("SIMULATOR", "=== Simulation Configuration ===");
    logging::log("SIMULATOR", &format!("Start Time: {}", start_time.format("%Y-%m-%d %H:%M:%S")));
    logging::log("SIMULATOR", &format!("Digits File: {}", config.digits.path.display()));
    logging::log("SIMULATOR", &format!("Sum: {} draws x {} trials", config.sum.draws, config.sum.trials));
    logging::log("SIMULATOR", &format!("Coupon Collector: {} trials", config.coupon_collector.trials));
    logging::log("SIMULATOR", &format!("Birthdays: {}-digit groups x {} trials", config.birthdays.group_len, config.birthdays.trials));
    logging::log("SIMULATOR", &format!("Banach's Matchbox: {} matches x {} trials", config.banach_matchbox.matches, config.banach_matchbox.trials));
    logging::log("SIMULATOR", "=============================");

    results
}
