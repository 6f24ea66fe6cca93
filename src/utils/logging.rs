use std::sync::atomic::{AtomicBool, Ordering};
use std::env;
use tracing::Level;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Environment variable that switches logging on or off
pub const LOGGING_ENV_VAR: &str = "PI_RANDOMNESS_LOGGING";

/// Initializes logging based on the PI_RANDOMNESS_LOGGING environment variable.
/// - If PI_RANDOMNESS_LOGGING=true, logging is enabled and a tracing subscriber is installed.
/// - If PI_RANDOMNESS_LOGGING=false or not set, logging is disabled.
/// - To enable logging in tests, run: PI_RANDOMNESS_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    let enabled = match env::var(LOGGING_ENV_VAR) {
        Ok(value) => match value.as_str() {
            "true" => true,
            "false" => false,
            other => {
                eprintln!(
                    "Ignoring {}={}: expected 'true' or 'false', logging stays disabled",
                    LOGGING_ENV_VAR, other
                );
                false
            }
        },
        Err(_) => false,
    };

    if enabled {
        // A subscriber may already be installed by an earlier test in the same process
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .try_init();
    }
    ENABLE_LOGGING.store(enabled, Ordering::SeqCst);
}

pub fn is_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::SeqCst)
}

pub fn log(prefix: &str, message: &str) {
    if is_enabled() {
        tracing::info!("[{}]   {}", prefix, message);
    }
}

/// Like [`log`], for verbose output such as full report dumps
pub fn debug(prefix: &str, message: &str) {
    if is_enabled() {
        tracing::debug!("[{}]   {}", prefix, message);
    }
}
