use pi_randomness::digits::{DigitSequence, DigitSource, FileDigitSource};

/// Digit file bundled with the simulator crate
pub const PI_DIGITS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/simulator/data/pi_digits.txt");

/// Helper function to load the bundled expansion of pi
pub fn load_pi_digits() -> DigitSequence {
    FileDigitSource::new(PI_DIGITS_PATH)
        .load()
        .expect("Failed to load bundled pi digits")
}
