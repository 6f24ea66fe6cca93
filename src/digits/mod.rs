use std::path::PathBuf;
use thiserror::Error;

pub mod sequence;
pub mod sampler;
pub mod file_source;

pub use sequence::DigitSequence;
pub use sampler::DigitSampler;
pub use file_source::FileDigitSource;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum DigitSourceError {
    #[error("Failed to read digit source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid digit {0}: digits must be in 0..=9")]
    InvalidDigit(u8),
}

/// A resource that yields the digit sequence once at startup
pub trait DigitSource {
    /// Load the full sequence into memory, skipping every non-digit character
    fn load(&self) -> Result<DigitSequence, DigitSourceError>;
}
