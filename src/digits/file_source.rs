use std::fs;
use std::path::{Path, PathBuf};

use super::{DigitSequence, DigitSource, DigitSourceError};
use crate::utils::logging;

/// Reads the expansion from a text file on disk
#[derive(Debug, Clone)]
pub struct FileDigitSource {
    path: PathBuf,
}

impl FileDigitSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DigitSource for FileDigitSource {
    fn load(&self) -> Result<DigitSequence, DigitSourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| DigitSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let digits = DigitSequence::parse(&text);
        logging::log("DIGITS", &format!("Loaded {} digits from {}", digits.len(), self.path.display()));
        Ok(digits)
    }
}
