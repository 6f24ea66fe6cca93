use super::DigitSourceError;
use crate::types::constants::DIGIT_RADIX;

/// Immutable ordered digits of the expansion.
///
/// Positions past the end wrap around, so the sequence can be read as a
/// circular buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    /// Builds a sequence from raw values, rejecting anything above 9
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, DigitSourceError> {
        if let Some(&bad) = digits.iter().find(|&&d| d as usize >= DIGIT_RADIX) {
            return Err(DigitSourceError::InvalidDigit(bad));
        }
        Ok(Self { digits })
    }

    /// Extracts every base-10 digit of `text` in order and ignores the rest
    pub fn parse(text: &str) -> Self {
        let digits = text
            .chars()
            .filter_map(|ch| ch.to_digit(DIGIT_RADIX as u32))
            .map(|d| d as u8)
            .collect();
        Self { digits }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied()
    }

    /// Digit at `index` modulo the sequence length.
    ///
    /// Panics on an empty sequence; callers check `is_empty` first.
    pub fn get_cyclic(&self, index: usize) -> u8 {
        self.digits[index % self.digits.len()]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().copied()
    }

    /// Adjacent `(current, next)` pairs in order
    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.digits.windows(2).map(|w| (w[0], w[1]))
    }
}
