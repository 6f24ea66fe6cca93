//! Uniform digit selection.
//!
//! Draws positions uniformly at random, with replacement, from a loaded
//! digit sequence.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::DigitSequence;

// ------------------------------------------------------------------------------------------------
// Data Structures
// ------------------------------------------------------------------------------------------------

/// Selects positions of a digit sequence uniformly at random
pub struct DigitSampler<'a> {
    digits: &'a DigitSequence,
    positions: Uniform<usize>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a> DigitSampler<'a> {
    /// Creates a sampler over `digits`, or `None` when there is nothing to draw from
    pub fn new(digits: &'a DigitSequence) -> Option<Self> {
        if digits.is_empty() {
            return None;
        }
        Some(Self {
            digits,
            positions: Uniform::new(0, digits.len()),
        })
    }

    /// Picks a random position in `[0, len)`
    pub fn position<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.positions.sample(rng)
    }

    /// Reads the digit at a random position
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        self.digits.get_cyclic(self.position(rng))
    }

    pub fn digits(&self) -> &'a DigitSequence {
        self.digits
    }
}
