//! Generalised birthday problem over groups of consecutive digits.
//!
//! A "day" is one of the `10^n` possible n-digit numbers and a "person" is a
//! group of `n` consecutive digits read from a random start. A trial ends
//! once more than half of the days have been hit by at least two people.

use rand::Rng;

use super::{sampler_for, SimulationError};
use crate::digits::DigitSequence;
use crate::statistics;
use crate::types::{constants::BIRTHDAY_SCAN_PASSES, ResultPair, SimulationKind};
use crate::utils::logging;

/// Mean and variance of the number of groups needed, over `trials` trials.
///
/// Trials that reach the scan bound without meeting the threshold record no
/// outcome. If no trial records one, the result is an empty-sample error.
pub fn simulate_birthdays<R: Rng + ?Sized>(
    digits: &DigitSequence,
    rng: &mut R,
    group_len: usize,
    trials: usize,
) -> Result<ResultPair, SimulationError> {
    if group_len == 0 {
        return Err(SimulationError::InvalidParameter {
            simulation: SimulationKind::Birthdays,
            reason: "group length must be at least 1".into(),
        });
    }
    let sampler = sampler_for(digits, SimulationKind::Birthdays)?;

    let overflow = || SimulationError::NumericOverflow {
        simulation: SimulationKind::Birthdays,
        value: group_len,
    };
    let days = u32::try_from(group_len)
        .ok()
        .and_then(|exp| 10u64.checked_pow(exp))
        .ok_or_else(overflow)?;
    let scan_end = digits
        .len()
        .checked_mul(group_len)
        .and_then(|n| n.checked_mul(BIRTHDAY_SCAN_PASSES))
        .ok_or_else(overflow)?;

    let mut group_counts = Vec::with_capacity(trials);
    for trial in 0..trials {
        let start = sampler.position(rng);
        match people_until_half_collide(digits, start, group_len, scan_end, days) {
            Some(people) => group_counts.push(people as f64),
            None => logging::log(
                "BIRTHDAYS",
                &format!("Trial {} reached the scan bound without enough collisions", trial),
            ),
        }
    }

    Ok(statistics::summarize(&group_counts)?)
}

/// Reads the n-digit number starting at `position`, most significant digit first
fn read_group(digits: &DigitSequence, position: usize, group_len: usize) -> u64 {
    (0..group_len).fold(0u64, |value, offset| {
        value * 10 + digits.get_cyclic(position + offset) as u64
    })
}

/// Number of groups drawn when the collision count first exceeds `days / 2`.
///
/// Groups are kept sorted. A collision is a distinct value drawn at least
/// twice, except that the value `0` is never counted.
// TODO: confirm whether an all-zero group should count as a collision; the
// exclusion is kept so results stay comparable with earlier runs.
fn people_until_half_collide(
    digits: &DigitSequence,
    start: usize,
    group_len: usize,
    scan_end: usize,
    days: u64,
) -> Option<usize> {
    let mut groups: Vec<u64> = Vec::new();
    let mut collisions: u64 = 0;

    for position in (start..scan_end).step_by(group_len) {
        let group = read_group(digits, position, group_len);

        let first = groups.partition_point(|&g| g < group);
        let already_seen = groups[first..].partition_point(|&g| g == group);
        groups.insert(first, group);
        if already_seen == 1 && group != 0 {
            collisions += 1;
        }

        if collisions * 2 > days {
            return Some(groups.len());
        }
    }
    None
}
