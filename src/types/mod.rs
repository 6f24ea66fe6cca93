use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constants;

use constants::DIGIT_RADIX;

/// Mean and variance of one simulation's sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultPair {
    /// Arithmetic mean of the recorded outcomes
    pub mean: f64,
    /// Population variance of the recorded outcomes
    pub variance: f64,
}

impl ResultPair {
    pub fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }

    /// Standard deviation derived from the population variance
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Empirical digit-to-next-digit frequencies.
///
/// Row `i` holds the distribution of the digit that follows `i`. Rows of
/// digits that never occur as a predecessor are left all-zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionMatrix {
    rows: [[f64; DIGIT_RADIX]; DIGIT_RADIX],
}

impl TransitionMatrix {
    pub fn from_rows(rows: [[f64; DIGIT_RADIX]; DIGIT_RADIX]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[f64; DIGIT_RADIX]; DIGIT_RADIX] {
        &self.rows
    }

    pub fn row(&self, from: usize) -> &[f64; DIGIT_RADIX] {
        &self.rows[from]
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    pub fn row_sum(&self, from: usize) -> f64 {
        self.rows[from].iter().sum()
    }

    /// Whether `from` was seen as a predecessor at least once
    pub fn is_observed(&self, from: usize) -> bool {
        self.rows[from].iter().any(|&p| p > 0.0)
    }

    /// Checks that every observed row sums to 1 within `tolerance`
    pub fn is_row_stochastic(&self, tolerance: f64) -> bool {
        (0..DIGIT_RADIX)
            .filter(|&from| self.is_observed(from))
            .all(|from| (self.row_sum(from) - 1.0).abs() <= tolerance)
    }
}

/// The five sampling procedures run against the digit sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulationKind {
    Sum,
    CouponCollector,
    Birthdays,
    BanachMatchbox,
    ConsecutiveRuns,
}

impl SimulationKind {
    pub const ALL: [SimulationKind; 5] = [
        SimulationKind::Sum,
        SimulationKind::CouponCollector,
        SimulationKind::Birthdays,
        SimulationKind::BanachMatchbox,
        SimulationKind::ConsecutiveRuns,
    ];

    /// Heading used by the report
    pub fn label(&self) -> &'static str {
        match self {
            SimulationKind::Sum => "Simulate Sum",
            SimulationKind::CouponCollector => "Simulate Coupon Collector",
            SimulationKind::Birthdays => "Simulate Birthday Problem",
            SimulationKind::BanachMatchbox => "Simulate Banach's Matchbox Problem",
            SimulationKind::ConsecutiveRuns => "Simulate Runs",
        }
    }
}

impl fmt::Display for ResultPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean: {} variance: {}", self.mean, self.variance)
    }
}

impl fmt::Display for TransitionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line = row
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationKind::Sum => write!(f, "sum"),
            SimulationKind::CouponCollector => write!(f, "coupon_collector"),
            SimulationKind::Birthdays => write!(f, "birthdays"),
            SimulationKind::BanachMatchbox => write!(f, "banach_matchbox"),
            SimulationKind::ConsecutiveRuns => write!(f, "consecutive_runs"),
        }
    }
}
