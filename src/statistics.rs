//! Mean and population variance of simulation samples.

use crate::types::ResultPair;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("Cannot summarize an empty sample (division by zero)")]
    EmptySample,
}

/// Arithmetic mean of `samples`
pub fn mean(samples: &[f64]) -> Result<f64, StatisticsError> {
    if samples.is_empty() {
        return Err(StatisticsError::EmptySample);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population variance of `samples` (divides by N, not N - 1)
pub fn variance(samples: &[f64]) -> Result<f64, StatisticsError> {
    let mean = mean(samples)?;
    let squared: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    Ok(squared / samples.len() as f64)
}

pub fn summarize(samples: &[f64]) -> Result<ResultPair, StatisticsError> {
    Ok(ResultPair::new(mean(samples)?, variance(samples)?))
}
