//! Configuration loader and validator for the pi digit simulator.
//! Handles parsing, validation, and access to the run configuration file.

use pi_randomness::types::constants::{
    DEFAULT_BIRTHDAY_GROUP_LEN, DEFAULT_BIRTHDAY_TRIALS, DEFAULT_COUPON_TRIALS, DEFAULT_DIGITS_PATH,
    DEFAULT_MATCHBOX_MATCHES, DEFAULT_MATCHBOX_TRIALS, DEFAULT_SUM_DRAWS, DEFAULT_SUM_TRIALS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Location of the optional run configuration, relative to the workspace root
pub const CONFIG_PATH: &str = "simulator/config.toml";

// ------------------------------------------------------------------------------------------------
// Main Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Main configuration struct for a simulation run.
///
/// Every section is optional in the file. Missing sections and fields fall
/// back to the fixed defaults, so an absent file runs the standard analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// Where to read the digit expansion from
    pub digits: DigitsConfig,
    /// Sum-of-draws parameters
    pub sum: SumConfig,
    /// Coupon collector parameters
    pub coupon_collector: CouponCollectorConfig,
    /// Birthday coincidence parameters
    pub birthdays: BirthdaysConfig,
    /// Banach's matchbox parameters
    pub banach_matchbox: BanachMatchboxConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DigitsConfig {
    /// Text file holding the decimal expansion
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SumConfig {
    /// Digits summed in each trial
    pub draws: usize,
    /// Number of trials
    pub trials: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CouponCollectorConfig {
    /// Number of trials
    pub trials: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BirthdaysConfig {
    /// Digits per group, so there are 10^group_len possible days
    pub group_len: usize,
    /// Number of trials
    pub trials: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BanachMatchboxConfig {
    /// Matches each box starts with
    pub matches: u32,
    /// Number of trials
    pub trials: usize,
}

impl Default for DigitsConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DIGITS_PATH) }
    }
}

impl Default for SumConfig {
    fn default() -> Self {
        Self { draws: DEFAULT_SUM_DRAWS, trials: DEFAULT_SUM_TRIALS }
    }
}

impl Default for CouponCollectorConfig {
    fn default() -> Self {
        Self { trials: DEFAULT_COUPON_TRIALS }
    }
}

impl Default for BirthdaysConfig {
    fn default() -> Self {
        Self { group_len: DEFAULT_BIRTHDAY_GROUP_LEN, trials: DEFAULT_BIRTHDAY_TRIALS }
    }
}

impl Default for BanachMatchboxConfig {
    fn default() -> Self {
        Self { matches: DEFAULT_MATCHBOX_MATCHES, trials: DEFAULT_MATCHBOX_TRIALS }
    }
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// ------------------------------------------------------------------------------------------------
// Configuration Implementation Methods
// ------------------------------------------------------------------------------------------------

impl Config {
    /// Loads `simulator/config.toml`, or the defaults when the file does not exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(config_str) => Self::from_toml_str(&config_str),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = Config::default();
                config.validate()?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sum.trials == 0 {
            return Err(ConfigError::ValidationError("Sum trials must be positive".into()));
        }
        if self.coupon_collector.trials == 0 {
            return Err(ConfigError::ValidationError("Coupon collector trials must be positive".into()));
        }
        if self.birthdays.group_len == 0 {
            return Err(ConfigError::ValidationError("Birthday group length must be positive".into()));
        }
        let days = u32::try_from(self.birthdays.group_len)
            .ok()
            .and_then(|exp| 10u64.checked_pow(exp));
        if days.is_none() {
            return Err(ConfigError::ValidationError("Birthday group length is too large".into()));
        }
        if self.birthdays.trials == 0 {
            return Err(ConfigError::ValidationError("Birthday trials must be positive".into()));
        }
        if self.banach_matchbox.trials == 0 {
            return Err(ConfigError::ValidationError("Matchbox trials must be positive".into()));
        }
        // draws and matches may be zero; the outcome is then a constant zero
        Ok(())
    }
}
