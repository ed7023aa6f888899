//! Configuration module
//!
//! Loads the optional JSON configuration file carrying the three velocity
//! limits and the output file selection. Key names are preserved from the
//! original config format (`dailymaxamount`, `dailymaxcount`,
//! `weeklymaxamount`, `outputfile`).
//!
//! Every field is optional: missing fields fall back to the shipped
//! defaults ($5,000/day, 3 loads/day, $20,000/week, console output), and a
//! run without a config file uses `Config::default()` throughout.

use crate::types::{VelocityError, VelocityLimits};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Runtime configuration for one processing run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum total amount loadable per customer per day
    #[serde(rename = "dailymaxamount")]
    pub daily_max_amount: Decimal,

    /// Maximum number of loads per customer per day
    #[serde(rename = "dailymaxcount")]
    pub daily_max_count: u32,

    /// Maximum total amount loadable per customer per week
    #[serde(rename = "weeklymaxamount")]
    pub weekly_max_amount: Decimal,

    /// Output file path; empty or absent means console output
    #[serde(rename = "outputfile")]
    pub output_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let limits = VelocityLimits::default();
        Config {
            daily_max_amount: limits.daily_max_amount,
            daily_max_count: limits.daily_max_count,
            weekly_max_amount: limits.weekly_max_amount,
            output_file: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Parsed configuration with defaults for absent fields
    /// * `Err(VelocityError)` - The file could not be read or parsed
    pub fn load(path: &Path) -> Result<Self, VelocityError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            VelocityError::config_error(format!("cannot read '{}': {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            VelocityError::config_error(format!("cannot parse '{}': {}", path.display(), e))
        })
    }

    /// The velocity limits this configuration selects
    pub fn limits(&self) -> VelocityLimits {
        VelocityLimits {
            daily_max_amount: self.daily_max_amount,
            daily_max_count: self.daily_max_count,
            weekly_max_amount: self.weekly_max_amount,
        }
    }

    /// The configured output file, treating an empty string as unset
    pub fn output_file(&self) -> Option<&str> {
        self.output_file.as_deref().filter(|path| !path.is_empty())
    }
}
