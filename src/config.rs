//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::loader::ValidationRules;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT")),
        }
    }
}

impl LogFormat {
    /// Format named by `LOG_FORMAT`, text when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("LOG_FORMAT").map_or(Ok(LogFormat::Text), |value| value.parse())
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file with the order records
    pub orders_file: PathBuf,

    /// Youngest accepted customer
    pub customer_min_age: u32,

    /// Longest accepted customer or product name
    pub name_max_length: usize,

    /// Most decimal places accepted in money strings
    pub money_max_scale: u32,

    /// Largest accepted balance or price
    pub money_max_value: Decimal,

    /// Log output format (text, json)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let orders_file = lookup("ORDERS_FILE")
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingEnv("ORDERS_FILE"))?;

        let customer_min_age = lookup("CUSTOMER_MIN_AGE")
            .unwrap_or_else(|| "18".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("CUSTOMER_MIN_AGE"))?;

        let name_max_length = lookup("NAME_MAX_LENGTH")
            .unwrap_or_else(|| "64".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("NAME_MAX_LENGTH"))?;

        let money_max_scale: u32 = lookup("MONEY_MAX_SCALE")
            .unwrap_or_else(|| "2".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("MONEY_MAX_SCALE"))?;
        // rust_decimal supports at most 28 decimal places
        if money_max_scale > 28 {
            return Err(ConfigError::InvalidValue("MONEY_MAX_SCALE"));
        }

        let money_max_value: Decimal = lookup("MONEY_MAX_VALUE")
            .unwrap_or_else(|| "1000000000000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("MONEY_MAX_VALUE"))?;
        if money_max_value.is_sign_negative() {
            return Err(ConfigError::InvalidValue("MONEY_MAX_VALUE"));
        }

        let log_format = LogFormat::from_lookup(&lookup)?;

        Ok(Self {
            orders_file,
            customer_min_age,
            name_max_length,
            money_max_scale,
            money_max_value,
            log_format,
        })
    }

    /// Validation rules for the orders loader
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            min_age: self.customer_min_age,
            name_max_length: self.name_max_length,
            money_max_scale: self.money_max_scale,
            money_max_value: self.money_max_value,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
