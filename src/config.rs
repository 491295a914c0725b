use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::calc::DecimalContext;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Significant digits kept by every decimal operation.
    pub decimal_precision: u32,
    /// CSV export served by the demo summary; the built-in dataset when unset.
    pub demo_data_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            decimal_precision: DecimalContext::DEFAULT_PRECISION,
            demo_data_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let decimal_precision = env_map
            .get("DECIMAL_PRECISION")
            .map(|s| s.as_str())
            .unwrap_or("20")
            .parse::<u32>()
            .ok()
            .filter(|p| (1..=DecimalContext::MAX_PRECISION).contains(p))
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "DECIMAL_PRECISION".to_string(),
                    format!("must be between 1 and {}", DecimalContext::MAX_PRECISION),
                )
            })?;

        let demo_data_path = env_map
            .get("DEMO_DATA_PATH")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            port,
            decimal_precision,
            demo_data_path,
        })
    }

    /// Decimal context every calculator in the service is built with.
    pub fn decimal_context(&self) -> Result<DecimalContext, ConfigError> {
        DecimalContext::new(self.decimal_precision, Default::default()).map_err(|e| {
            ConfigError::InvalidValue("DECIMAL_PRECISION".to_string(), e.to_string())
        })
    }
}
