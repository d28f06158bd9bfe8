//! Screen Configuration
//! Defaults for every displayed value, optionally overridden from a JSON file.

use crate::market::{Account, Position, Quote};
use crate::series::{SeriesParams, SeriesParamsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "trade_screen.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid chart settings: {0}")]
    InvalidSeries(#[from] SeriesParamsError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Trade Screen".to_string(),
            width: 420.0,
            height: 860.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(flatten)]
    pub params: SeriesParams,
    /// Fixed seed for a reproducible chart. Unseeded when absent.
    pub seed: Option<u64>,
}

/// Everything the screen shows that is not user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub window: WindowConfig,
    pub quote: Quote,
    pub account: Account,
    pub positions: Vec<Position>,
    pub chart: ChartConfig,
}

impl Default for ScreenConfig {
    /// The stock screen: one open long position.
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            quote: Quote::default(),
            account: Account::default(),
            positions: vec![Position::default()],
            chart: ChartConfig::default(),
        }
    }
}

impl ScreenConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScreenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chart.params.validate()?;
        Ok(())
    }
}
