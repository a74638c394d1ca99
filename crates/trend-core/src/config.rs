// File: crates/trend-core/src/config.rs
// Summary: Tracker settings (unit suffix, list order, axis and window policy) loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::axis::AxisPolicy;
use crate::types::{SortOrder, DEFAULT_UNIT};
use crate::view::WindowPolicy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Suffix stripped when decoding values and appended when storing them.
    pub unit_suffix: String,
    /// Order of the weight log list.
    pub sort_order: SortOrder,
    pub axis: AxisPolicy,
    pub window: WindowPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            unit_suffix: DEFAULT_UNIT.to_string(),
            sort_order: SortOrder::default(),
            axis: AxisPolicy::default(),
            window: WindowPolicy::default(),
        }
    }
}

impl TrackerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let axis = &self.axis;
        non_negative("axis.pad_ratio", axis.pad_ratio)?;
        non_negative("axis.min_pad", axis.min_pad)?;
        non_negative("axis.auto_top_padding", axis.auto_top_padding)?;
        if !axis.floor.is_finite() {
            return Err(ConfigError::Invalid(format!("axis.floor must be finite, got {}", axis.floor)));
        }
        non_negative("window.edge_margin", self.window.edge_margin)?;
        if self.window.visible_points == 0 {
            return Err(ConfigError::Invalid("window.visible_points must be at least 1".into()));
        }
        if self.unit_suffix.trim() != self.unit_suffix {
            return Err(ConfigError::Invalid(format!(
                "unit_suffix must not carry surrounding whitespace, got {:?}",
                self.unit_suffix
            )));
        }
        Ok(())
    }
}

fn non_negative(name: &str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite and non-negative, got {v}")))
    }
}
