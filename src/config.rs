//! Engine configuration file support.
//!
//! This module provides utilities for reading engine configuration from TOML
//! configuration files. Every knob defaults to the published criterion value,
//! so `EngineConfig::default()` reproduces the standard Yallop/Odeh decision
//! procedure exactly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("No hilal.toml found in standard locations")]
    NotFound,
}

/// Engine configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub conditions: ObservingConditions,
}

/// Geometric gates and event-search windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Minimum moon altitude at sunset for the crescent to be considered, degrees.
    #[serde(default = "default_min_moon_altitude_deg")]
    pub min_moon_altitude_deg: f64,
    /// How far before sunset to search for the last new-moon crossing, days.
    #[serde(default = "default_new_moon_lookback_days")]
    pub new_moon_lookback_days: f64,
}

/// Observing-condition gates applied in the borderline q-factor tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservingConditions {
    /// Maximum extinction factor for naked-eye sighting in perfect conditions.
    #[serde(default = "default_max_extinction_clear")]
    pub max_extinction_clear: f64,
    /// Minimum set-lag in minutes for naked-eye sighting in perfect conditions.
    #[serde(default = "default_min_lag_minutes_clear")]
    pub min_lag_minutes_clear: f64,
    /// Maximum extinction factor when optical aid is needed to find the crescent.
    #[serde(default = "default_max_extinction_aided")]
    pub max_extinction_aided: f64,
    /// Minimum moon age in hours when optical aid is needed to find the crescent.
    #[serde(default = "default_min_age_hours_aided")]
    pub min_age_hours_aided: f64,
    /// Minimum set-lag in minutes when optical aid is needed to find the crescent.
    #[serde(default = "default_min_lag_minutes_aided")]
    pub min_lag_minutes_aided: f64,
}

fn default_min_moon_altitude_deg() -> f64 {
    3.0
}

fn default_new_moon_lookback_days() -> f64 {
    3.0
}

fn default_max_extinction_clear() -> f64 {
    2.5
}

fn default_min_lag_minutes_clear() -> f64 {
    40.0
}

fn default_max_extinction_aided() -> f64 {
    2.0
}

fn default_min_age_hours_aided() -> f64 {
    20.0
}

fn default_min_lag_minutes_aided() -> f64 {
    50.0
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_moon_altitude_deg: default_min_moon_altitude_deg(),
            new_moon_lookback_days: default_new_moon_lookback_days(),
        }
    }
}

impl Default for ObservingConditions {
    fn default() -> Self {
        Self {
            max_extinction_clear: default_max_extinction_clear(),
            min_lag_minutes_clear: default_min_lag_minutes_clear(),
            max_extinction_aided: default_max_extinction_aided(),
            min_age_hours_aided: default_min_age_hours_aided(),
            min_lag_minutes_aided: default_min_lag_minutes_aided(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine: EngineSettings::default(),
            conditions: ObservingConditions::default(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        let config: EngineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `hilal.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if found and parsed successfully
    /// * `Err(ConfigError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("hilal.toml"),
            PathBuf::from("../hilal.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }
}
