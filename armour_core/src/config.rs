//! Application configuration from TOML files

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Parse a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Tunable application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Storage file for persisted values
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            storage_path: default_storage_path(),
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from a TOML file; a missing file means defaults
    ///
    /// Unlike value storage, config files are user-authored, so a present
    /// but invalid file is reported instead of silently replaced.
    pub fn load_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        load_toml(path)
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("poe2_armour.json")
}

/// Chart sampling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Highest armour value plotted
    #[serde(default = "default_max_armour")]
    pub max_armour: f64,
    /// Distance between samples
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            max_armour: 30_000.0,
            step: 1_000.0,
        }
    }
}

fn default_max_armour() -> f64 {
    30_000.0
}

fn default_step() -> f64 {
    1_000.0
}

impl ChartConfig {
    /// Armour sampling grid: 0 to `max_armour` inclusive
    pub fn armour_steps(&self) -> Vec<f64> {
        if self.step <= 0.0 {
            return vec![0.0];
        }

        let mut steps = Vec::new();
        let mut armour = 0.0;
        while armour <= self.max_armour {
            steps.push(armour);
            armour += self.step;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_path, PathBuf::from("poe2_armour.json"));
        assert!((config.chart.max_armour - 30_000.0).abs() < f64::EPSILON);
        assert!((config.chart.step - 1_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_armour_steps() {
        let steps = ChartConfig::default().armour_steps();
        assert_eq!(steps.len(), 31);
        assert!((steps[0] - 0.0).abs() < f64::EPSILON);
        assert!((steps[30] - 30_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_step() {
        let config = ChartConfig {
            max_armour: 1000.0,
            step: 0.0,
        };
        assert_eq!(config.armour_steps(), vec![0.0]);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: AppConfig = parse_toml("storage_path = \"custom.json\"").unwrap();
        assert_eq!(config.storage_path, PathBuf::from("custom.json"));
        // Omitted sections fall back to field defaults
        assert!((config.chart.step - 1_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_chart_section() {
        let toml = "[chart]\nmax_armour = 50000.0\nstep = 5000.0\n";
        let config: AppConfig = parse_toml(toml).unwrap();
        assert!((config.chart.max_armour - 50_000.0).abs() < f64::EPSILON);
        assert_eq!(config.chart.armour_steps().len(), 11);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result: Result<AppConfig, ConfigError> = parse_toml("storage_path = [not toml");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let config =
            AppConfig::load_or_default(Path::new("/definitely/not/a/real/config.toml")).unwrap();
        assert_eq!(config.storage_path, AppConfig::default().storage_path);
    }
}
