//! Run configuration read from a JSON file
//!
//! Every field is optional; missing fields fall back to the defaults below.
//!
//! ```json
//! { "step": 500, "months": 12, "visits": 6, "format": "chart" }
//! ```

use crate::cost::CostOptions;
use crate::plan::MONTHS_PER_YEAR;
use crate::report::{ChartSize, OutputFormat};
use crate::sweep::{SweepConfig, DEFAULT_MAX_LEVELS, DEFAULT_STEP};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareConfig {
    /// Distance between spend levels
    #[serde(default = "default_step")]
    pub step: f64,

    /// Months of premium per coverage period
    #[serde(default = "default_months")]
    pub months: u32,

    /// Expected office visits (copay multiplier)
    #[serde(default)]
    pub visits: Option<u32>,

    /// Upper bound on spend levels per sweep
    #[serde(default = "default_max_levels")]
    pub max_levels: usize,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

fn default_step() -> f64 { DEFAULT_STEP }
fn default_months() -> u32 { MONTHS_PER_YEAR }
fn default_max_levels() -> usize { DEFAULT_MAX_LEVELS }
fn default_chart_width() -> usize { ChartSize::default().width }
fn default_chart_height() -> usize { ChartSize::default().height }

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            months: MONTHS_PER_YEAR,
            visits: None,
            max_levels: DEFAULT_MAX_LEVELS,
            format: OutputFormat::Table,
            chart_width: ChartSize::default().width,
            chart_height: ChartSize::default().height,
        }
    }
}

impl CompareConfig {
    /// Read configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Sweep settings for a run up to `max_spend`
    pub fn sweep_config(&self, max_spend: f64) -> SweepConfig {
        SweepConfig {
            max_spend,
            step: self.step,
            max_levels: self.max_levels,
            cost: CostOptions {
                months: self.months,
                visits: self.visits,
            },
        }
    }

    pub fn chart_size(&self) -> ChartSize {
        ChartSize {
            width: self.chart_width,
            height: self.chart_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: CompareConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CompareConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: CompareConfig =
            serde_json::from_str(r#"{"step": 250, "visits": 4, "format": "csv"}"#).unwrap();

        assert_eq!(config.step, 250.0);
        assert_eq!(config.visits, Some(4));
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.months, 12);

        let sweep = config.sweep_config(20_000.0);
        assert_eq!(sweep.max_spend, 20_000.0);
        assert_eq!(sweep.step, 250.0);
        assert_eq!(sweep.cost.visits, Some(4));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<CompareConfig, _> = serde_json::from_str(r#"{"tax": 0.3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("compare_config_ok_{}.json", std::process::id()));
        fs::write(&path, r#"{"step": 500, "months": 6}"#).unwrap();
        let config = CompareConfig::load(&path);
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.step, 500.0);
        assert_eq!(config.months, 6);
    }

    #[test]
    fn test_malformed_file() {
        let path = std::env::temp_dir().join(format!("compare_config_bad_{}.json", std::process::id()));
        fs::write(&path, r#"{"step": "wide"}"#).unwrap();
        let err = CompareConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        match err {
            ConfigError::Parse { path: reported, .. } => {
                assert_eq!(reported, path.display().to_string());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = CompareConfig::load("no/such/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
