use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::AnalyticsError;
use crate::progression::DEFAULT_MIN_COMPARISONS;
use crate::volume::{TimeRange, VolumeMetric};

pub const DB_PATH_VAR: &str = "TRAINING_ANALYTICS_DB";
pub const MIN_COMPARISONS_VAR: &str = "PROGRESSION_MIN_COMPARISONS";
pub const VOLUME_RANGE_VAR: &str = "VOLUME_DEFAULT_RANGE";
pub const VOLUME_METRIC_VAR: &str = "VOLUME_METRIC";

/// Engine settings read from the environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
  /// SQLite file backing the session repository, if any
  pub database_path: Option<PathBuf>,
  pub min_progression_comparisons: usize,
  pub volume_range: TimeRange,
  pub volume_metric: VolumeMetric,
}

impl Default for AnalyticsConfig {
  fn default() -> Self {
    Self {
      database_path: None,
      min_progression_comparisons: DEFAULT_MIN_COMPARISONS,
      volume_range: TimeRange::default(),
      volume_metric: VolumeMetric::default(),
    }
  }
}

impl AnalyticsConfig {
  /// Load `.env` (if present) and then read the environment
  pub fn load() -> Result<Self, AnalyticsError> {
    dotenvy::dotenv().ok();
    Self::from_env()
  }

  /// Read settings from the environment. Unset variables keep their defaults,
  /// set-but-invalid ones are an error.
  pub fn from_env() -> Result<Self, AnalyticsError> {
    let defaults = Self::default();

    Ok(Self {
      database_path: env::var(DB_PATH_VAR)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from),
      min_progression_comparisons: match env::var(MIN_COMPARISONS_VAR) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
          AnalyticsError::InvalidConfig(format!(
            "{} must be a non-negative integer, got {:?}",
            MIN_COMPARISONS_VAR, raw
          ))
        })?,
        Err(_) => defaults.min_progression_comparisons,
      },
      volume_range: match env::var(VOLUME_RANGE_VAR) {
        Ok(raw) => raw.parse().map_err(|e: String| {
          AnalyticsError::InvalidConfig(format!("{}: {}", VOLUME_RANGE_VAR, e))
        })?,
        Err(_) => defaults.volume_range,
      },
      volume_metric: match env::var(VOLUME_METRIC_VAR) {
        Ok(raw) => raw.parse().map_err(|e: String| {
          AnalyticsError::InvalidConfig(format!("{}: {}", VOLUME_METRIC_VAR, e))
        })?,
        Err(_) => defaults.volume_metric,
      },
    })
  }

  pub fn require_database_path(&self) -> Result<&PathBuf, AnalyticsError> {
    self
      .database_path
      .as_ref()
      .ok_or_else(|| AnalyticsError::MissingConfig(DB_PATH_VAR.into()))
  }
}
