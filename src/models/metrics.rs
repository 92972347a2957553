use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar day of the training-load timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLoadMetric {
  pub date: NaiveDate,
  /// Midnight UTC of `date`, in milliseconds since the epoch
  pub timestamp: i64,
  /// Load in UA, rounded to the nearest integer
  pub daily_load: i64,
  pub avg_rir: f64,
  /// 7-day rolling average
  pub acute_load: f64,
  /// 28-day rolling average
  pub chronic_load: f64,
  /// acute / chronic, 0 when there is no chronic base
  pub acwr: f64,
}

/// Per-muscle accumulated volume for one Monday-anchored week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleVolumeEntry {
  pub week_start: NaiveDate,
  /// Keyed by muscle label; every week carries the same key set
  pub volumes: BTreeMap<String, f64>,
}

impl MuscleVolumeEntry {
  pub fn value(&self, muscle_label: &str) -> f64 {
    self.volumes.get(muscle_label).copied().unwrap_or(0.0)
  }
}

/// Weekly buckets, oldest first
pub type WeeklySeries = Vec<MuscleVolumeEntry>;

/// ---------------------------------------------------------------------------
/// Performance score axes
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceAxis {
  Consistency,
  UpperBodyVolume,
  LowerBodyVolume,
  Progression,
  Intensity,
}

impl PerformanceAxis {
  pub const ALL: [PerformanceAxis; 5] = [
    PerformanceAxis::Consistency,
    PerformanceAxis::UpperBodyVolume,
    PerformanceAxis::LowerBodyVolume,
    PerformanceAxis::Progression,
    PerformanceAxis::Intensity,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      PerformanceAxis::Consistency => "Consistency",
      PerformanceAxis::UpperBodyVolume => "Upper-Body Volume",
      PerformanceAxis::LowerBodyVolume => "Lower-Body Volume",
      PerformanceAxis::Progression => "Progression",
      PerformanceAxis::Intensity => "Intensity",
    }
  }
}

/// Five independently clamped 0-100 scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PerformanceScoreSet {
  pub consistency: u8,
  pub upper_body_volume: u8,
  pub lower_body_volume: u8,
  pub progression: u8,
  pub intensity: u8,
}

impl PerformanceScoreSet {
  pub fn get(&self, axis: PerformanceAxis) -> u8 {
    match axis {
      PerformanceAxis::Consistency => self.consistency,
      PerformanceAxis::UpperBodyVolume => self.upper_body_volume,
      PerformanceAxis::LowerBodyVolume => self.lower_body_volume,
      PerformanceAxis::Progression => self.progression,
      PerformanceAxis::Intensity => self.intensity,
    }
  }

  /// Axes in radar-chart order
  pub fn axes(&self) -> [(PerformanceAxis, u8); 5] {
    PerformanceAxis::ALL.map(|axis| (axis, self.get(axis)))
  }
}
