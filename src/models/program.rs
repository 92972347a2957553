use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::normalizer::{resolve_named, BodyRegion};

/// Targets supplied by the program-management side
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramTargets {
  #[serde(default)]
  pub planned_sessions_per_week: f64,
  #[serde(default)]
  pub planned_exercises: Vec<PlannedExercise>,
  /// Muscle groups trained on each weekday
  #[serde(default)]
  pub muscle_schedule: HashMap<Weekday, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
  pub name: String,
  #[serde(default)]
  pub muscle_group: Option<String>,
  #[serde(default)]
  pub sets: u32,
}

impl ProgramTargets {
  /// Planned sessions for the week. Falls back to the number of scheduled
  /// days when no explicit count was given.
  pub fn planned_sessions(&self) -> f64 {
    if self.planned_sessions_per_week.is_finite() && self.planned_sessions_per_week > 0.0 {
      self.planned_sessions_per_week
    } else {
      self
        .muscle_schedule
        .values()
        .filter(|groups| !groups.is_empty())
        .count() as f64
    }
  }

  /// Planned weekly sets for exercises whose primary muscle sits in `region`
  pub fn planned_region_sets(&self, region: BodyRegion) -> f64 {
    self
      .planned_exercises
      .iter()
      .filter(|ex| {
        resolve_named(&ex.name, ex.muscle_group.as_deref())
          .primary()
          .region()
          == Some(region)
      })
      .map(|ex| ex.sets as f64)
      .sum()
  }
}
