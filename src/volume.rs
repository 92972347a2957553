//! Muscle volume attribution by week
//!
//! Sessions are bucketed into Monday-anchored weeks. Each exercise credits its
//! agonists in full and its synergists at half, using either set counts or
//! volume-load. Every week ends up with the same muscle key set.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ExerciseEntry, MuscleVolumeEntry, Session, WeeklySeries};
use crate::normalizer::{resolve_entry, CanonicalMuscle};

/// Share of the metric credited to each synergist
pub const SYNERGIST_CREDIT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeRange {
  #[serde(rename = "1M")]
  OneMonth,
  #[default]
  #[serde(rename = "3M")]
  ThreeMonths,
  #[serde(rename = "6M")]
  SixMonths,
  #[serde(rename = "YTD")]
  YearToDate,
  #[serde(rename = "ALL")]
  All,
}

impl TimeRange {
  pub fn as_str(&self) -> &'static str {
    match self {
      TimeRange::OneMonth => "1M",
      TimeRange::ThreeMonths => "3M",
      TimeRange::SixMonths => "6M",
      TimeRange::YearToDate => "YTD",
      TimeRange::All => "ALL",
    }
  }

  /// Inclusive lower bound of the range, None for no bound
  pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
    match self {
      TimeRange::OneMonth => today.checked_sub_months(Months::new(1)),
      TimeRange::ThreeMonths => today.checked_sub_months(Months::new(3)),
      TimeRange::SixMonths => today.checked_sub_months(Months::new(6)),
      TimeRange::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1),
      TimeRange::All => None,
    }
  }
}

impl std::str::FromStr for TimeRange {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_uppercase().as_str() {
      "1M" => Ok(Self::OneMonth),
      "3M" => Ok(Self::ThreeMonths),
      "6M" => Ok(Self::SixMonths),
      "YTD" => Ok(Self::YearToDate),
      "ALL" => Ok(Self::All),
      _ => Err(format!("Unknown time range: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VolumeMetric {
  #[default]
  Sets,
  Load,
}

impl VolumeMetric {
  fn value_of(&self, entry: &ExerciseEntry) -> f64 {
    match self {
      VolumeMetric::Sets => entry.set_count(),
      VolumeMetric::Load => entry.volume_load(),
    }
  }
}

impl std::str::FromStr for VolumeMetric {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "sets" => Ok(Self::Sets),
      "load" => Ok(Self::Load),
      _ => Err(format!("Unknown volume metric: {}", s)),
    }
  }
}

/// Monday of the week containing `date`
pub fn week_key(date: NaiveDate) -> NaiveDate {
  date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Aggregate per-muscle volume into weekly buckets, oldest week first.
///
/// Only completed sessions dated within `[range start, today]` count.
/// Unresolved exercises credit their coarse label in full.
pub fn aggregate_volume(
  sessions: &[Session],
  range: TimeRange,
  metric: VolumeMetric,
  today: NaiveDate,
) -> WeeklySeries {
  let lower_bound = range.start_date(today);
  let mut weeks: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();
  let mut keys: BTreeSet<String> = CanonicalMuscle::ALL
    .iter()
    .map(|m| m.label().to_string())
    .collect();

  for session in sessions.iter().filter(|s| s.is_completed()) {
    let Some(date) = session.calendar_date() else {
      tracing::warn!(
        session_id = %session.id,
        raw_date = %session.date,
        "skipping session with malformed date"
      );
      continue;
    };
    if date > today || lower_bound.is_some_and(|start| date < start) {
      continue;
    }

    let bucket = weeks.entry(week_key(date)).or_default();
    for entry in &session.exercises {
      let value = metric.value_of(entry);
      let resolution = resolve_entry(entry);

      for muscle in &resolution.agonists {
        *bucket.entry(muscle.label().to_string()).or_insert(0.0) += value;
      }
      for muscle in &resolution.synergists {
        *bucket.entry(muscle.label().to_string()).or_insert(0.0) += value * SYNERGIST_CREDIT;
      }
    }
    keys.extend(bucket.keys().cloned());
  }

  // Back-fill so every week exposes the same keys
  let series: WeeklySeries = weeks
    .into_iter()
    .map(|(week_start, mut volumes)| {
      for key in &keys {
        volumes.entry(key.clone()).or_insert(0.0);
      }
      MuscleVolumeEntry { week_start, volumes }
    })
    .collect();

  tracing::debug!(
    weeks = series.len(),
    range = range.as_str(),
    metric = ?metric,
    "aggregated muscle volume"
  );

  series
}

/// Total per muscle across all weeks of a series
pub fn volume_totals(series: &WeeklySeries) -> BTreeMap<String, f64> {
  let mut totals = BTreeMap::new();
  for week in series {
    for (muscle, value) in &week.volumes {
      *totals.entry(muscle.clone()).or_insert(0.0) += value;
    }
  }
  totals
}
