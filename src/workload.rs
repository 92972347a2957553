//! Rolling workload: gap-filled daily timeline with acute/chronic averages
//!
//! The daily series is densified to one entry per calendar day from the first
//! completed session up to `today`, then two running sums (7 and 28 days) are
//! slid across it in O(1) per day. Rounding happens only when a metric is
//! emitted, never inside the sums.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::daily_load::build_daily_series;
use crate::models::{DailyLoadMetric, Session};

pub const ACUTE_WINDOW_DAYS: usize = 7;
pub const CHRONIC_WINDOW_DAYS: usize = 28;

/// Round half away from zero to `decimals` places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
  let factor = 10f64.powi(decimals);
  (value * factor).round() / factor
}

/// Compute the ACWR timeline, oldest day first.
///
/// Empty when there are no completed sessions on or before `today`.
pub fn compute_acwr(sessions: &[Session], today: NaiveDate) -> Vec<DailyLoadMetric> {
  let series = build_daily_series(sessions);

  let Some(start_date) = series.keys().next().copied() else {
    return Vec::new();
  };
  if start_date > today {
    return Vec::new();
  }

  // Gap fill: every calendar day in [start_date, today]
  let days: Vec<NaiveDate> = start_date.iter_days().take_while(|d| *d <= today).collect();
  let loads: Vec<f64> = days
    .iter()
    .map(|d| series.get(d).map_or(0.0, |day| day.load))
    .collect();

  let mut metrics = Vec::with_capacity(days.len());
  let mut acute_sum = 0.0;
  let mut chronic_sum = 0.0;

  for (i, date) in days.iter().enumerate() {
    let load = loads[i];

    acute_sum += load;
    if i >= ACUTE_WINDOW_DAYS {
      acute_sum -= loads[i - ACUTE_WINDOW_DAYS];
    }
    chronic_sum += load;
    if i >= CHRONIC_WINDOW_DAYS {
      chronic_sum -= loads[i - CHRONIC_WINDOW_DAYS];
    }

    // Float subtraction can leave -0.000...1 behind on an emptied window
    let acute = acute_sum.max(0.0) / ACUTE_WINDOW_DAYS as f64;
    let chronic = chronic_sum.max(0.0) / CHRONIC_WINDOW_DAYS as f64;

    let chronic_load = round_to(chronic, 1);
    let acwr = if chronic_load > 0.0 {
      round_to(acute / chronic, 2)
    } else {
      0.0
    };

    metrics.push(DailyLoadMetric {
      date: *date,
      timestamp: date.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
      daily_load: load.round() as i64,
      avg_rir: round_to(series.get(date).map_or(0.0, |day| day.avg_rir), 1),
      acute_load: round_to(acute, 1),
      chronic_load,
      acwr,
    });
  }

  tracing::debug!(
    days = metrics.len(),
    start = %start_date,
    end = %today,
    "computed ACWR timeline"
  );

  metrics
}

/// ---------------------------------------------------------------------------
/// Classification lookups
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadZone {
  LowRecovery,     // < 80
  ModerateTarget,  // 80-150
  High,            // 150-220
  ExtremeAlert,    // > 220
}

impl LoadZone {
  pub fn as_str(&self) -> &'static str {
    match self {
      LoadZone::LowRecovery => "Low/Recovery",
      LoadZone::ModerateTarget => "Moderate/Target",
      LoadZone::High => "High",
      LoadZone::ExtremeAlert => "Extreme/Alert",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrStatus {
  InsufficientData,
  Undertraining,
  SweetSpot,
  ElevatedRisk,
  HighInjuryRisk,
}

impl AcwrStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      AcwrStatus::InsufficientData => "Insufficient data",
      AcwrStatus::Undertraining => "Undertraining",
      AcwrStatus::SweetSpot => "Sweet spot",
      AcwrStatus::ElevatedRisk => "Elevated risk",
      AcwrStatus::HighInjuryRisk => "High injury risk",
    }
  }
}

pub fn load_zone(load: f64) -> LoadZone {
  match load {
    l if l < 80.0 => LoadZone::LowRecovery,
    l if l <= 150.0 => LoadZone::ModerateTarget,
    l if l <= 220.0 => LoadZone::High,
    l if l.is_nan() => LoadZone::LowRecovery,
    _ => LoadZone::ExtremeAlert,
  }
}

pub fn acwr_status(ratio: f64) -> AcwrStatus {
  match ratio {
    r if r == 0.0 || r.is_nan() => AcwrStatus::InsufficientData,
    r if r < 0.8 => AcwrStatus::Undertraining,
    r if r <= 1.3 => AcwrStatus::SweetSpot,
    r if r <= 1.5 => AcwrStatus::ElevatedRisk,
    _ => AcwrStatus::HighInjuryRisk,
  }
}

/// ---------------------------------------------------------------------------
/// Latest-day summary
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSnapshot {
  pub latest: DailyLoadMetric,
  pub zone: LoadZone,
  pub status: AcwrStatus,
  /// Sum of daily loads over the trailing acute window
  pub week_total_load: i64,
}

/// Summarise the most recent day of an ACWR timeline
pub fn summarize_workload(metrics: &[DailyLoadMetric]) -> Option<WorkloadSnapshot> {
  let latest = metrics.last()?.clone();
  let week_total_load = metrics
    .iter()
    .rev()
    .take(ACUTE_WINDOW_DAYS)
    .map(|m| m.daily_load)
    .sum();

  Some(WorkloadSnapshot {
    zone: load_zone(latest.daily_load as f64),
    status: acwr_status(latest.acwr),
    latest,
    week_total_load,
  })
}
