//! Performance scoring
//!
//! Five 0-100 axes for the radar chart: consistency, upper and lower body
//! volume adherence, progression and intensity. Every axis is clamped and
//! rounded on its own; a missing or degenerate input scores 0, never NaN.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PerformanceScoreSet, ProgramTargets, Session};
use crate::normalizer::{resolve_entry, BodyRegion};
use crate::progression::ProgressionResult;
use crate::volume::week_key;

/// Completed sessions in the Monday-anchored week ending at `today`
fn current_week<'a>(
  sessions: &'a [Session],
  today: NaiveDate,
) -> impl Iterator<Item = &'a Session> {
  let week_start = week_key(today);
  sessions.iter().filter(move |s| {
    s.is_completed()
      && s
        .calendar_date()
        .is_some_and(|d| d >= week_start && d <= today)
  })
}

// ---------------------------------------------------------------------------
/// Score inputs
// ---------------------------------------------------------------------------

/// Session counts for the current week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
  pub sessions_this_week: u32,
  pub planned_sessions_this_week: f64,
}

impl DashboardStats {
  pub fn compute(sessions: &[Session], targets: &ProgramTargets, today: NaiveDate) -> Self {
    Self {
      sessions_this_week: current_week(sessions, today).count() as u32,
      planned_sessions_this_week: targets.planned_sessions(),
    }
  }
}

/// Sets per body region and average effort for the current week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyticsMetrics {
  pub upper_sets: f64,
  pub lower_sets: f64,
  /// Mean RPE, None when nothing this week carried effort data
  pub average_rpe: Option<f64>,
}

impl AnalyticsMetrics {
  pub fn compute(sessions: &[Session], today: NaiveDate) -> Self {
    let mut metrics = Self::default();
    let mut set_efforts: Vec<f64> = Vec::new();
    let mut session_efforts: Vec<f64> = Vec::new();

    for session in current_week(sessions, today) {
      for entry in &session.exercises {
        match resolve_entry(entry).primary().region() {
          Some(BodyRegion::Upper) => metrics.upper_sets += entry.set_count(),
          Some(BodyRegion::Lower) => metrics.lower_sets += entry.set_count(),
          _ => {}
        }
        set_efforts.extend(entry.set_details.iter().filter_map(|s| s.effort_rpe()));
      }
      if let Some(rpe) = session.rpe.filter(|r| r.is_finite()) {
        session_efforts.push(rpe);
      }
    }

    // Per-set effort wins; session RPE only when no set reported any
    metrics.average_rpe = mean(&set_efforts).or_else(|| mean(&session_efforts));
    metrics
  }
}

fn mean(values: &[f64]) -> Option<f64> {
  if values.is_empty() {
    None
  } else {
    Some(values.iter().sum::<f64>() / values.len() as f64)
  }
}

// ---------------------------------------------------------------------------
/// Axis scores
// ---------------------------------------------------------------------------

/// Round and clamp to 0-100, NaN is 0
pub fn clamp_score(value: f64) -> u8 {
  if value.is_nan() {
    return 0;
  }
  value.round().clamp(0.0, 100.0) as u8
}

pub fn consistency_score(actual_sessions: f64, planned_sessions: f64) -> u8 {
  if !planned_sessions.is_finite() || planned_sessions <= 0.0 {
    return 0;
  }
  clamp_score(100.0 * actual_sessions / planned_sessions)
}

/// Set adherence for one body region. Unplanned work still earns full credit.
pub fn volume_score(actual_sets: f64, planned_sets: f64) -> u8 {
  let actual = if actual_sets.is_finite() { actual_sets } else { 0.0 };
  if !planned_sets.is_finite() || planned_sets <= 0.0 {
    return if actual > 0.0 { 100 } else { 0 };
  }
  clamp_score(100.0 * actual / planned_sets)
}

pub fn intensity_score(average_rpe: Option<f64>) -> u8 {
  match average_rpe.filter(|r| !r.is_nan()) {
    None => 0,
    Some(rpe) if (8.0..=9.5).contains(&rpe) => 100,
    Some(rpe) if (7.0..8.0).contains(&rpe) => 85,
    Some(rpe) if rpe > 9.5 => 70,
    Some(rpe) if rpe < 6.0 => 40,
    Some(_) => 60,
  }
}

/// Combine the week's inputs into the five radar axes
pub fn score_performance(
  stats: &DashboardStats,
  metrics: &AnalyticsMetrics,
  progression: &ProgressionResult,
  targets: &ProgramTargets,
) -> PerformanceScoreSet {
  let scores = PerformanceScoreSet {
    consistency: consistency_score(
      stats.sessions_this_week as f64,
      stats.planned_sessions_this_week,
    ),
    upper_body_volume: volume_score(
      metrics.upper_sets,
      targets.planned_region_sets(BodyRegion::Upper),
    ),
    lower_body_volume: volume_score(
      metrics.lower_sets,
      targets.planned_region_sets(BodyRegion::Lower),
    ),
    progression: progression.progress_score.min(100),
    intensity: intensity_score(metrics.average_rpe),
  };

  tracing::debug!(?scores, "scored performance");

  scores
}
