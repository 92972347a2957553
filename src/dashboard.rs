//! Client dashboard: everything the analytics view renders for one client,
//! computed from a single session snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::db::SessionRepository;
use crate::error::AnalyticsError;
use crate::models::{
  DailyLoadMetric, PerformanceScoreSet, ProgramTargets, Session, WeeklySeries,
};
use crate::progression::{analyze_progression_with, ProgressionResult};
use crate::scoring::{score_performance, AnalyticsMetrics, DashboardStats};
use crate::volume::aggregate_volume;
use crate::workload::{compute_acwr, summarize_workload, WorkloadSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDashboard {
  pub client_id: String,
  pub generated_for: NaiveDate,
  pub daily_load: Vec<DailyLoadMetric>,
  pub workload: Option<WorkloadSnapshot>,
  pub muscle_volume: WeeklySeries,
  pub progression: ProgressionResult,
  pub scores: PerformanceScoreSet,
}

impl ClientDashboard {
  /// Run every analytics component over one snapshot
  pub fn compute(
    client_id: &str,
    sessions: &[Session],
    targets: &ProgramTargets,
    today: NaiveDate,
    config: &AnalyticsConfig,
  ) -> Self {
    let daily_load = compute_acwr(sessions, today);
    let workload = summarize_workload(&daily_load);
    let muscle_volume =
      aggregate_volume(sessions, config.volume_range, config.volume_metric, today);
    let progression =
      analyze_progression_with(sessions, today, config.min_progression_comparisons);

    let stats = DashboardStats::compute(sessions, targets, today);
    let metrics = AnalyticsMetrics::compute(sessions, today);
    let scores = score_performance(&stats, &metrics, &progression, targets);

    Self {
      client_id: client_id.to_string(),
      generated_for: today,
      daily_load,
      workload,
      muscle_volume,
      progression,
      scores,
    }
  }
}

/// Fetch a client's sessions and build their dashboard. A repository failure
/// is returned as-is and nothing is computed.
pub async fn build_client_dashboard<R: SessionRepository>(
  repo: &R,
  client_id: &str,
  targets: &ProgramTargets,
  today: NaiveDate,
  config: &AnalyticsConfig,
) -> Result<ClientDashboard, AnalyticsError> {
  let sessions = repo.get_sessions(client_id).await?;

  tracing::debug!(client_id, sessions = sessions.len(), %today, "building client dashboard");

  Ok(ClientDashboard::compute(client_id, &sessions, targets, today, config))
}
