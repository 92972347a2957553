//! Training load and performance analytics for strength-training clients.
//!
//! Every analytics function is pure over a session snapshot and takes `today`
//! explicitly. Storage and configuration live at the edges (`db`, `config`).

pub mod catalog;
pub mod config;
pub mod daily_load;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod progression;
pub mod scoring;
pub mod volume;
pub mod workload;

#[cfg(test)]
mod test_utils;

pub use config::AnalyticsConfig;
pub use daily_load::{build_daily_series, DayLoad};
pub use dashboard::{build_client_dashboard, ClientDashboard};
pub use db::{initialize_db, DbPool, SessionRepository, SqliteSessionRepository};
pub use error::AnalyticsError;
pub use models::{
  DailyLoadMetric, ExerciseEntry, MuscleVolumeEntry, PerformanceAxis, PerformanceScoreSet,
  PlannedExercise, ProgramTargets, Session, SessionStatus, SetEntry, WeeklySeries,
};
pub use normalizer::{
  normalize_muscle, resolve_entry, resolve_exercise, BodyRegion, CanonicalMuscle, MuscleGroup,
};
pub use progression::{
  analyze_progression, analyze_progression_with, estimated_one_rep_max, ExerciseProgress,
  ProgressionResult, WeeklyVolumeComparison,
};
pub use scoring::{score_performance, AnalyticsMetrics, DashboardStats};
pub use volume::{aggregate_volume, volume_totals, week_key, TimeRange, VolumeMetric};
pub use workload::{
  acwr_status, compute_acwr, load_zone, summarize_workload, AcwrStatus, LoadZone,
  WorkloadSnapshot,
};
