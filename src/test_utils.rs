//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Session and exercise factories
//! - Date helpers

use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::models::{ExerciseEntry, Session, SessionStatus, SetEntry};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) so every query sees the same in-memory database
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Store sessions as JSON payload rows for `client_id`
pub async fn seed_test_sessions(pool: &SqlitePool, client_id: &str, sessions: &[Session]) {
  for session in sessions {
    let payload = serde_json::to_string(session).expect("Failed to encode session");
    sqlx::query(
      r#"
      INSERT INTO sessions (id, client_id, session_date, payload_json)
      VALUES (?1, ?2, ?3, ?4)
      "#,
    )
    .bind(&session.id)
    .bind(client_id)
    .bind(&session.date)
    .bind(payload)
    .execute(pool)
    .await
    .expect("Failed to insert test session");
  }
}

/// ---------------------------------------------------------------------------
/// Session Factories
/// ---------------------------------------------------------------------------

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Completed session for "client-1". Totals are left at zero so they are
/// derived from the entries.
pub fn make_session(id: &str, date: &str, exercises: Vec<ExerciseEntry>) -> Session {
  Session {
    id: id.to_string(),
    client_id: "client-1".to_string(),
    date: date.to_string(),
    duration_seconds: 3600,
    exercises,
    total_sets: 0,
    total_volume_load: 0.0,
    status: SessionStatus::Completed,
    rpe: None,
  }
}

/// Completed session `days_ago` days before `today`
pub fn session_on(today: NaiveDate, days_ago: i64, exercises: Vec<ExerciseEntry>) -> Session {
  let day = today - Duration::days(days_ago);
  make_session(&format!("s-{}", day), &day.format("%Y-%m-%d").to_string(), exercises)
}

/// Exercise with per-set detail: (weight, reps, rir)
pub fn detailed_entry(name: &str, sets: &[(f64, u32, Option<f64>)]) -> ExerciseEntry {
  ExerciseEntry {
    name: name.to_string(),
    muscle_group: None,
    set_details: sets
      .iter()
      .map(|&(weight, reps, rir)| SetEntry::new(weight, reps, rir))
      .collect(),
    sets: None,
    volume_load: None,
  }
}

/// Exercise with only aggregate sets and volume-load
pub fn fallback_entry(
  name: &str,
  muscle_group: Option<&str>,
  sets: u32,
  volume_load: f64,
) -> ExerciseEntry {
  ExerciseEntry {
    name: name.to_string(),
    muscle_group: muscle_group.map(str::to_string),
    set_details: Vec::new(),
    sets: Some(sets),
    volume_load: Some(volume_load),
  }
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> =
      sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = 'sessions'")
        .fetch_all(&pool)
        .await
        .expect("Failed to query tables");

    assert_eq!(tables.len(), 1, "Expected sessions table, got {:?}", tables);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_sessions_inserts_rows() {
    let pool = setup_test_db().await;
    let sessions = vec![
      make_session("a", "2024-01-03", vec![]),
      make_session("b", "2024-01-05", vec![]),
    ];

    seed_test_sessions(&pool, "client-1", &sessions).await;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
      .fetch_one(&pool)
      .await
      .expect("Failed to count sessions");
    assert_eq!(count, 2);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_session_on_counts_back_from_today() {
    let today = date(2024, 3, 15);
    let session = session_on(today, 7, vec![]);
    assert_eq!(session.date, "2024-03-08");
    assert_eq!(session.days_before(today), Some(7));
  }
}
