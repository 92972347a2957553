use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::Path;

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::models::Session;

pub type DbPool = SqlitePool;

/// Source of session snapshots for a client
#[async_trait]
pub trait SessionRepository: Send + Sync {
  async fn get_sessions(&self, client_id: &str) -> Result<Vec<Session>, AnalyticsError>;
}

/// Open (or create) the database file at `path` and run migrations
pub async fn initialize_db(path: &Path) -> Result<DbPool, AnalyticsError> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }
  let db_url = format!("sqlite://{}?mode=rwc", path.display());

  tracing::info!(path = %path.display(), "initializing session database");

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("session database ready");

  Ok(pool)
}

/// Sessions stored as one JSON payload per row
#[derive(Debug, Clone)]
pub struct SqliteSessionRepository {
  pool: DbPool,
}

impl SqliteSessionRepository {
  pub fn new(pool: DbPool) -> Self {
    Self { pool }
  }

  /// Open the database named by `TRAINING_ANALYTICS_DB`
  pub async fn from_config(config: &AnalyticsConfig) -> Result<Self, AnalyticsError> {
    let pool = initialize_db(config.require_database_path()?).await?;
    Ok(Self::new(pool))
  }

  pub fn pool(&self) -> &DbPool {
    &self.pool
  }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
  async fn get_sessions(&self, client_id: &str) -> Result<Vec<Session>, AnalyticsError> {
    let rows: Vec<(String, String)> = sqlx::query_as(
      r#"
      SELECT id, payload_json
      FROM sessions
      WHERE client_id = ?1
      ORDER BY session_date ASC, id ASC
      "#,
    )
    .bind(client_id)
    .fetch_all(&self.pool)
    .await?;

    let total = rows.len();
    let sessions: Vec<Session> = rows
      .into_iter()
      .filter_map(|(id, payload)| match serde_json::from_str::<Session>(&payload) {
        Ok(mut session) => {
          if session.id.is_empty() {
            session.id = id;
          }
          if session.client_id.is_empty() {
            session.client_id = client_id.to_string();
          }
          Some(session)
        }
        Err(e) => {
          tracing::warn!(session_id = %id, error = %e, "skipping undecodable session payload");
          None
        }
      })
      .collect();

    tracing::debug!(client_id, rows = total, decoded = sessions.len(), "loaded sessions");

    Ok(sessions)
  }
}
