use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

/// Errors raised at the collaborator boundary (configuration, storage).
/// The analytics functions themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

impl Serialize for AnalyticsError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_serializes_as_message() {
    let err = AnalyticsError::MissingConfig("TRAINING_ANALYTICS_DB".into());
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, "\"Missing configuration: TRAINING_ANALYTICS_DB\"");
  }

  #[test]
  fn test_sqlx_error_converts() {
    let err: AnalyticsError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, AnalyticsError::Database(_)));
    assert!(err.to_string().starts_with("Database error:"));
  }
}
