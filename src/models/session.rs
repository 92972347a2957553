use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a session. Only `Completed` sessions feed the analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
  Completed,
  Planned,
  Missed,
  /// Anything the store sent that we don't recognise
  #[default]
  Unknown,
}

impl std::fmt::Display for SessionStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Completed => write!(f, "completed"),
      Self::Planned => write!(f, "planned"),
      Self::Missed => write!(f, "missed"),
      Self::Unknown => write!(f, "unknown"),
    }
  }
}

impl std::str::FromStr for SessionStatus {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "completed" => Ok(Self::Completed),
      "planned" => Ok(Self::Planned),
      "missed" => Ok(Self::Missed),
      _ => Err(format!("Unknown session status: {}", s)),
    }
  }
}

impl<'de> Deserialize<'de> for SessionStatus {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(
      value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or(SessionStatus::Unknown),
    )
  }
}

/// ---------------------------------------------------------------------------
/// Session snapshot (owned by the session store, read-only here)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub client_id: String,
  /// Raw calendar timestamp as stored; see [`Session::calendar_date`]
  #[serde(default)]
  pub date: String,
  #[serde(default, deserialize_with = "lenient_u32")]
  pub duration_seconds: u32,
  #[serde(default)]
  pub exercises: Vec<ExerciseEntry>,
  #[serde(default, deserialize_with = "lenient_u32")]
  pub total_sets: u32,
  #[serde(default, deserialize_with = "lenient_f64")]
  pub total_volume_load: f64,
  #[serde(default)]
  pub status: SessionStatus,
  /// Session-level RPE, used for intensity only when no set carries effort data
  #[serde(default, deserialize_with = "lenient_opt_f64")]
  pub rpe: Option<f64>,
}

impl Session {
  pub fn is_completed(&self) -> bool {
    self.status == SessionStatus::Completed
  }

  /// Calendar day of the session, or None when the stored date can't be parsed
  pub fn calendar_date(&self) -> Option<NaiveDate> {
    parse_calendar_date(&self.date)
  }

  /// Whole days between the session and `today` (negative for future sessions)
  pub fn days_before(&self, today: NaiveDate) -> Option<i64> {
    self.calendar_date().map(|d| (today - d).num_days())
  }

  /// Stored volume-load, recomputed from the entries when the store left it empty
  pub fn volume_load(&self) -> f64 {
    if self.total_volume_load > 0.0 {
      self.total_volume_load
    } else {
      self.exercises.iter().map(ExerciseEntry::volume_load).sum()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
  #[serde(default)]
  pub name: String,
  /// Coarse free-text muscle label, used when the catalog doesn't know the exercise
  #[serde(default)]
  pub muscle_group: Option<String>,
  #[serde(default)]
  pub set_details: Vec<SetEntry>,
  /// Fallback aggregate, only meaningful when `set_details` is empty
  #[serde(default, deserialize_with = "lenient_opt_u32")]
  pub sets: Option<u32>,
  /// Fallback aggregate, only meaningful when `set_details` is empty
  #[serde(default, deserialize_with = "lenient_opt_f64")]
  pub volume_load: Option<f64>,
}

impl ExerciseEntry {
  pub fn has_set_detail(&self) -> bool {
    !self.set_details.is_empty()
  }

  /// Number of sets performed, detail first, aggregate second
  pub fn set_count(&self) -> f64 {
    if self.has_set_detail() {
      self.set_details.len() as f64
    } else {
      self.sets.unwrap_or(0) as f64
    }
  }

  /// Sum of weight x reps, detail first, aggregate second
  pub fn volume_load(&self) -> f64 {
    if self.has_set_detail() {
      self.set_details.iter().map(SetEntry::volume_load).sum()
    } else {
      self.volume_load.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(0.0)
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
  #[serde(default, deserialize_with = "lenient_f64")]
  pub weight: f64,
  #[serde(default, deserialize_with = "lenient_u32")]
  pub reps: u32,
  #[serde(default, deserialize_with = "lenient_opt_f64")]
  pub rir: Option<f64>,
  #[serde(default, deserialize_with = "lenient_opt_f64")]
  pub rpe: Option<f64>,
}

impl SetEntry {
  pub fn new(weight: f64, reps: u32, rir: Option<f64>) -> Self {
    Self {
      weight,
      reps,
      rir,
      rpe: None,
    }
  }

  /// RIR for load purposes: missing or invalid counts as 0
  pub fn safe_rir(&self) -> f64 {
    self.rir.filter(|r| !r.is_nan()).unwrap_or(0.0)
  }

  /// Reported effort on the RPE scale. Explicit RPE wins, otherwise 10 - RIR.
  /// None when the set carries no usable effort data.
  pub fn effort_rpe(&self) -> Option<f64> {
    self
      .rpe
      .filter(|r| r.is_finite())
      .or_else(|| self.rir.filter(|r| r.is_finite()).map(|r| 10.0 - r))
  }

  pub fn volume_load(&self) -> f64 {
    let weight = if self.weight.is_finite() && self.weight > 0.0 {
      self.weight
    } else {
      0.0
    };
    weight * self.reps as f64
  }
}

/// ---------------------------------------------------------------------------
/// Date parsing
/// ---------------------------------------------------------------------------

/// Parse a stored session date into its calendar day.
///
/// Accepts RFC 3339 (day taken in the timestamp's own offset), naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` / `YYYY-MM-DD HH:MM:SS`, and plain `YYYY-MM-DD`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }

  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Some(dt.date_naive());
  }

  for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
      return Some(dt.date());
    }
  }

  NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// ---------------------------------------------------------------------------
/// Lenient numeric decoding
/// ---------------------------------------------------------------------------

/// Numbers and numeric strings decode; null, garbage and non-finite values don't.
fn lenient_number(value: &serde_json::Value) -> Option<f64> {
  let parsed = match value {
    serde_json::Value::Number(n) => n.as_f64(),
    serde_json::Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
    _ => None,
  };
  parsed.filter(|v| v.is_finite())
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(lenient_number(&value))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(lenient_number(&value).filter(|v| *v >= 0.0).unwrap_or(0.0))
}

fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(
    lenient_number(&value)
      .filter(|v| *v >= 0.0)
      .map(|v| v.round().min(u32::MAX as f64) as u32),
  )
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
  D: Deserializer<'de>,
{
  lenient_opt_u32(deserializer).map(|v| v.unwrap_or(0))
}
