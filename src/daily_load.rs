//! Daily load bucketing
//!
//! Each completed session is reduced to an effort-weighted load in UA and a
//! running RIR sum, then bucketed by calendar day. The result is sparse: days
//! without sessions have no bucket (see `workload` for gap filling).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Session;

const MAX_RPE: f64 = 10.0;

/// Assumed load per set when only aggregate set counts were logged
pub const FALLBACK_LOAD_PER_SET: f64 = 8.0;

/// Assumed RIR per set when only aggregate set counts were logged
pub const FALLBACK_RIR_PER_SET: f64 = 2.0;

/// Load and average RIR for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DayLoad {
  pub load: f64,
  pub avg_rir: f64,
}

#[derive(Debug, Default)]
struct DayAccumulator {
  load: f64,
  rir_sum: f64,
  set_count: f64,
}

impl DayAccumulator {
  fn add_session(&mut self, session: &Session) {
    for entry in &session.exercises {
      if entry.has_set_detail() {
        for set in &entry.set_details {
          let rir = set.safe_rir();
          self.load += (MAX_RPE - rir).max(0.0);
          self.rir_sum += rir;
          self.set_count += 1.0;
        }
      } else {
        let sets = entry.sets.unwrap_or(0) as f64;
        self.load += FALLBACK_LOAD_PER_SET * sets;
        self.rir_sum += FALLBACK_RIR_PER_SET * sets;
        self.set_count += sets;
      }
    }
  }

  fn finish(&self) -> DayLoad {
    DayLoad {
      load: self.load,
      avg_rir: if self.set_count > 0.0 {
        self.rir_sum / self.set_count
      } else {
        0.0
      },
    }
  }
}

/// Bucket completed sessions into per-day load.
///
/// Sessions on the same day accumulate into one bucket. Sessions whose date
/// can't be parsed are skipped.
pub fn build_daily_series(sessions: &[Session]) -> BTreeMap<NaiveDate, DayLoad> {
  let mut buckets: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

  for session in sessions.iter().filter(|s| s.is_completed()) {
    let Some(date) = session.calendar_date() else {
      tracing::warn!(
        session_id = %session.id,
        raw_date = %session.date,
        "skipping session with malformed date"
      );
      continue;
    };
    buckets.entry(date).or_default().add_session(session);
  }

  tracing::debug!(sessions = sessions.len(), days = buckets.len(), "built daily load series");

  buckets
    .into_iter()
    .map(|(date, acc)| (date, acc.finish()))
    .collect()
}
