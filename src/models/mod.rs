pub mod session;
pub mod metrics;
pub mod program;

pub use session::{parse_calendar_date, ExerciseEntry, Session, SessionStatus, SetEntry};
pub use metrics::{
  DailyLoadMetric, MuscleVolumeEntry, PerformanceAxis, PerformanceScoreSet, WeeklySeries,
};
pub use program::{PlannedExercise, ProgramTargets};
