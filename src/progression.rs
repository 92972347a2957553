//! Strength Progression Analyzer
//!
//! Compares this week's best estimated one-rep max per exercise against the
//! historical best from older sessions.
//!
//! Key rules:
//! - e1RM via Epley: weight * (1 + 0.0333 * reps)
//! - "This week" is the trailing 7 days, everything older is the baseline
//! - Too few comparisons = fall back to week-over-week volume-load
//! - Only sets with weight and reps count toward e1RM

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Session;
use crate::normalizer::resolve_entry;
use crate::workload::round_to;

pub const EPLEY_COEFFICIENT: f64 = 0.0333;

/// Comparisons needed before the success ratio is trusted over volume
pub const DEFAULT_MIN_COMPARISONS: usize = 3;

const TOP_EXERCISE_COUNT: usize = 3;

/// Estimated one-rep max (Epley)
pub fn estimated_one_rep_max(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + EPLEY_COEFFICIENT * reps as f64)
}

// ---------------------------------------------------------------------------
/// Exercise Progress: one improved exercise this week
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgress {
    pub name: String,
    pub muscle_group: String,
    pub increase_percentage: f64,
    pub current_e1rm: f64,
    pub previous_best: f64,
}

// ---------------------------------------------------------------------------
/// Weekly Volume Comparison: fallback signal when e1RM data is thin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeeklyVolumeComparison {
    /// Volume-load of completed sessions 0-6 days ago
    pub this_week: f64,
    /// Volume-load of completed sessions 7-13 days ago
    pub last_week: f64,
}

impl WeeklyVolumeComparison {
    pub fn compute(sessions: &[Session], today: NaiveDate) -> Self {
        let mut comparison = Self::default();

        for session in sessions.iter().filter(|s| s.is_completed()) {
            match session.days_before(today) {
                Some(d) if (0..7).contains(&d) => comparison.this_week += session.volume_load(),
                Some(d) if (7..14).contains(&d) => comparison.last_week += session.volume_load(),
                _ => {}
            }
        }

        comparison
    }

    pub fn fallback_score(&self) -> u8 {
        if self.this_week > self.last_week && self.last_week > 0.0 {
            100
        } else if self.this_week == 0.0 && self.last_week == 0.0 {
            0
        } else if self.this_week >= self.last_week * 0.9 {
            75
        } else {
            40
        }
    }
}

// ---------------------------------------------------------------------------
/// Progression Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionResult {
    pub success_count: u32,
    pub total_comparisons: u32,
    /// 0-100
    pub progress_score: u8,
    /// Up to three exercises with the largest e1RM increase, largest first
    pub top_exercises: Vec<ExerciseProgress>,
    pub volume: WeeklyVolumeComparison,
    /// True when the score came from the volume comparison
    pub used_volume_fallback: bool,
}

impl ProgressionResult {
    fn ratio_score(success_count: u32, total_comparisons: u32) -> u8 {
        let ratio = success_count as f64 / total_comparisons as f64;
        if ratio >= 0.6 {
            100
        } else if ratio >= 0.3 {
            75
        } else {
            40
        }
    }
}

#[derive(Debug, Clone)]
struct SessionBest {
    e1rm: f64,
    muscle_group: String,
}

/// Best e1RM per exercise name within one session
fn session_bests(session: &Session) -> BTreeMap<String, SessionBest> {
    let mut bests: BTreeMap<String, SessionBest> = BTreeMap::new();

    for entry in &session.exercises {
        let best = entry
            .set_details
            .iter()
            .filter(|s| s.weight.is_finite() && s.weight > 0.0 && s.reps > 0)
            .map(|s| estimated_one_rep_max(s.weight, s.reps))
            .fold(None, |acc: Option<f64>, e| Some(acc.map_or(e, |a| a.max(e))));

        let Some(e1rm) = best else {
            continue;
        };

        match bests.get_mut(&entry.name) {
            Some(existing) if existing.e1rm >= e1rm => {}
            Some(existing) => existing.e1rm = e1rm,
            None => {
                let muscle_group = resolve_entry(entry).primary().label().to_string();
                bests.insert(entry.name.clone(), SessionBest { e1rm, muscle_group });
            }
        }
    }

    bests
}

/// Analyze progression with the default comparison threshold
pub fn analyze_progression(sessions: &[Session], today: NaiveDate) -> ProgressionResult {
    analyze_progression_with(sessions, today, DEFAULT_MIN_COMPARISONS)
}

/// Analyze progression. Below `min_comparisons` baseline comparisons the
/// score falls back to the week-over-week volume comparison.
pub fn analyze_progression_with(
    sessions: &[Session],
    today: NaiveDate,
    min_comparisons: usize,
) -> ProgressionResult {
    let completed: Vec<(&Session, i64)> = sessions
        .iter()
        .filter(|s| s.is_completed())
        .filter_map(|s| s.days_before(today).map(|d| (s, d)))
        .collect();

    // Historical baseline from sessions 7+ days old
    let mut baseline: BTreeMap<String, f64> = BTreeMap::new();
    for (session, _) in completed.iter().filter(|(_, d)| *d >= 7) {
        for (name, best) in session_bests(session) {
            let entry = baseline.entry(name).or_insert(best.e1rm);
            *entry = entry.max(best.e1rm);
        }
    }

    // Compare each of this week's sessions against the baseline
    let mut success_count = 0u32;
    let mut total_comparisons = 0u32;
    let mut improvements: BTreeMap<String, ExerciseProgress> = BTreeMap::new();

    for (session, _) in completed.iter().filter(|(_, d)| (0..7).contains(d)) {
        for (name, best) in session_bests(session) {
            let Some(&previous_best) = baseline.get(&name) else {
                continue;
            };
            total_comparisons += 1;

            if best.e1rm > previous_best {
                success_count += 1;
                let increase = (best.e1rm - previous_best) / previous_best * 100.0;
                let record = ExerciseProgress {
                    name: name.clone(),
                    muscle_group: best.muscle_group,
                    increase_percentage: round_to(increase, 1),
                    current_e1rm: round_to(best.e1rm, 1),
                    previous_best: round_to(previous_best, 1),
                };
                match improvements.get(&name) {
                    Some(existing) if existing.current_e1rm >= record.current_e1rm => {}
                    _ => {
                        improvements.insert(name, record);
                    }
                }
            }
        }
    }

    let volume = WeeklyVolumeComparison::compute(sessions, today);
    let used_volume_fallback =
        (total_comparisons as usize) < min_comparisons || total_comparisons == 0;
    let progress_score = if used_volume_fallback {
        volume.fallback_score()
    } else {
        ProgressionResult::ratio_score(success_count, total_comparisons)
    };

    let mut top_exercises: Vec<ExerciseProgress> = improvements.into_values().collect();
    top_exercises.sort_by(|a, b| {
        b.increase_percentage
            .total_cmp(&a.increase_percentage)
            .then_with(|| a.name.cmp(&b.name))
    });
    top_exercises.truncate(TOP_EXERCISE_COUNT);

    tracing::debug!(
        comparisons = total_comparisons,
        successes = success_count,
        score = progress_score,
        fallback = used_volume_fallback,
        "analyzed progression"
    );

    ProgressionResult {
        success_count,
        total_comparisons,
        progress_score,
        top_exercises,
        volume,
        used_volume_fallback,
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, detailed_entry, fallback_entry, session_on};

    #[test]
    fn test_epley_estimate() {
        assert!((estimated_one_rep_max(100.0, 10) - 133.3).abs() < 1e-9);
        assert!((estimated_one_rep_max(110.0, 8) - 139.304).abs() < 1e-9);
        assert_eq!(estimated_one_rep_max(100.0, 0), 100.0);
    }

    #[test]
    fn test_single_comparison_falls_back_to_volume() {
        // Arrange: same exercise a week apart, heavier but fewer reps now
        let today = date(2024, 3, 15);
        let sessions = vec![
            session_on(today, 7, vec![detailed_entry("Supino Reto", &[(100.0, 10, Some(2.0))])]),
            session_on(today, 0, vec![detailed_entry("Supino Reto", &[(110.0, 8, Some(2.0))])]),
        ];

        // Act
        let result = analyze_progression(&sessions, today);

        // Assert: 1 comparison, 1 success, but not enough to trust the ratio
        assert_eq!(result.total_comparisons, 1);
        assert_eq!(result.success_count, 1);
        assert!(result.used_volume_fallback);
        // Volume 880 vs 1000 -> below 90% of last week
        assert_eq!(result.volume.this_week, 880.0);
        assert_eq!(result.volume.last_week, 1000.0);
        assert_eq!(result.progress_score, 40);

        assert_eq!(result.top_exercises.len(), 1);
        let top = &result.top_exercises[0];
        assert_eq!(top.name, "Supino Reto");
        assert_eq!(top.muscle_group, "Chest");
        assert_eq!(top.previous_best, 133.3);
        assert_eq!(top.current_e1rm, 139.3);
        assert_eq!(top.increase_percentage, 4.5);
    }

    #[test]
    fn test_ratio_scoring_with_enough_comparisons() {
        // Arrange: four exercises with a baseline, three improve this week
        let today = date(2024, 3, 15);
        let baseline = session_on(
            today,
            10,
            vec![
                detailed_entry("Supino Reto", &[(100.0, 5, None)]),
                detailed_entry("Agachamento Livre", &[(120.0, 5, None)]),
                detailed_entry("Remada Curvada", &[(80.0, 8, None)]),
                detailed_entry("Desenvolvimento", &[(50.0, 8, None)]),
            ],
        );
        let current = session_on(
            today,
            1,
            vec![
                detailed_entry("Supino Reto", &[(105.0, 5, None)]),
                detailed_entry("Agachamento Livre", &[(140.0, 5, None)]),
                detailed_entry("Remada Curvada", &[(82.0, 8, None)]),
                detailed_entry("Desenvolvimento", &[(45.0, 8, None)]),
                // No baseline, not a comparison
                detailed_entry("Stiff", &[(90.0, 10, None)]),
            ],
        );

        // Act
        let result = analyze_progression(&[baseline, current], today);

        // Assert: 3/4 = 0.75 -> 100
        assert_eq!(result.total_comparisons, 4);
        assert_eq!(result.success_count, 3);
        assert!(!result.used_volume_fallback);
        assert_eq!(result.progress_score, 100);

        let names: Vec<_> = result.top_exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Agachamento Livre", "Supino Reto", "Remada Curvada"]);
    }

    #[test]
    fn test_ratio_bands() {
        assert_eq!(ProgressionResult::ratio_score(3, 5), 100);
        assert_eq!(ProgressionResult::ratio_score(1, 3), 75);
        assert_eq!(ProgressionResult::ratio_score(1, 4), 40);
        assert_eq!(ProgressionResult::ratio_score(0, 3), 40);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let today = date(2024, 3, 15);
        let sessions = vec![
            session_on(today, 8, vec![detailed_entry("Supino Reto", &[(100.0, 10, None)])]),
            session_on(today, 2, vec![detailed_entry("Supino Reto", &[(110.0, 8, None)])]),
        ];

        let strict = analyze_progression_with(&sessions, today, 3);
        let lenient = analyze_progression_with(&sessions, today, 1);

        assert!(strict.used_volume_fallback);
        assert!(!lenient.used_volume_fallback);
        assert_eq!(lenient.progress_score, 100);
    }

    #[test]
    fn test_volume_fallback_bands() {
        let score = |this_week, last_week| {
            WeeklyVolumeComparison { this_week, last_week }.fallback_score()
        };
        assert_eq!(score(1200.0, 1000.0), 100);
        assert_eq!(score(0.0, 0.0), 0);
        assert_eq!(score(950.0, 1000.0), 75);
        assert_eq!(score(900.0, 1000.0), 75);
        assert_eq!(score(500.0, 1000.0), 40);
        // Nothing last week, something this week
        assert_eq!(score(800.0, 0.0), 75);
    }

    #[test]
    fn test_fallback_sets_and_bodyweight_sets_are_ignored_for_e1rm() {
        let today = date(2024, 3, 15);
        let sessions = vec![
            session_on(today, 9, vec![fallback_entry("Supino Reto", None, 4, 3200.0)]),
            session_on(
                today,
                1,
                vec![
                    fallback_entry("Supino Reto", None, 4, 3400.0),
                    detailed_entry("Barra Fixa", &[(0.0, 10, None)]),
                ],
            ),
        ];

        let result = analyze_progression(&sessions, today);

        assert_eq!(result.total_comparisons, 0);
        assert!(result.top_exercises.is_empty());
        assert!(result.used_volume_fallback);
        assert_eq!(result.progress_score, 100);
    }

    #[test]
    fn test_best_record_kept_per_exercise() {
        // Two sessions this week on the same lift, both beat the baseline
        let today = date(2024, 3, 15);
        let sessions = vec![
            session_on(today, 14, vec![detailed_entry("Leg Press", &[(200.0, 10, None)])]),
            session_on(today, 4, vec![detailed_entry("Leg Press", &[(210.0, 10, None)])]),
            session_on(today, 1, vec![detailed_entry("Leg Press", &[(230.0, 10, None)])]),
        ];

        let result = analyze_progression(&sessions, today);

        assert_eq!(result.total_comparisons, 2);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.top_exercises.len(), 1);
        assert_eq!(result.top_exercises[0].current_e1rm, 306.6);
    }

    #[test]
    fn test_repeated_analysis_is_identical() {
        let today = date(2024, 3, 15);
        let sessions = vec![
            session_on(
                today,
                10,
                vec![
                    detailed_entry("Supino Reto", &[(100.0, 5, None)]),
                    detailed_entry("Remada Curvada", &[(80.0, 8, None)]),
                    detailed_entry("Stiff", &[(90.0, 10, None)]),
                ],
            ),
            session_on(
                today,
                1,
                vec![
                    detailed_entry("Supino Reto", &[(105.0, 5, None)]),
                    detailed_entry("Remada Curvada", &[(82.0, 8, None)]),
                    detailed_entry("Stiff", &[(95.0, 10, None)]),
                ],
            ),
        ];

        let first = analyze_progression(&sessions, today);
        let second = analyze_progression(&sessions, today);

        assert_eq!(first, second);
        assert_eq!(first.top_exercises.len(), 3);
    }

    #[test]
    fn test_no_sessions() {
        let result = analyze_progression(&[], date(2024, 3, 15));
        assert_eq!(result.total_comparisons, 0);
        assert_eq!(result.progress_score, 0);
        assert!(result.top_exercises.is_empty());
    }
}
