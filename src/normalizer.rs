//! Muscle and exercise normalisation
//!
//! Free-text muscle labels (mostly Portuguese, as coaches type them) are mapped
//! onto a fixed set of canonical muscle groups by ordered substring rules.
//! Exercise names resolve through the static catalog, falling back to the
//! entry's own coarse label. Nothing here fails: every input yields a group.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::models::ExerciseEntry;

/// Label used when an entry gives us nothing to classify
pub const UNASSIGNED_LABEL: &str = "Unassigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalMuscle {
  Chest,
  Back,
  Shoulders,
  Biceps,
  Triceps,
  Quads,
  Hamstrings,
  Glutes,
  Calves,
  Core,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyRegion {
  Upper,
  Lower,
  Core,
}

impl CanonicalMuscle {
  pub const ALL: [CanonicalMuscle; 10] = [
    CanonicalMuscle::Chest,
    CanonicalMuscle::Back,
    CanonicalMuscle::Shoulders,
    CanonicalMuscle::Biceps,
    CanonicalMuscle::Triceps,
    CanonicalMuscle::Quads,
    CanonicalMuscle::Hamstrings,
    CanonicalMuscle::Glutes,
    CanonicalMuscle::Calves,
    CanonicalMuscle::Core,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      CanonicalMuscle::Chest => "Chest",
      CanonicalMuscle::Back => "Back",
      CanonicalMuscle::Shoulders => "Shoulders",
      CanonicalMuscle::Biceps => "Biceps",
      CanonicalMuscle::Triceps => "Triceps",
      CanonicalMuscle::Quads => "Quads",
      CanonicalMuscle::Hamstrings => "Hamstrings",
      CanonicalMuscle::Glutes => "Glutes",
      CanonicalMuscle::Calves => "Calves",
      CanonicalMuscle::Core => "Core",
    }
  }

  pub fn region(&self) -> BodyRegion {
    match self {
      CanonicalMuscle::Chest
      | CanonicalMuscle::Back
      | CanonicalMuscle::Shoulders
      | CanonicalMuscle::Biceps
      | CanonicalMuscle::Triceps => BodyRegion::Upper,
      CanonicalMuscle::Quads
      | CanonicalMuscle::Hamstrings
      | CanonicalMuscle::Glutes
      | CanonicalMuscle::Calves => BodyRegion::Lower,
      CanonicalMuscle::Core => BodyRegion::Core,
    }
  }
}

/// A canonical group, or a pass-through label we couldn't classify
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MuscleGroup {
  Canonical(CanonicalMuscle),
  Other(String),
}

impl MuscleGroup {
  pub fn label(&self) -> &str {
    match self {
      MuscleGroup::Canonical(m) => m.label(),
      MuscleGroup::Other(label) => label,
    }
  }

  pub fn region(&self) -> Option<BodyRegion> {
    match self {
      MuscleGroup::Canonical(m) => Some(m.region()),
      MuscleGroup::Other(_) => None,
    }
  }
}

impl From<CanonicalMuscle> for MuscleGroup {
  fn from(m: CanonicalMuscle) -> Self {
    MuscleGroup::Canonical(m)
  }
}

/// Ordered synonym rules; first match wins. Compound anatomical names come
/// before their parts: "bíceps femoral" before "bíceps", "quadríceps" and
/// "reto femoral" before "femoral", "posterior" before "coxa".
const MUSCLE_RULES: &[(&str, CanonicalMuscle)] = &[
  ("peitoral", CanonicalMuscle::Chest),
  ("peito", CanonicalMuscle::Chest),
  ("chest", CanonicalMuscle::Chest),
  ("dorsal", CanonicalMuscle::Back),
  ("trapézio", CanonicalMuscle::Back),
  ("trapezio", CanonicalMuscle::Back),
  ("costas", CanonicalMuscle::Back),
  ("lombar", CanonicalMuscle::Back),
  ("back", CanonicalMuscle::Back),
  ("ombro", CanonicalMuscle::Shoulders),
  ("deltoide", CanonicalMuscle::Shoulders),
  ("deltóide", CanonicalMuscle::Shoulders),
  ("shoulder", CanonicalMuscle::Shoulders),
  ("bíceps femoral", CanonicalMuscle::Hamstrings),
  ("biceps femoral", CanonicalMuscle::Hamstrings),
  ("bíceps", CanonicalMuscle::Biceps),
  ("biceps", CanonicalMuscle::Biceps),
  ("tríceps", CanonicalMuscle::Triceps),
  ("triceps", CanonicalMuscle::Triceps),
  ("quadríceps", CanonicalMuscle::Quads),
  ("quadriceps", CanonicalMuscle::Quads),
  ("reto femoral", CanonicalMuscle::Quads),
  ("posterior", CanonicalMuscle::Hamstrings),
  ("isquiotibia", CanonicalMuscle::Hamstrings),
  ("femoral", CanonicalMuscle::Hamstrings),
  ("hamstring", CanonicalMuscle::Hamstrings),
  ("coxa", CanonicalMuscle::Quads),
  ("quads", CanonicalMuscle::Quads),
  ("glúteo", CanonicalMuscle::Glutes),
  ("gluteo", CanonicalMuscle::Glutes),
  ("glute", CanonicalMuscle::Glutes),
  ("panturrilha", CanonicalMuscle::Calves),
  ("gastrocnêmio", CanonicalMuscle::Calves),
  ("calf", CanonicalMuscle::Calves),
  ("calves", CanonicalMuscle::Calves),
  ("abdômen", CanonicalMuscle::Core),
  ("abdomen", CanonicalMuscle::Core),
  ("abdominal", CanonicalMuscle::Core),
  ("oblíquo", CanonicalMuscle::Core),
  ("core", CanonicalMuscle::Core),
];

/// Map a free-text muscle label to its canonical group.
///
/// Matching is case-insensitive substring, in rule order. Unmatched labels come
/// back as [`MuscleGroup::Other`] with the first letter capitalised.
pub fn normalize_muscle(raw_label: &str) -> MuscleGroup {
  let trimmed = raw_label.trim();
  if trimmed.is_empty() {
    return MuscleGroup::Other(UNASSIGNED_LABEL.to_string());
  }

  let lowered = trimmed.to_lowercase();
  MUSCLE_RULES
    .iter()
    .find(|(pattern, _)| lowered.contains(pattern))
    .map(|(_, muscle)| MuscleGroup::Canonical(*muscle))
    .unwrap_or_else(|| MuscleGroup::Other(capitalize(trimmed)))
}

fn capitalize(label: &str) -> String {
  let mut chars = label.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// ---------------------------------------------------------------------------
/// Exercise resolution
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResolution {
  pub agonists: Vec<MuscleGroup>,
  pub synergists: Vec<MuscleGroup>,
  /// Group the exercise is filed under
  pub group: MuscleGroup,
}

impl ExerciseResolution {
  /// Muscle the exercise is attributed to for region totals and display
  pub fn primary(&self) -> &MuscleGroup {
    &self.group
  }
}

/// Catalog lookup by exact exercise name
pub fn resolve_exercise(name: &str) -> Option<ExerciseResolution> {
  catalog::lookup(name).map(|exercise| ExerciseResolution {
    agonists: exercise.agonists.iter().map(|&m| m.into()).collect(),
    synergists: exercise.synergists.iter().map(|&m| m.into()).collect(),
    group: exercise.group.into(),
  })
}

/// Catalog first, then the coarse label as a single agonist and group
pub fn resolve_named(name: &str, fallback_label: Option<&str>) -> ExerciseResolution {
  resolve_exercise(name).unwrap_or_else(|| {
    let group = normalize_muscle(fallback_label.unwrap_or_default());
    ExerciseResolution {
      agonists: vec![group.clone()],
      synergists: Vec::new(),
      group,
    }
  })
}

pub fn resolve_entry(entry: &ExerciseEntry) -> ExerciseResolution {
  resolve_named(&entry.name, entry.muscle_group.as_deref())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_portuguese_synonyms() {
    assert_eq!(normalize_muscle("Peitoral Maior"), CanonicalMuscle::Chest.into());
    assert_eq!(normalize_muscle("PEITO"), CanonicalMuscle::Chest.into());
    assert_eq!(normalize_muscle("Trapézio"), CanonicalMuscle::Back.into());
    assert_eq!(normalize_muscle("costas"), CanonicalMuscle::Back.into());
    assert_eq!(normalize_muscle("Quadríceps"), CanonicalMuscle::Quads.into());
    assert_eq!(normalize_muscle("Coxa"), CanonicalMuscle::Quads.into());
    assert_eq!(normalize_muscle("Glúteos"), CanonicalMuscle::Glutes.into());
    assert_eq!(normalize_muscle("Panturrilha"), CanonicalMuscle::Calves.into());
    assert_eq!(normalize_muscle("Abdômen"), CanonicalMuscle::Core.into());
  }

  #[test]
  fn test_rule_order_resolves_hamstrings_before_quads() {
    assert_eq!(
      normalize_muscle("Posterior de Coxa"),
      CanonicalMuscle::Hamstrings.into()
    );
  }

  #[test]
  fn test_compound_anatomical_names_resolve_to_their_muscle() {
    assert_eq!(normalize_muscle("Bíceps Femoral"), CanonicalMuscle::Hamstrings.into());
    assert_eq!(normalize_muscle("biceps femoral"), CanonicalMuscle::Hamstrings.into());
    assert_eq!(normalize_muscle("Quadríceps Femoral"), CanonicalMuscle::Quads.into());
    assert_eq!(normalize_muscle("Reto Femoral"), CanonicalMuscle::Quads.into());
    assert_eq!(normalize_muscle("Bíceps Braquial"), CanonicalMuscle::Biceps.into());
    assert_eq!(normalize_muscle("Femoral"), CanonicalMuscle::Hamstrings.into());
  }

  #[test]
  fn test_canonical_labels_normalize_to_themselves() {
    for muscle in CanonicalMuscle::ALL {
      assert_eq!(normalize_muscle(muscle.label()), muscle.into(), "{}", muscle.label());
    }
  }

  #[test]
  fn test_unmatched_label_passes_through_capitalized() {
    assert_eq!(
      normalize_muscle("antebraço"),
      MuscleGroup::Other("Antebraço".to_string())
    );
    assert_eq!(
      normalize_muscle("   "),
      MuscleGroup::Other(UNASSIGNED_LABEL.to_string())
    );
  }

  #[test]
  fn test_resolve_entry_prefers_catalog() {
    let entry = ExerciseEntry {
      name: "Supino Reto".to_string(),
      muscle_group: Some("Ombro".to_string()),
      set_details: vec![],
      sets: Some(3),
      volume_load: None,
    };
    let resolved = resolve_entry(&entry);
    assert_eq!(resolved.agonists, vec![MuscleGroup::from(CanonicalMuscle::Chest)]);
    assert_eq!(
      resolved.synergists,
      vec![
        MuscleGroup::from(CanonicalMuscle::Triceps),
        MuscleGroup::from(CanonicalMuscle::Shoulders)
      ]
    );
  }

  #[test]
  fn test_primary_is_the_catalog_group() {
    // Compound lift with several agonists is filed under one group
    let deadlift = resolve_named("Levantamento Terra", Some("Posterior"));
    assert_eq!(deadlift.agonists.len(), 3);
    assert_eq!(deadlift.primary(), &MuscleGroup::from(CanonicalMuscle::Back));

    let dips = resolve_named("Mergulho", None);
    assert_eq!(dips.primary(), &MuscleGroup::from(CanonicalMuscle::Triceps));

    let unknown = resolve_named("Máquina Nova", None);
    assert_eq!(unknown.primary(), &MuscleGroup::Other(UNASSIGNED_LABEL.to_string()));
    assert_eq!(unknown.agonists, vec![unknown.group.clone()]);
  }

  #[test]
  fn test_resolve_entry_falls_back_to_label() {
    let entry = ExerciseEntry {
      name: "Crossover Polia Alta".to_string(),
      muscle_group: Some("peitoral".to_string()),
      set_details: vec![],
      sets: Some(3),
      volume_load: None,
    };
    let resolved = resolve_entry(&entry);
    assert_eq!(resolved.primary(), &MuscleGroup::from(CanonicalMuscle::Chest));
    assert!(resolved.synergists.is_empty());
    assert!(resolve_exercise("Crossover Polia Alta").is_none());
  }
}
