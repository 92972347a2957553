//! Static exercise catalog
//!
//! Maps an exercise name (exact match) to the muscles it recruits: agonists get
//! full volume credit, synergists partial credit. Read-only at runtime.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::normalizer::CanonicalMuscle;
use CanonicalMuscle::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogExercise {
  pub name: &'static str,
  pub agonists: &'static [CanonicalMuscle],
  pub synergists: &'static [CanonicalMuscle],
  /// Coarse group the exercise is filed under
  pub group: CanonicalMuscle,
}

static CATALOG: LazyLock<BTreeMap<&'static str, CatalogExercise>> = LazyLock::new(|| {
  EXERCISES
    .iter()
    .cloned()
    .map(|e| (e.name, e))
    .collect::<BTreeMap<_, _>>()
});

/// Look up an exercise by its exact name
pub fn lookup(name: &str) -> Option<&'static CatalogExercise> {
  CATALOG.get(name)
}

const EXERCISES: [CatalogExercise; 34] = [
  // Chest
  CatalogExercise {
    name: "Supino Reto",
    agonists: &[Chest],
    synergists: &[Triceps, Shoulders],
    group: Chest,
  },
  CatalogExercise {
    name: "Supino Inclinado",
    agonists: &[Chest],
    synergists: &[Shoulders, Triceps],
    group: Chest,
  },
  CatalogExercise {
    name: "Supino com Halteres",
    agonists: &[Chest],
    synergists: &[Triceps, Shoulders],
    group: Chest,
  },
  CatalogExercise {
    name: "Crucifixo",
    agonists: &[Chest],
    synergists: &[Shoulders],
    group: Chest,
  },
  CatalogExercise {
    name: "Flexão de Braço",
    agonists: &[Chest],
    synergists: &[Triceps, Shoulders, Core],
    group: Chest,
  },
  CatalogExercise {
    name: "Bench Press",
    agonists: &[Chest],
    synergists: &[Triceps, Shoulders],
    group: Chest,
  },
  // Back
  CatalogExercise {
    name: "Puxada Frontal",
    agonists: &[Back],
    synergists: &[Biceps],
    group: Back,
  },
  CatalogExercise {
    name: "Remada Curvada",
    agonists: &[Back],
    synergists: &[Biceps, Shoulders],
    group: Back,
  },
  CatalogExercise {
    name: "Remada Baixa",
    agonists: &[Back],
    synergists: &[Biceps],
    group: Back,
  },
  CatalogExercise {
    name: "Barra Fixa",
    agonists: &[Back],
    synergists: &[Biceps],
    group: Back,
  },
  CatalogExercise {
    name: "Levantamento Terra",
    agonists: &[Back, Hamstrings, Glutes],
    synergists: &[Quads, Core],
    group: Back,
  },
  CatalogExercise {
    name: "Deadlift",
    agonists: &[Back, Hamstrings, Glutes],
    synergists: &[Quads, Core],
    group: Back,
  },
  CatalogExercise {
    name: "Pull Up",
    agonists: &[Back],
    synergists: &[Biceps],
    group: Back,
  },
  // Shoulders
  CatalogExercise {
    name: "Desenvolvimento",
    agonists: &[Shoulders],
    synergists: &[Triceps],
    group: Shoulders,
  },
  CatalogExercise {
    name: "Elevação Lateral",
    agonists: &[Shoulders],
    synergists: &[],
    group: Shoulders,
  },
  CatalogExercise {
    name: "Overhead Press",
    agonists: &[Shoulders],
    synergists: &[Triceps, Core],
    group: Shoulders,
  },
  // Arms
  CatalogExercise {
    name: "Rosca Direta",
    agonists: &[Biceps],
    synergists: &[],
    group: Biceps,
  },
  CatalogExercise {
    name: "Rosca Martelo",
    agonists: &[Biceps],
    synergists: &[],
    group: Biceps,
  },
  CatalogExercise {
    name: "Tríceps Pulley",
    agonists: &[Triceps],
    synergists: &[],
    group: Triceps,
  },
  CatalogExercise {
    name: "Tríceps Testa",
    agonists: &[Triceps],
    synergists: &[],
    group: Triceps,
  },
  CatalogExercise {
    name: "Mergulho",
    agonists: &[Triceps, Chest],
    synergists: &[Shoulders],
    group: Triceps,
  },
  // Legs
  CatalogExercise {
    name: "Agachamento Livre",
    agonists: &[Quads, Glutes],
    synergists: &[Hamstrings, Core],
    group: Quads,
  },
  CatalogExercise {
    name: "Squat",
    agonists: &[Quads, Glutes],
    synergists: &[Hamstrings, Core],
    group: Quads,
  },
  CatalogExercise {
    name: "Leg Press",
    agonists: &[Quads],
    synergists: &[Glutes],
    group: Quads,
  },
  CatalogExercise {
    name: "Cadeira Extensora",
    agonists: &[Quads],
    synergists: &[],
    group: Quads,
  },
  CatalogExercise {
    name: "Afundo",
    agonists: &[Quads, Glutes],
    synergists: &[Hamstrings],
    group: Quads,
  },
  CatalogExercise {
    name: "Mesa Flexora",
    agonists: &[Hamstrings],
    synergists: &[],
    group: Hamstrings,
  },
  CatalogExercise {
    name: "Stiff",
    agonists: &[Hamstrings],
    synergists: &[Glutes, Back],
    group: Hamstrings,
  },
  CatalogExercise {
    name: "Elevação Pélvica",
    agonists: &[Glutes],
    synergists: &[Hamstrings],
    group: Glutes,
  },
  CatalogExercise {
    name: "Panturrilha em Pé",
    agonists: &[Calves],
    synergists: &[],
    group: Calves,
  },
  CatalogExercise {
    name: "Panturrilha Sentado",
    agonists: &[Calves],
    synergists: &[],
    group: Calves,
  },
  // Core
  CatalogExercise {
    name: "Abdominal Supra",
    agonists: &[Core],
    synergists: &[],
    group: Core,
  },
  CatalogExercise {
    name: "Prancha",
    agonists: &[Core],
    synergists: &[],
    group: Core,
  },
  CatalogExercise {
    name: "Abdominal Infra",
    agonists: &[Core],
    synergists: &[],
    group: Core,
  },
];
