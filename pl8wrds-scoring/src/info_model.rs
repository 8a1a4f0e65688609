//! Information Model Builder: per-plate solution sets.

use std::collections::HashMap;

use corpus::Corpus;
use pl8wrds_solver::{SolveOptions, Solver};

/// A plate's solved solution set, as recorded in an [`InformationModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlateSolutions {
  /// Every corpus word solving this plate, lexicographic ascending.
  pub solutions: Vec<String>,
  /// `solutions.len()`, kept alongside for cheap lookups.
  pub solution_count: u32,
}

/// Every plate in a declared universe, mapped to its solved solution set, plus the
/// largest solution count observed — the `MAX_SOLUTIONS` constant the Information
/// Scorer normalizes against, persisted here so the model is self-describing.
#[derive(Debug, Clone)]
pub struct InformationModel {
  /// Plate letters → its solved solutions.
  pub plates: HashMap<String, PlateSolutions>,
  /// The largest `solution_count` observed over every plate in the universe.
  pub max_solutions: u32,
}

/// Generates every `length`-letter uppercase plate in lexicographic order — the default
/// plate universe is `plate_universe(3)`, the 17,576 three-letter plates.
pub fn plate_universe(length: usize) -> impl Iterator<Item = String> {
  let total = 26usize.pow(length as u32);
  (0..total).map(move |mut n| {
    let mut letters = vec![0u8; length];
    for slot in (0..length).rev() {
      letters[slot] = b'A' + (n % 26) as u8;
      n /= 26;
    }
    String::from_utf8(letters).expect("plate letters are always valid ASCII")
  })
}

/// Solves every plate in `universe` against `corpus`/`solver` and records the result.
/// Plates with zero solutions are retained with an empty solutions list.
#[must_use]
pub fn build_information_model(
  corpus: &Corpus,
  solver: &Solver,
  universe: impl IntoIterator<Item = String>,
) -> InformationModel {
  let mut plates = HashMap::new();
  let mut max_solutions = 0u32;

  for plate in universe {
    let result = solver
      .solve(&plate, &SolveOptions::default())
      .unwrap_or_else(|err| panic!("plate universe must only contain valid plates: {err}"));

    let solutions: Vec<String> = result
      .word_ids
      .iter()
      .map(|&id| corpus.word_at(id).expect("solver returns ids from this corpus").to_string())
      .collect();
    let solution_count = solutions.len() as u32;
    max_solutions = max_solutions.max(solution_count);

    plates.insert(plate, PlateSolutions {
      solutions,
      solution_count,
    });
  }

  tracing::debug!(plates = plates.len(), max_solutions, "built information model");

  InformationModel {
    plates,
    max_solutions,
  }
}
