//! Information Scorer: a 0–100 surprisal score for a (plate, word) pair.

use crate::error::InformationError;
use crate::info_model::InformationModel;

/// Scores how "surprising" a word is within its plate's solution set, against a fixed
/// [`InformationModel`].
pub struct InformationScorer<'model> {
  model: &'model InformationModel,
}

impl<'model> InformationScorer<'model> {
  /// Builds a scorer over `model`.
  #[must_use]
  pub const fn new(model: &'model InformationModel) -> Self {
    Self { model }
  }

  /// Scores `word` within `plate`'s solution set.
  ///
  /// All solutions of a given plate share the same score: the score orders plates more
  /// than it orders words within a plate, which is intentional.
  ///
  /// # Errors
  ///
  /// Returns [`InformationError::NotASolution`] if `word` does not solve `plate`.
  pub fn score(&self, plate: &str, word: &str) -> Result<u8, InformationError> {
    let plate_solutions = self.model.plates.get(plate);
    let is_solution = plate_solutions.is_some_and(|solutions| {
      solutions.solutions.binary_search(&word.to_string()).is_ok()
    });

    if !is_solution {
      return Err(InformationError::NotASolution {
        plate: plate.to_string(),
        word: word.to_string(),
      });
    }

    let solution_count = plate_solutions.unwrap().solution_count;
    let numerator = f64::from(solution_count).log2();
    let denominator = f64::from(self.model.max_solutions).log2();

    let score = if denominator > 0.0 {
      (100.0 * numerator / denominator).clamp(0.0, 100.0).round() as u8
    } else {
      0
    };

    Ok(score)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::info_model::build_information_model;
  use corpus::Corpus;
  use pl8wrds_solver::Solver;

  #[test]
  fn non_solution_is_an_error() {
    let corpus = Corpus::from_json_str(r#"{"cab":1}"#).unwrap();
    let solver = Solver::build(&corpus);
    let model = build_information_model(&corpus, &solver, ["CAB".to_string()]);
    let scorer = InformationScorer::new(&model);

    assert!(matches!(
      scorer.score("CAB", "zzz"),
      Err(InformationError::NotASolution { .. })
    ));
  }

  #[test]
  fn s3_information_score_uniformity() {
    // Four words sharing plate "XYZ"; with MAX_SOLUTIONS = 256, each should score
    // round(100 * log2(4) / log2(256)) = round(100 * 2 / 8) = 25.
    let corpus = Corpus::from_json_str(
      r#"{"xaybzc":1,"xaybzd":1,"xaybze":1,"xaybzf":1}"#,
    )
    .unwrap();
    let solver = Solver::build(&corpus);
    let mut model = build_information_model(&corpus, &solver, ["XYZ".to_string()]);
    model.max_solutions = 256;
    let scorer = InformationScorer::new(&model);

    for word in ["xaybzc", "xaybzd", "xaybze", "xaybzf"] {
      assert_eq!(scorer.score("XYZ", word).unwrap(), 25);
    }
  }

  #[test]
  fn all_solutions_of_a_plate_share_a_score() {
    let corpus = Corpus::from_json_str(r#"{"cab":1,"cabin":1,"cable":1}"#).unwrap();
    let solver = Solver::build(&corpus);
    let model = build_information_model(&corpus, &solver, ["CAB".to_string()]);
    let scorer = InformationScorer::new(&model);

    let scores: Vec<u8> = model.plates["CAB"]
      .solutions
      .iter()
      .map(|word| scorer.score("CAB", word).unwrap())
      .collect();

    assert!(scores.windows(2).all(|pair| pair[0] == pair[1]));
  }
}
