use corpus::Corpus;
use pl8wrds_scoring::{build_information_model, combine, EnsembleWeights, InformationScorer};
use pl8wrds_solver::Solver;

#[test]
fn s3_information_score_uniformity() {
  let corpus = Corpus::from_json_str(r#"{"xaybzc":1,"xaybzd":1,"xaybze":1,"xaybzf":1}"#).unwrap();
  let solver = Solver::build(&corpus);
  let mut model = build_information_model(&corpus, &solver, ["XYZ".to_string()]);
  model.max_solutions = 256;
  let scorer = InformationScorer::new(&model);

  for word in ["xaybzc", "xaybzd", "xaybze", "xaybzf"] {
    assert_eq!(scorer.score("XYZ", word).unwrap(), 25);
  }
}

#[test]
fn s4_ensemble_default_weights() {
  let result = combine("word", Some(77), Some(65), Some(54), EnsembleWeights::default()).unwrap();
  assert_eq!(result.ensemble, 65);
}

#[test]
fn s5_interpretation_bands_cover_every_boundary() {
  use pl8wrds_scoring::ensemble::interpretation_band;
  let bands = [
    (0, "Poor"),
    (29, "Poor"),
    (30, "Fair"),
    (49, "Fair"),
    (50, "Good"),
    (69, "Good"),
    (70, "Excellent"),
    (89, "Excellent"),
    (90, "Exceptional"),
    (100, "Exceptional"),
  ];
  for (score, expected) in bands {
    assert_eq!(interpretation_band(score), expected, "score={score}");
  }
}

#[test]
fn information_monotonicity_across_plates() {
  // For a fixed word, a plate with more solutions should never score it *lower* than
  // a plate with fewer solutions.
  let corpus = Corpus::from_json_str(
    r#"{"cab":1,"cabin":1,"cable":1,"cabbie":1,"arc":1,"arch":1}"#,
  )
  .unwrap();
  let solver = Solver::build(&corpus);
  let model = build_information_model(&corpus, &solver, ["CAB".to_string(), "ARC".to_string()]);
  let scorer = InformationScorer::new(&model);

  let cab_count = model.plates["CAB"].solution_count;
  let arc_count = model.plates["ARC"].solution_count;
  assert_ne!(cab_count, arc_count, "fixture must actually exercise two different solution counts");

  let (fewer_plate, fewer_word, more_plate, more_word) = if cab_count < arc_count {
    ("CAB", "cab", "ARC", "arc")
  } else {
    ("ARC", "arc", "CAB", "cab")
  };

  assert!(scorer.score(fewer_plate, fewer_word).unwrap() <= scorer.score(more_plate, more_word).unwrap());
}
