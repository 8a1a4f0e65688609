//! Drives C7: builds both models from a corpus and persists them for `precompute`.

use std::path::Path;

use corpus::Corpus;
use pl8wrds_scoring::{build_information_model, build_orthographic_model, plate_universe};
use pl8wrds_solver::Solver;

use crate::error::PipelineError;
use crate::model_io::{write_information_model, write_orthographic_model};

/// Loads `corpus_path`, builds the orthographic and information models, and writes
/// both to `out_dir` for a later `precompute` invocation to read back.
///
/// `plate_length` sizes the information model's plate universe (`26^plate_length`
/// plates); the default plate length is 3.
///
/// # Errors
///
/// Returns [`PipelineError::Corpus`] if the corpus fails to load, and
/// [`PipelineError::Io`]/[`PipelineError::Json`] if either model fails to write.
pub fn run_build_models(corpus_path: &Path, out_dir: &Path, plate_length: usize) -> Result<(), PipelineError> {
  tracing::info!(corpus = %corpus_path.display(), "loading corpus");
  let corpus = Corpus::load(corpus_path)?;
  tracing::info!(words = corpus.len(), "corpus loaded");

  std::fs::create_dir_all(out_dir)?;

  let orthographic_model = build_orthographic_model(&corpus);
  write_orthographic_model(&orthographic_model, out_dir)?;
  tracing::info!(
    trigrams = orthographic_model.trigrams.len(),
    quartets = orthographic_model.quartets.len(),
    "wrote orthographic model"
  );

  let solver = Solver::build(&corpus);
  let universe = plate_universe(plate_length);
  let information_model = build_information_model(&corpus, &solver, universe);
  write_information_model(&information_model, out_dir)?;
  tracing::info!(
    plates = information_model.plates.len(),
    max_solutions = information_model.max_solutions,
    "wrote information model"
  );

  Ok(())
}
