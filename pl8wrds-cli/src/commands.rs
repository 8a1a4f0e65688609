//! Implementations behind each [`crate::cli::Command`] variant.

use std::path::Path;

use anyhow::{Context, Result};
use corpus::Corpus;
use pl8wrds_pipeline::{read_information_model, read_orthographic_model, PrecomputeConfig};
use pl8wrds_scoring::{combine, EnsembleWeights, InformationScorer, OrthographicScorer, VocabularyScorer};
use pl8wrds_solver::{SolveOptions, Solver};

use crate::wire::{ScoreResponse, SolveResponse};

/// Runs `build-models`.
pub fn build_models(corpus: &Path, out: &Path, plate_length: usize) -> Result<()> {
  tracing::info!(corpus = %corpus.display(), plate_length, "building models");
  pl8wrds_pipeline::run_build_models(corpus, out, plate_length)
    .with_context(|| format!("building models from corpus {}", corpus.display()))?;
  tracing::info!(out = %out.display(), "models written");
  println!("wrote models to {}", out.display());
  Ok(())
}

/// Runs `precompute`.
pub fn precompute(corpus_path: &Path, models: &Path, out: &Path, checkpoint_every: usize) -> Result<()> {
  tracing::info!(corpus = %corpus_path.display(), checkpoint_every, "starting precomputation");
  let corpus = Corpus::load(corpus_path).with_context(|| format!("loading corpus {}", corpus_path.display()))?;
  let orthographic_model =
    read_orthographic_model(models).with_context(|| format!("reading models from {}", models.display()))?;
  let information_model =
    read_information_model(models).with_context(|| format!("reading models from {}", models.display()))?;

  let config = PrecomputeConfig {
    corpus_path,
    out_dir: out,
    checkpoint_every,
  };
  pl8wrds_pipeline::run_precompute(&config, &corpus, &orthographic_model, &information_model)
    .context("running precomputation")?;

  tracing::info!(out = %out.display(), "precomputation complete");
  println!("wrote artifact to {}", out.display());
  Ok(())
}

/// Runs `solve`, printing the matching words one per line.
pub fn solve(plate: &str, corpus_path: &Path) -> Result<()> {
  tracing::debug!(plate, "solving plate");
  let corpus = Corpus::load(corpus_path).with_context(|| format!("loading corpus {}", corpus_path.display()))?;
  let solver = Solver::build(&corpus);
  let result = solver.solve(plate, &SolveOptions::default()).context("solving plate")?;

  let words: Vec<String> = result
    .word_ids
    .iter()
    .map(|&id| corpus.word_at(id).unwrap_or_default().to_string())
    .collect();

  let response = SolveResponse {
    plate: plate.to_string(),
    count: words.len(),
    words,
  };
  println!("{}", serde_json::to_string_pretty(&response)?);
  Ok(())
}

/// Runs `score`, printing the component scores and ensemble as JSON.
pub fn score(word: &str, plate: &str, corpus_path: &Path, models: &Path) -> Result<()> {
  tracing::debug!(word, plate, "scoring word against plate");
  let corpus = Corpus::load(corpus_path).with_context(|| format!("loading corpus {}", corpus_path.display()))?;
  let orthographic_model =
    read_orthographic_model(models).with_context(|| format!("reading models from {}", models.display()))?;
  let information_model =
    read_information_model(models).with_context(|| format!("reading models from {}", models.display()))?;

  let vocabulary_scorer = VocabularyScorer::build(&corpus);
  let orthographic_scorer = OrthographicScorer::new(&orthographic_model);
  let information_scorer = InformationScorer::new(&information_model);

  let vocabulary = vocabulary_scorer.score(word).ok().map(|s| s.combined);
  let orthographic = Some(orthographic_scorer.score(word));
  let information = information_scorer.score(plate, word).ok();

  let result = combine(word, vocabulary, information, orthographic, EnsembleWeights::default())
    .context("combining component scores")?;

  let response = ScoreResponse {
    plate: plate.to_string(),
    word: word.to_string(),
    ensemble: result.ensemble,
    vocabulary: vocabulary.unwrap_or(0),
    information: information.unwrap_or(0),
    orthographic: orthographic.unwrap_or(0),
    confidence: result.confidence,
    band: result.band.to_string(),
  };
  println!("{}", serde_json::to_string_pretty(&response)?);
  Ok(())
}
