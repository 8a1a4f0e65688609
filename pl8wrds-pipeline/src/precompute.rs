//! Drives C8: solves every plate in a model's universe and assembles the shipped
//! artifact, checkpointing progress so a killed run can resume.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use corpus::Corpus;
use dashmap::DashMap;
use indicatif::{ProgressBar, ProgressStyle};
use pl8wrds_artifact::{corpus_hash, ArtifactMetadata, CompleteArtifact, Dictionary, DictionaryWord, PlateRecord};
use pl8wrds_scoring::{InformationModel, InformationScorer, OrthographicModel, OrthographicScorer, VocabularyScorer};
use rayon::prelude::*;

use crate::config::build_thread_pool;
use crate::error::PipelineError;
use crate::word_scores::{word_scores, WordScores};

const CHECKPOINT_DIR: &str = ".pl8wrds-tmp";

/// Inputs for a single [`run_precompute`] call.
pub struct PrecomputeConfig<'a> {
  /// Path to the corpus file the models were built from — hashed into
  /// [`ArtifactMetadata::corpus_hash`].
  pub corpus_path: &'a Path,
  /// Directory to write `pl8wrds_complete.json.gz` and `dictionary.json` into.
  pub out_dir: &'a Path,
  /// Plates per checkpoint chunk.
  pub checkpoint_every: usize,
}

/// Runs the full precomputation: solves every plate the information model covers,
/// scores every solving word, and writes both artifact files to `config.out_dir`.
///
/// Resumable: plates already checkpointed under `<out_dir>/.pl8wrds-tmp/` from a prior
/// run are not resolved again.
///
/// # Errors
///
/// Returns [`PipelineError::Corpus`] if the corpus fails to reload (only used for its
/// hash), and [`PipelineError::Io`]/[`PipelineError::Json`]/[`PipelineError::Artifact`]
/// on any filesystem or (de)serialization failure.
pub fn run_precompute(
  config: &PrecomputeConfig,
  corpus: &Corpus,
  orthographic_model: &OrthographicModel,
  information_model: &InformationModel,
) -> Result<(), PipelineError> {
  let pool = build_thread_pool();

  let vocabulary = VocabularyScorer::build(corpus);
  let orthographic = OrthographicScorer::new(orthographic_model);
  let information = InformationScorer::new(information_model);

  let mut plates: Vec<&str> = information_model.plates.keys().map(String::as_str).collect();
  plates.sort_unstable();

  let checkpoint_dir = config.out_dir.join(CHECKPOINT_DIR);
  std::fs::create_dir_all(&checkpoint_dir)?;

  let progress = ProgressBar::new(plates.len() as u64);
  progress.set_style(
    ProgressStyle::with_template("{bar:40} {pos}/{len} plates ({eta} remaining)")
      .unwrap_or_else(|_| ProgressStyle::default_bar()),
  );

  let chunks: Vec<&[&str]> = plates.chunks(config.checkpoint_every.max(1)).collect();

  let chunk_count = chunks.len();
  for (chunk_index, chunk) in chunks.into_iter().enumerate() {
    let chunk_path = checkpoint_dir.join(format!("chunk-{chunk_index:06}.json"));

    if chunk_path.exists() {
      tracing::debug!(chunk_index, "checkpoint already present, skipping");
      progress.inc(chunk.len() as u64);
      continue;
    }

    let records: Vec<PlateRecord> = pool.install(|| {
      chunk
        .par_iter()
        .map(|&plate| solve_plate(plate, corpus, information_model, &information))
        .collect()
    });

    let json = serde_json::to_vec(&records)?;
    write_atomically(&chunk_path, &json)?;

    tracing::info!(chunk_index, plates = chunk.len(), "checkpointed chunk");
    progress.inc(chunk.len() as u64);
  }

  progress.finish_with_message("solved every plate");

  let mut all_plates = Vec::with_capacity(plates.len());
  for chunk_index in 0..chunk_count {
    let chunk_path = checkpoint_dir.join(format!("chunk-{chunk_index:06}.json"));
    let text = std::fs::read_to_string(&chunk_path)?;
    let records: Vec<PlateRecord> = serde_json::from_str(&text)?;
    all_plates.extend(records);
  }

  let referenced_word_ids: BTreeSet<u32> = all_plates
    .iter()
    .flat_map(|record| record.solutions.keys())
    .filter_map(|word_id| word_id.parse::<u32>().ok())
    .collect();

  let table: DashMap<u32, WordScores> = DashMap::new();
  let dictionary_entries: Vec<(u32, WordScores)> = pool.install(|| {
    referenced_word_ids
      .par_iter()
      .map(|&word_id| (word_id, word_scores(word_id, corpus, &vocabulary, &orthographic, &table)))
      .collect()
  });

  let mut dictionary: Dictionary = BTreeMap::new();
  for (word_id, scores) in dictionary_entries {
    let word = corpus
      .word_at(word_id)
      .unwrap_or_else(|| panic!("word_id {word_id} referenced by a solved plate is not in the corpus"));
    dictionary.insert(
      word_id.to_string(),
      DictionaryWord {
        word: word.to_string(),
        frequency_score: scores.vocabulary_score,
        orthographic_score: scores.orthographic_score,
      },
    );
  }

  let total_solutions: u64 = all_plates.iter().map(|record| record.solutions.len() as u64).sum();
  let corpus_bytes = std::fs::read(config.corpus_path)?;

  let artifact = CompleteArtifact {
    metadata: ArtifactMetadata {
      total_plates: all_plates.len() as u32,
      total_solutions,
      generation_date: chrono::Utc::now().to_rfc3339(),
      max_solutions: information_model.max_solutions,
      corpus_hash: corpus_hash(&corpus_bytes),
    },
    plates: all_plates,
  };

  std::fs::create_dir_all(config.out_dir)?;
  pl8wrds_artifact::encode_complete_artifact(&artifact, config.out_dir.join("pl8wrds_complete.json.gz"))?;
  pl8wrds_artifact::write_dictionary(&dictionary, config.out_dir.join("dictionary.json"))?;

  tracing::info!(
    plates = artifact.metadata.total_plates,
    solutions = artifact.metadata.total_solutions,
    words = dictionary.len(),
    "wrote complete artifact"
  );

  std::fs::remove_dir_all(&checkpoint_dir)?;

  Ok(())
}

fn solve_plate(
  plate: &str,
  corpus: &Corpus,
  information_model: &InformationModel,
  information: &InformationScorer,
) -> PlateRecord {
  let mut solutions = BTreeMap::new();

  if let Some(plate_solutions) = information_model.plates.get(plate) {
    for word in &plate_solutions.solutions {
      let word_id = corpus
        .word_id(word)
        .unwrap_or_else(|| panic!("word {word:?} in the information model is not in this corpus"));
      let score = information
        .score(plate, word)
        .unwrap_or_else(|err| panic!("word {word:?} is in plate {plate:?}'s own solution set: {err}"));
      solutions.insert(word_id.to_string(), score);
    }
  }

  PlateRecord {
    letters: plate.chars().collect(),
    solutions,
  }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), PipelineError> {
  let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
  tmp_name.push(".tmp");
  let tmp_path: PathBuf = path.with_file_name(tmp_name);

  std::fs::write(&tmp_path, contents)?;
  std::fs::rename(&tmp_path, path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use pl8wrds_scoring::{build_information_model, build_orthographic_model};
  use pl8wrds_solver::Solver;

  fn setup(dir: &Path) -> (Corpus, OrthographicModel, InformationModel) {
    let corpus = Corpus::from_json_str(r#"{"cab":5,"cabin":4,"cable":3,"about":100}"#).unwrap();
    let orthographic_model = build_orthographic_model(&corpus);
    let solver = Solver::build(&corpus);
    let information_model = build_information_model(
      &corpus,
      &solver,
      ["CAB".to_string(), "ABC".to_string(), "ZZZ".to_string()],
    );
    std::fs::create_dir_all(dir).ok();
    (corpus, orthographic_model, information_model)
  }

  #[test]
  fn produces_a_valid_artifact_and_dictionary() {
    let dir = std::env::temp_dir().join("pl8wrds-pipeline-precompute-test");
    std::fs::create_dir_all(&dir).unwrap();
    let corpus_path = dir.join("corpus.json");
    std::fs::write(&corpus_path, r#"{"cab":5,"cabin":4,"cable":3,"about":100}"#).unwrap();

    let (corpus, orthographic_model, information_model) = setup(&dir);
    let out_dir = dir.join("out");

    let config = PrecomputeConfig {
      corpus_path: &corpus_path,
      out_dir: &out_dir,
      checkpoint_every: 2,
    };
    run_precompute(&config, &corpus, &orthographic_model, &information_model).unwrap();

    let artifact = pl8wrds_artifact::decode_complete_artifact(out_dir.join("pl8wrds_complete.json.gz")).unwrap();
    assert_eq!(artifact.metadata.total_plates, 3);

    let dictionary = pl8wrds_artifact::read_dictionary(out_dir.join("dictionary.json")).unwrap();
    pl8wrds_artifact::validate_against_dictionary(&artifact, &dictionary).unwrap();

    assert!(!out_dir.join(CHECKPOINT_DIR).exists());

    std::fs::remove_dir_all(&dir).ok();
  }

  #[test]
  fn resumes_from_existing_checkpoints() {
    let dir = std::env::temp_dir().join("pl8wrds-pipeline-precompute-resume-test");
    std::fs::create_dir_all(&dir).unwrap();
    let corpus_path = dir.join("corpus.json");
    std::fs::write(&corpus_path, r#"{"cab":5,"cabin":4,"cable":3,"about":100}"#).unwrap();

    let (corpus, orthographic_model, information_model) = setup(&dir);
    let out_dir = dir.join("out");
    std::fs::create_dir_all(out_dir.join(CHECKPOINT_DIR)).unwrap();
    // Pre-seed chunk 0 (plates "ABC", "CAB") as already checkpointed, so the run below
    // must skip resolving it and only solve chunk 1 ("ZZZ").
    std::fs::write(
      out_dir.join(CHECKPOINT_DIR).join("chunk-000000.json"),
      r#"[{"letters":["A","B","C"],"solutions":{}},{"letters":["C","A","B"],"solutions":{}}]"#,
    )
    .unwrap();

    let config = PrecomputeConfig {
      corpus_path: &corpus_path,
      out_dir: &out_dir,
      checkpoint_every: 2,
    };
    run_precompute(&config, &corpus, &orthographic_model, &information_model).unwrap();

    let artifact = pl8wrds_artifact::decode_complete_artifact(out_dir.join("pl8wrds_complete.json.gz")).unwrap();
    assert_eq!(artifact.metadata.total_plates, 3, "the pre-seeded chunk plus the freshly solved chunk");

    std::fs::remove_dir_all(&dir).ok();
  }
}
