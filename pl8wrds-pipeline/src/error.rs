//! Errors produced while building models or running the precomputation pipeline.

/// Failure modes for [`crate::build_models::run_build_models`] and
/// [`crate::precompute::run_precompute`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
  /// The corpus could not be loaded.
  #[error("corpus load error: {0}")]
  Corpus(#[from] corpus::CorpusLoadError),

  /// A filesystem operation failed.
  #[error("pipeline I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// A model file or artifact file could not be (de)serialized.
  #[error("pipeline JSON error: {0}")]
  Json(#[from] serde_json::Error),

  /// A model file was missing or failed validation on load.
  #[error(transparent)]
  Model(#[from] pl8wrds_scoring::ModelError),

  /// A scorer rejected a word or plate it should never see, given a model built from
  /// the same corpus the pipeline is solving against.
  #[error(transparent)]
  Vocabulary(#[from] pl8wrds_scoring::VocabularyError),

  /// Same as [`PipelineError::Vocabulary`], for the information scorer.
  #[error(transparent)]
  Information(#[from] pl8wrds_scoring::InformationError),

  /// Artifact encoding or decoding failed.
  #[error(transparent)]
  Artifact(#[from] pl8wrds_artifact::ArtifactError),
}
