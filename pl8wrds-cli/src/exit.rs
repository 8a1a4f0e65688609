//! Maps a library error to a process exit code: 0 success, 2 bad input, 3 I/O.

use corpus::CorpusLoadError;
use pl8wrds_artifact::ArtifactError;
use pl8wrds_pipeline::PipelineError;
use pl8wrds_scoring::{EnsembleError, InformationError, ModelError, VocabularyError};
use pl8wrds_solver::SolverError;

/// Bad-input exit code: the corpus, plate, or word was malformed or not found.
pub const BAD_INPUT: i32 = 2;
/// I/O exit code: a filesystem operation failed.
pub const IO_ERROR: i32 = 3;
/// Fallback exit code for anything not otherwise classified.
pub const UNKNOWN_ERROR: i32 = 1;

/// Walks `error`'s cause chain and returns the exit code its root cause maps to.
#[must_use]
pub fn classify(error: &anyhow::Error) -> i32 {
  for cause in error.chain() {
    if let Some(err) = cause.downcast_ref::<CorpusLoadError>() {
      return match err {
        CorpusLoadError::NotFound(_) => IO_ERROR,
        CorpusLoadError::Malformed { .. } | CorpusLoadError::Empty => BAD_INPUT,
      };
    }
    if let Some(err) = cause.downcast_ref::<SolverError>() {
      return match err {
        SolverError::BadPlate { .. } => BAD_INPUT,
      };
    }
    if cause.downcast_ref::<VocabularyError>().is_some() {
      return BAD_INPUT;
    }
    if cause.downcast_ref::<InformationError>().is_some() {
      return BAD_INPUT;
    }
    if let Some(err) = cause.downcast_ref::<ModelError>() {
      return match err {
        ModelError::Missing { .. } => IO_ERROR,
        ModelError::Invalid { .. } => BAD_INPUT,
      };
    }
    if cause.downcast_ref::<EnsembleError>().is_some() {
      return BAD_INPUT;
    }
    if let Some(err) = cause.downcast_ref::<ArtifactError>() {
      return match err {
        ArtifactError::Io(_) => IO_ERROR,
        ArtifactError::Json(_) | ArtifactError::ArtifactInvalid { .. } => BAD_INPUT,
      };
    }
    if let Some(err) = cause.downcast_ref::<PipelineError>() {
      return match err {
        PipelineError::Io(_) => IO_ERROR,
        PipelineError::Corpus(CorpusLoadError::NotFound(_)) => IO_ERROR,
        _ => BAD_INPUT,
      };
    }
    if cause.downcast_ref::<std::io::Error>().is_some() {
      return IO_ERROR;
    }
  }

  UNKNOWN_ERROR
}
