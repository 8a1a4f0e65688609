//! Error kinds for every scorer in this crate.

/// Failure modes for [`crate::vocabulary::VocabularyScorer::score`].
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
  /// The queried word is not present in the corpus backing the scorer.
  #[error("word {word:?} is not in the corpus")]
  WordNotInCorpus {
    /// The word that was queried.
    word: String,
  },
}

/// Failure modes for [`crate::information::InformationScorer::score`].
#[derive(Debug, thiserror::Error)]
pub enum InformationError {
  /// The word does not solve the plate, so it has no information score for it.
  #[error("{word:?} is not a solution of plate {plate:?}")]
  NotASolution {
    /// The plate queried against.
    plate: String,
    /// The word that does not solve it.
    word: String,
  },
}

/// Failure modes for loading a model built by [`crate::ngram_model`] or
/// [`crate::info_model`].
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
  /// The model file does not exist at the expected path.
  #[error("model file missing: {path}")]
  Missing {
    /// The path that was expected to hold the model.
    path: String,
  },
  /// The model file exists but failed to parse or violates an invariant.
  #[error("model file invalid: {reason}")]
  Invalid {
    /// Why the model was rejected.
    reason: String,
  },
}

/// Failure modes for [`crate::ensemble::combine`].
#[derive(Debug, thiserror::Error)]
pub enum EnsembleError {
  /// Every component scorer failed, so there is nothing to combine.
  #[error("all components failed for word {word:?}")]
  AllComponentsFailed {
    /// The word that could not be scored by any component.
    word: String,
  },
}
