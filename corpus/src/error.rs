//! Errors produced while loading a [`crate::Corpus`].

/// Failure modes for [`crate::Corpus::load`].
#[derive(Debug, thiserror::Error)]
pub enum CorpusLoadError {
  /// The corpus file could not be read from disk.
  #[error("corpus file not found or unreadable")]
  NotFound(#[source] std::io::Error),

  /// The corpus file was read but did not match either accepted wire shape.
  #[error("corpus file malformed: {reason}")]
  Malformed {
    /// Human-readable description of what was wrong with the input.
    reason: String,
  },

  /// Every entry in the corpus was rejected during normalization, leaving nothing to load.
  #[error("corpus is empty after normalization")]
  Empty,
}
