//! Errors produced while encoding or decoding artifact files.

/// Failure modes for the encoder and decoder in [`crate::codec`].
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
  /// A filesystem operation failed.
  #[error("artifact I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// The JSON payload could not be (de)serialized.
  #[error("artifact JSON error: {0}")]
  Json(#[from] serde_json::Error),

  /// The decoded artifact failed structural validation: a type/range mismatch, a
  /// dangling `word_id` cross-reference, or a `metadata.total_plates` mismatch.
  #[error("artifact invalid: {reason}")]
  ArtifactInvalid {
    /// What validation check failed.
    reason: String,
  },
}
