//! Request/response DTOs an HTTP layer in front of this engine would serialize.
//!
//! No networking code lives here — this module exists purely so the wire contract is
//! self-describing for whoever builds that router.

use serde::{Deserialize, Serialize};

/// A solve request, as an HTTP handler would deserialize it from a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
  /// The plate to solve, 3–8 uppercase ASCII letters.
  pub plate: String,
  /// Reject candidate words shorter than this.
  pub min_length: Option<usize>,
  /// Reject candidate words longer than this.
  pub max_length: Option<usize>,
  /// Stop once this many matches have been found.
  pub max_results: Option<usize>,
}

/// A solve response, as an HTTP handler would serialize it into a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
  /// The plate that was solved.
  pub plate: String,
  /// Every matching word, lexicographic ascending.
  pub words: Vec<String>,
  /// `words.len()`.
  pub count: usize,
}

/// A score request for a single (plate, word) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
  /// The plate `word` is being scored against.
  pub plate: String,
  /// The word to score.
  pub word: String,
}

/// A score response: the three component scores plus their ensemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
  /// The plate that was scored against.
  pub plate: String,
  /// The word that was scored.
  pub word: String,
  /// The combined ensemble score.
  pub ensemble: u8,
  /// The Vocabulary Scorer's combined score.
  pub vocabulary: u8,
  /// The Information Scorer's score.
  pub information: u8,
  /// The Orthographic Scorer's score.
  pub orthographic: u8,
  /// `successful_components / 3.0`.
  pub confidence: f64,
  /// The human-readable interpretation band for `ensemble`.
  pub band: String,
}
