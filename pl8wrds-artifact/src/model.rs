//! Wire types for the two artifact files: `pl8wrds_complete.json.gz` and
//! `dictionary.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header metadata for a [`CompleteArtifact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
  /// `plates.len()` at build time; the decoder re-checks this on load.
  pub total_plates: u32,
  /// Total `(plate, word)` solution pairs across every plate.
  pub total_solutions: u64,
  /// ISO-8601 UTC timestamp of when the artifact was generated.
  pub generation_date: String,
  /// The `MAX_SOLUTIONS` constant the Information Scorer normalized against.
  pub max_solutions: u32,
  /// SHA-256 hex digest of the corpus file the artifact was built from.
  pub corpus_hash: String,
}

/// One plate's solved record, as shipped in `pl8wrds_complete.json.gz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateRecord {
  /// The plate's letters, in plate order.
  pub letters: Vec<char>,
  /// `word_id` (decimal string) → information score, for every solving word.
  pub solutions: BTreeMap<String, u8>,
}

impl PlateRecord {
  /// The plate's letters joined into a single string, e.g. `"ABC"`.
  #[must_use]
  pub fn letters_joined(&self) -> String {
    self.letters.iter().collect()
  }
}

/// The full on-disk contents of `pl8wrds_complete.json.gz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteArtifact {
  /// Summary metadata, re-validated by the decoder.
  pub metadata: ArtifactMetadata,
  /// Every plate's record, ordered lexicographically by `letters` joined.
  pub plates: Vec<PlateRecord>,
}

/// The full on-disk contents of `dictionary.json`: `word_id` (decimal string) → entry.
///
/// `word_id` is assigned densely in lexicographic order of the word it names, matching
/// [`corpus::Corpus`]'s own word id space.
pub type Dictionary = BTreeMap<String, DictionaryWord>;

/// A dictionary entry paired with the word it names, since the wire format nests the
/// word string inside the entry rather than using it as the map key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryWord {
  /// The lowercase word this id refers to.
  pub word: String,
  /// The vocabulary combined score.
  pub frequency_score: u8,
  /// The orthographic score.
  pub orthographic_score: u8,
}

/// Reconstructs the ensemble score for a word from its dictionary entry and an
/// information score, per the artifact's load-time reconstruction rule.
#[must_use]
pub fn reconstruct_ensemble(dictionary_word: &DictionaryWord, info_score: u8) -> u8 {
  let sum = u32::from(dictionary_word.frequency_score)
    + u32::from(info_score)
    + u32::from(dictionary_word.orthographic_score);
  (sum as f64 / 3.0).round() as u8
}
