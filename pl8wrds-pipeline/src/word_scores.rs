//! A per-word score memoization table: a concurrent map with insert-or-get semantics,
//! since every write is a pure recomputation of the same value.

use dashmap::DashMap;

/// A word's plate-independent scores — the two components that only depend on the
/// word itself, not on which plate it is solving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScores {
  /// The Vocabulary Scorer's combined score.
  pub vocabulary_score: u8,
  /// The Orthographic Scorer's score.
  pub orthographic_score: u8,
}

/// Returns `word_id`'s memoized [`WordScores`], computing and inserting it on first
/// access. Concurrent callers may race to compute the same entry; both land the same
/// value, so the race is harmless.
///
/// # Panics
///
/// Panics if `word_id` is not present in `corpus` or is rejected by `vocabulary` —
/// both are programmer errors, since every `word_id` passed here came from that same
/// corpus's solver output.
pub fn word_scores(
  word_id: u32,
  corpus: &corpus::Corpus,
  vocabulary: &pl8wrds_scoring::VocabularyScorer,
  orthographic: &pl8wrds_scoring::OrthographicScorer,
  table: &DashMap<u32, WordScores>,
) -> WordScores {
  if let Some(cached) = table.get(&word_id) {
    return *cached;
  }

  let word = corpus
    .word_at(word_id)
    .unwrap_or_else(|| panic!("word_id {word_id} is not in the corpus this table was built over"));

  let scores = WordScores {
    vocabulary_score: vocabulary
      .score(word)
      .unwrap_or_else(|err| panic!("word {word:?} rejected by its own corpus's vocabulary scorer: {err}"))
      .combined,
    orthographic_score: orthographic.score(word),
  };

  table.insert(word_id, scores);
  scores
}

#[cfg(test)]
mod tests {
  use super::*;
  use corpus::Corpus;
  use pl8wrds_scoring::{build_orthographic_model, OrthographicScorer, VocabularyScorer};

  #[test]
  fn memoizes_across_repeated_lookups() {
    let corpus = Corpus::from_json_str(r#"{"cab":5,"cabin":4,"about":100}"#).unwrap();
    let vocabulary = VocabularyScorer::build(&corpus);
    let ortho_model = build_orthographic_model(&corpus);
    let orthographic = OrthographicScorer::new(&ortho_model);
    let table = DashMap::new();

    let word_id = corpus.word_id("cab").unwrap();
    let first = word_scores(word_id, &corpus, &vocabulary, &orthographic, &table);
    let second = word_scores(word_id, &corpus, &vocabulary, &orthographic, &table);

    assert_eq!(first, second);
    assert_eq!(table.len(), 1);
  }
}
