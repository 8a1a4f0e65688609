//! Loads a curated word → frequency corpus and exposes read-only lookups over it.
//!
//! A [`Corpus`] is built once, from an operator-supplied JSON file, and is immutable
//! thereafter: every other component (the solver's candidate filter, the vocabulary and
//! orthographic scorers, the model builders) holds a shared reference to it and never
//! mutates it.

#![warn(missing_docs)]

pub mod error;
pub mod stats;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub use error::CorpusLoadError;
pub use stats::CorpusStats;

/// Shortest word length PL8WRDS accepts into the corpus.
pub const MIN_WORD_LEN: usize = 2;
/// Longest word length PL8WRDS accepts into the corpus.
pub const MAX_WORD_LEN: usize = 20;

#[derive(serde::Deserialize)]
struct RawEntry {
  word: String,
  frequency: i64,
}

/// An immutable, in-memory word → frequency index.
///
/// Words are assigned dense `u32` ids in lexicographic order at load time; this is the
/// same id space the precomputation pipeline and artifact encoder reference, so the
/// dictionary file's `word_id` keys line up with [`Corpus::iter_words`]'s order.
pub struct Corpus {
  words: Vec<Box<str>>,
  frequencies: Vec<u32>,
  index: HashMap<Box<str>, u32>,
  rank: Vec<u32>,
  stats: CorpusStats,
}

impl Corpus {
  /// Loads a corpus from a JSON file at `path`.
  ///
  /// Accepts either wire shape: a JSON array of `{"word", "frequency"}` objects, or a
  /// flat JSON object mapping word to frequency. Non-conforming entries (wrong length,
  /// non-ASCII-alphabetic characters, non-positive frequency) are dropped with a
  /// `tracing::warn!` diagnostic rather than failing the whole load; duplicate words
  /// keep the last value seen, also with a diagnostic.
  ///
  /// # Errors
  ///
  /// Returns [`CorpusLoadError::NotFound`] if the file cannot be read,
  /// [`CorpusLoadError::Malformed`] if its contents match neither wire shape, and
  /// [`CorpusLoadError::Empty`] if every entry was rejected during normalization.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusLoadError> {
    let text = std::fs::read_to_string(path.as_ref()).map_err(CorpusLoadError::NotFound)?;
    Self::from_json_str(&text)
  }

  /// Parses and normalizes a corpus directly from a JSON string. See [`Corpus::load`]
  /// for the accepted wire shapes and normalization rules.
  pub fn from_json_str(text: &str) -> Result<Self, CorpusLoadError> {
    let entries = parse_entries(text)?;
    Self::from_entries(entries)
  }

  fn from_entries(entries: Vec<(String, i64)>) -> Result<Self, CorpusLoadError> {
    let mut table: BTreeMap<Box<str>, u32> = BTreeMap::new();

    for (word, frequency) in entries {
      let normalized = word.to_ascii_lowercase();

      if !is_conforming(&normalized, frequency) {
        tracing::warn!(
          word = %word,
          frequency,
          "rejecting non-conforming corpus entry"
        );
        continue;
      }

      if table.contains_key(normalized.as_str()) {
        tracing::warn!(word = %normalized, "duplicate corpus entry, keeping the last value");
      }

      table.insert(normalized.into_boxed_str(), frequency as u32);
    }

    if table.is_empty() {
      return Err(CorpusLoadError::Empty);
    }

    let mut words = Vec::with_capacity(table.len());
    let mut frequencies = Vec::with_capacity(table.len());
    let mut index = HashMap::with_capacity(table.len());

    for (id, (word, frequency)) in table.into_iter().enumerate() {
      index.insert(word.clone(), id as u32);
      words.push(word);
      frequencies.push(frequency);
    }

    let stats = CorpusStats::compute(&frequencies);
    let rank = compute_ranks(&words, &frequencies);

    Ok(Self {
      words,
      frequencies,
      index,
      rank,
      stats,
    })
  }

  /// Returns [true] if `word` (case-insensitive) is present in the corpus.
  #[must_use]
  pub fn contains(&self, word: &str) -> bool {
    self.index.contains_key(word.to_ascii_lowercase().as_str())
  }

  /// Returns the frequency of `word` (case-insensitive), or [None] if it is not present.
  #[must_use]
  pub fn frequency(&self, word: &str) -> Option<u32> {
    let id = *self.index.get(word.to_ascii_lowercase().as_str())?;
    Some(self.frequencies[id as usize])
  }

  /// Returns the dense word id for `word` (case-insensitive), or [None] if it is not present.
  #[must_use]
  pub fn word_id(&self, word: &str) -> Option<u32> {
    self.index.get(word.to_ascii_lowercase().as_str()).copied()
  }

  /// Returns the word stored at dense id `id`, or [None] if out of range.
  #[must_use]
  pub fn word_at(&self, id: u32) -> Option<&str> {
    self.words.get(id as usize).map(AsRef::as_ref)
  }

  /// Returns the 1-based ascending-frequency rank of `word`, or [None] if it is not
  /// present. Ties are broken lexicographically, so ranks are a stable total order.
  #[must_use]
  pub fn rank(&self, word: &str) -> Option<u32> {
    let id = *self.index.get(word.to_ascii_lowercase().as_str())?;
    Some(self.rank[id as usize])
  }

  /// Returns the number of distinct words in the corpus.
  #[must_use]
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// Returns [true] if the corpus has no words. A successfully loaded [`Corpus`] is
  /// never empty; this exists for API completeness.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Returns an iterator over every `(word, frequency)` pair, in lexicographic order
  /// of `word` — the same order word ids are assigned in.
  pub fn iter_words(&self) -> impl Iterator<Item = (&str, u32)> {
    self
      .words
      .iter()
      .map(AsRef::as_ref)
      .zip(self.frequencies.iter().copied())
  }

  /// Returns the precomputed frequency statistics for this corpus.
  #[must_use]
  pub const fn stats(&self) -> CorpusStats {
    self.stats
  }
}

fn is_conforming(word: &str, frequency: i64) -> bool {
  frequency >= 1
    && (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
    && word.bytes().all(|b| b.is_ascii_lowercase())
}

fn compute_ranks(words: &[Box<str>], frequencies: &[u32]) -> Vec<u32> {
  let mut order: Vec<usize> = (0..words.len()).collect();
  order.sort_by(|&a, &b| {
    frequencies[a]
      .cmp(&frequencies[b])
      .then_with(|| words[a].cmp(&words[b]))
  });

  let mut rank = vec![0u32; words.len()];
  for (position, word_id) in order.into_iter().enumerate() {
    rank[word_id] = (position + 1) as u32;
  }
  rank
}

fn parse_entries(text: &str) -> Result<Vec<(String, i64)>, CorpusLoadError> {
  let value: serde_json::Value = serde_json::from_str(text).map_err(|err| CorpusLoadError::Malformed {
    reason: format!("not valid JSON: {err}"),
  })?;

  match value {
    serde_json::Value::Array(_) => {
      let raw: Vec<RawEntry> = serde_json::from_value(value).map_err(|err| CorpusLoadError::Malformed {
        reason: format!("expected an array of {{\"word\", \"frequency\"}} objects: {err}"),
      })?;
      Ok(raw.into_iter().map(|entry| (entry.word, entry.frequency)).collect())
    }
    serde_json::Value::Object(map) => {
      let mut entries = Vec::with_capacity(map.len());
      for (word, frequency) in map {
        let frequency = frequency.as_i64().ok_or_else(|| CorpusLoadError::Malformed {
          reason: format!(r#"frequency for "{word}" is not an integer"#),
        })?;
        entries.push((word, frequency));
      }
      Ok(entries)
    }
    _ => Err(CorpusLoadError::Malformed {
      reason: "expected a JSON array or a flat JSON object".to_string(),
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::Corpus;

  #[test]
  fn loads_array_shape() {
    let corpus = Corpus::from_json_str(
      r#"[{"word":"cab","frequency":5},{"word":"about","frequency":100}]"#,
    )
    .unwrap();

    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.frequency("cab"), Some(5));
    assert_eq!(corpus.frequency("about"), Some(100));
  }

  #[test]
  fn loads_flat_object_shape() {
    let corpus = Corpus::from_json_str(r#"{"cab": 5, "about": 100}"#).unwrap();

    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.frequency("cab"), Some(5));
  }

  #[test]
  fn normalizes_case() {
    let corpus = Corpus::from_json_str(r#"{"CAB": 5}"#).unwrap();
    assert!(corpus.contains("cab"));
    assert!(corpus.contains("CAB"));
  }

  #[test]
  fn rejects_non_conforming_entries_without_failing() {
    let corpus = Corpus::from_json_str(r#"{"cab": 5, "a1b2": 3, "x": 9, "cab": 7}"#).unwrap();

    assert_eq!(corpus.len(), 1, "only \"cab\" conforms; others are too short or non-alphabetic");
    assert_eq!(corpus.frequency("cab"), Some(7), "duplicates keep the last value");
  }

  #[test]
  fn empty_after_normalization_is_an_error() {
    let err = Corpus::from_json_str(r#"{"x": 9, "a1b2": 3}"#).unwrap_err();
    assert!(matches!(err, super::CorpusLoadError::Empty));
  }

  #[test]
  fn malformed_json_is_an_error() {
    let err = Corpus::from_json_str("not json").unwrap_err();
    assert!(matches!(err, super::CorpusLoadError::Malformed { .. }));
  }

  #[test]
  fn iter_words_is_lexicographic() {
    let corpus = Corpus::from_json_str(r#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();
    let words: Vec<&str> = corpus.iter_words().map(|(word, _)| word).collect();
    assert_eq!(words, vec!["apple", "mango", "zebra"]);
  }

  #[test]
  fn word_ids_are_dense_and_lexicographic() {
    let corpus = Corpus::from_json_str(r#"{"zebra": 1, "apple": 2}"#).unwrap();
    assert_eq!(corpus.word_id("apple"), Some(0));
    assert_eq!(corpus.word_id("zebra"), Some(1));
    assert_eq!(corpus.word_at(0), Some("apple"));
  }

  #[test]
  fn rank_breaks_ties_lexicographically() {
    let corpus = Corpus::from_json_str(r#"{"bbb": 1, "aaa": 1, "ccc": 2}"#).unwrap();
    assert_eq!(corpus.rank("aaa"), Some(1));
    assert_eq!(corpus.rank("bbb"), Some(2));
    assert_eq!(corpus.rank("ccc"), Some(3));
  }

  #[test]
  fn stats_reflect_loaded_frequencies() {
    let corpus = Corpus::from_json_str(r#"{"aaa": 1, "bbb": 2, "ccc": 3}"#).unwrap();
    let stats = corpus.stats();
    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.min_frequency, 1);
    assert_eq!(stats.max_frequency, 3);
    assert_eq!(stats.median_frequency, 2.0);
  }
}
