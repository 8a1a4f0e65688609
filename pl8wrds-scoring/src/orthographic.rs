//! Orthographic Scorer: a 0–100 score for a word's letter-pattern complexity.

use crate::ngram_model::{bounded, ngrams, OrthographicModel};

/// Scores a word's orthographic complexity against a fixed [`OrthographicModel`].
pub struct OrthographicScorer<'model> {
  model: &'model OrthographicModel,
}

impl<'model> OrthographicScorer<'model> {
  /// Builds a scorer over `model`.
  #[must_use]
  pub const fn new(model: &'model OrthographicModel) -> Self {
    Self { model }
  }

  /// Scores `word`'s orthographic complexity. Never fails; returns `0` for words
  /// shorter than 2 letters, since they carry no meaningful n-gram signal.
  #[must_use]
  pub fn score(&self, word: &str) -> u8 {
    if word.len() < 2 {
      return 0;
    }

    let Some(combined_surprisal) = raw_combined_surprisal(self.model, word) else {
      return 0;
    };

    let (p10, p99) = (self.model.stats.p10, self.model.stats.p99);
    let span = p99 - p10;
    let normalized = if span > 0.0 {
      100.0 * (combined_surprisal - p10) / span
    } else {
      50.0
    };

    normalized.round().clamp(0.0, 100.0) as u8
  }
}

/// The word's raw (unnormalized) combined surprisal, or [None] for words too short to
/// extract a quartet from (fewer than 2 letters).
pub(crate) fn raw_combined_surprisal(model: &OrthographicModel, word: &str) -> Option<f64> {
  if word.len() < 2 {
    return None;
  }

  let bounded_word = bounded(word);

  let trigrams: Vec<&str> = ngrams(&bounded_word, 3).collect();
  let quartets: Vec<&str> = ngrams(&bounded_word, 4).collect();

  let avg_trigram_surprisal = mean_surprisal(&trigrams, |g| model.trigram_probability(g));
  let avg_quartet_surprisal = mean_surprisal(&quartets, |g| model.quartet_probability(g));

  Some(0.5 * avg_trigram_surprisal + 0.5 * avg_quartet_surprisal)
}

fn mean_surprisal<'a>(grams: &[&'a str], probability_of: impl Fn(&'a str) -> f64) -> f64 {
  if grams.is_empty() {
    return 0.0;
  }
  let total: f64 = grams.iter().map(|&g| -probability_of(g).log2()).sum();
  total / grams.len() as f64
}
