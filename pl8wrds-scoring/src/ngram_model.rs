//! Orthographic Model Builder: trigram/quartet probability tables.

use std::collections::HashMap;

use corpus::Corpus;

/// Aggregate statistics recorded alongside an [`OrthographicModel`], so the model is
/// self-describing for anyone loading it from disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicModelStats {
  /// Total n-gram occurrences counted across the corpus (trigrams + quartets).
  pub total_ngrams: u64,
  /// 10th percentile of `combined_surprisal` across the corpus; the low anchor for
  /// normalizing a word's surprisal into a 0–100 score.
  pub p10: f64,
  /// 99th percentile of `combined_surprisal` across the corpus; the high anchor.
  pub p99: f64,
  /// Probability assigned to any n-gram never observed in the corpus.
  pub smoothing_eps: f64,
}

/// Trigram and quartet probability tables built once from a [`Corpus`], plus the
/// statistics [`crate::orthographic::OrthographicScorer`] needs to normalize a raw
/// surprisal value into a 0–100 score.
#[derive(Debug, Clone)]
pub struct OrthographicModel {
  /// Trigram → probability, summing to 1.0 within floating-point tolerance.
  pub trigrams: HashMap<String, f64>,
  /// Quartet → probability, summing to 1.0 within floating-point tolerance.
  pub quartets: HashMap<String, f64>,
  /// Totals and normalization anchors.
  pub stats: OrthographicModelStats,
}

impl OrthographicModel {
  /// Probability of `ngram`, falling back to [`OrthographicModelStats::smoothing_eps`]
  /// for n-grams never observed in the corpus.
  #[must_use]
  pub fn trigram_probability(&self, trigram: &str) -> f64 {
    self
      .trigrams
      .get(trigram)
      .copied()
      .unwrap_or(self.stats.smoothing_eps)
  }

  /// Probability of `quartet`, falling back to [`OrthographicModelStats::smoothing_eps`]
  /// for n-grams never observed in the corpus.
  #[must_use]
  pub fn quartet_probability(&self, quartet: &str) -> f64 {
    self
      .quartets
      .get(quartet)
      .copied()
      .unwrap_or(self.stats.smoothing_eps)
  }
}

/// Prepends `^` and appends `$` boundary markers, the shape n-gram extraction runs over.
#[must_use]
pub fn bounded(word: &str) -> String {
  format!("^{word}$")
}

/// Returns every overlapping substring of length `n` in `bounded_word`.
pub fn ngrams(bounded_word: &str, n: usize) -> impl Iterator<Item = &str> {
  let chars: Vec<usize> = bounded_word.char_indices().map(|(i, _)| i).collect();
  (0..chars.len().saturating_sub(n - 1)).map(move |i| {
    let start = chars[i];
    let end = chars.get(i + n).copied().unwrap_or(bounded_word.len());
    &bounded_word[start..end]
  })
}

/// Builds trigram and quartet probability tables from every word in `corpus`, with `^`/`$`
/// boundary markers, then computes the `p10`/`p99` normalization anchors by scoring every
/// corpus word's raw combined surprisal against those tables.
#[must_use]
pub fn build_orthographic_model(corpus: &Corpus) -> OrthographicModel {
  let mut trigram_counts: HashMap<String, u64> = HashMap::new();
  let mut quartet_counts: HashMap<String, u64> = HashMap::new();

  for (word, _frequency) in corpus.iter_words() {
    let bounded_word = bounded(word);
    for trigram in ngrams(&bounded_word, 3) {
      *trigram_counts.entry(trigram.to_string()).or_insert(0) += 1;
    }
    for quartet in ngrams(&bounded_word, 4) {
      *quartet_counts.entry(quartet.to_string()).or_insert(0) += 1;
    }
  }

  let trigram_total: u64 = trigram_counts.values().sum();
  let quartet_total: u64 = quartet_counts.values().sum();
  let total_ngrams = trigram_total + quartet_total;
  let smoothing_eps = 1.0 / (total_ngrams as f64 * 2.0);

  let trigrams: HashMap<String, f64> = trigram_counts
    .into_iter()
    .map(|(gram, count)| (gram, count as f64 / trigram_total as f64))
    .collect();
  let quartets: HashMap<String, f64> = quartet_counts
    .into_iter()
    .map(|(gram, count)| (gram, count as f64 / quartet_total as f64))
    .collect();

  let mut model = OrthographicModel {
    trigrams,
    quartets,
    stats: OrthographicModelStats {
      total_ngrams,
      p10: 0.0,
      p99: 0.0,
      smoothing_eps,
    },
  };

  let mut surprisals: Vec<f64> = corpus
    .iter_words()
    .filter_map(|(word, _)| crate::orthographic::raw_combined_surprisal(&model, word))
    .collect();
  surprisals.sort_by(f64::total_cmp);

  if !surprisals.is_empty() {
    model.stats.p10 = percentile(&surprisals, 0.10);
    model.stats.p99 = percentile(&surprisals, 0.99);
  }

  tracing::debug!(
    trigrams = model.trigrams.len(),
    quartets = model.quartets.len(),
    total_ngrams,
    "built orthographic model"
  );

  model
}

fn percentile(sorted: &[f64], fraction: f64) -> f64 {
  let index = ((sorted.len() - 1) as f64 * fraction).floor() as usize;
  sorted[index]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bounded_adds_markers() {
    assert_eq!(bounded("cab"), "^cab$");
  }

  #[test]
  fn ngrams_extracts_overlapping_windows() {
    let bounded_word = bounded("ab");
    assert_eq!(ngrams(&bounded_word, 3).collect::<Vec<_>>(), vec!["^ab", "ab$"]);
  }

  #[test]
  fn probabilities_sum_to_one() {
    let corpus = Corpus::from_json_str(r#"{"cab":1,"cabin":1,"about":1}"#).unwrap();
    let model = build_orthographic_model(&corpus);

    let trigram_sum: f64 = model.trigrams.values().sum();
    let quartet_sum: f64 = model.quartets.values().sum();

    assert!((trigram_sum - 1.0).abs() < 1e-9);
    assert!((quartet_sum - 1.0).abs() < 1e-9);
  }

  #[test]
  fn unseen_ngram_falls_back_to_smoothing() {
    let corpus = Corpus::from_json_str(r#"{"cab":1}"#).unwrap();
    let model = build_orthographic_model(&corpus);
    assert_eq!(model.trigram_probability("zzz"), model.stats.smoothing_eps);
  }
}
