//! Vocabulary Scorer: a 0–100 rarity score for a single word.

use corpus::Corpus;

use crate::error::VocabularyError;

/// A word's vocabulary score, with the three sub-scores kept alongside `combined` for
/// introspection — a tagged record with fixed fields, not a duck-typed scoring dict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VocabularyScore {
  /// `round(0.4*inverse_frequency + 0.4*percentile_rarity + 0.2*z_score_rarity)`.
  pub combined: u8,
  /// Rarity relative to the corpus's log-frequency range.
  pub inverse_frequency: f64,
  /// `100 - ascending_frequency_percentile(word)`.
  pub percentile_rarity: f64,
  /// Rarity relative to the corpus's log-frequency mean and standard deviation, clamped
  /// to `[0, 100]`.
  pub z_score_rarity: f64,
}

/// Scores a word's rarity against a fixed [`Corpus`]. Built once; immutable thereafter.
pub struct VocabularyScorer<'corpus> {
  corpus: &'corpus Corpus,
  log_freq_min: f64,
  log_freq_max: f64,
  mean: f64,
  std_dev: f64,
  sorted_frequencies: Vec<u32>,
}

impl<'corpus> VocabularyScorer<'corpus> {
  /// Precomputes corpus-wide log-frequency statistics (min, max, mean, population
  /// standard deviation) and a sorted frequency column for percentile lookups.
  #[must_use]
  pub fn build(corpus: &'corpus Corpus) -> Self {
    let log_freqs: Vec<f64> = corpus
      .iter_words()
      .map(|(_, frequency)| log_freq(frequency))
      .collect();

    let log_freq_min = log_freqs.iter().copied().fold(f64::INFINITY, f64::min);
    let log_freq_max = log_freqs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = log_freqs.iter().sum::<f64>() / log_freqs.len() as f64;
    let variance =
      log_freqs.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / log_freqs.len() as f64;
    let std_dev = variance.sqrt();

    let mut sorted_frequencies: Vec<u32> = corpus.iter_words().map(|(_, f)| f).collect();
    sorted_frequencies.sort_unstable();

    Self {
      corpus,
      log_freq_min,
      log_freq_max,
      mean,
      std_dev,
      sorted_frequencies,
    }
  }

  /// Scores `word`'s rarity.
  ///
  /// # Errors
  ///
  /// Returns [`VocabularyError::WordNotInCorpus`] if `word` is not present in the
  /// corpus this scorer was built over.
  pub fn score(&self, word: &str) -> Result<VocabularyScore, VocabularyError> {
    let frequency = self
      .corpus
      .frequency(word)
      .ok_or_else(|| VocabularyError::WordNotInCorpus {
        word: word.to_string(),
      })?;

    let log_freq_w = log_freq(frequency);

    let denom = self.log_freq_max - self.log_freq_min;
    let inverse_frequency = if denom > 0.0 {
      100.0 * (1.0 - (log_freq_w - self.log_freq_min) / denom)
    } else {
      0.0
    };

    let rank_percentile = self.ascending_frequency_percentile(frequency);
    let percentile_rarity = 100.0 - rank_percentile;

    let z_score_rarity = if self.std_dev > 0.0 {
      (50.0 - 25.0 * ((log_freq_w - self.mean) / self.std_dev)).clamp(0.0, 100.0)
    } else {
      50.0
    };

    let combined = (0.4 * inverse_frequency + 0.4 * percentile_rarity + 0.2 * z_score_rarity)
      .round()
      .clamp(0.0, 100.0) as u8;

    Ok(VocabularyScore {
      combined,
      inverse_frequency,
      percentile_rarity,
      z_score_rarity,
    })
  }

  /// Percentile rank of `frequency` among all corpus frequencies, ascending, with tied
  /// frequencies sharing the higher rank (standard competition ranking).
  fn ascending_frequency_percentile(&self, frequency: u32) -> f64 {
    let count_at_or_below = self.sorted_frequencies.partition_point(|&f| f <= frequency);
    100.0 * count_at_or_below as f64 / self.sorted_frequencies.len() as f64
  }
}

fn log_freq(frequency: u32) -> f64 {
  (f64::from(frequency) + 1.0).log10()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_word_is_an_error() {
    let corpus = Corpus::from_json_str(r#"{"cab":5}"#).unwrap();
    let scorer = VocabularyScorer::build(&corpus);
    assert!(matches!(
      scorer.score("zzz"),
      Err(VocabularyError::WordNotInCorpus { .. })
    ));
  }

  #[test]
  fn rarer_word_scores_higher() {
    let corpus = Corpus::from_json_str(r#"{"common":10000,"rare":1}"#).unwrap();
    let scorer = VocabularyScorer::build(&corpus);

    let common = scorer.score("common").unwrap();
    let rare = scorer.score("rare").unwrap();

    assert!(rare.combined > common.combined);
  }

  #[test]
  fn scores_stay_in_range() {
    let corpus = Corpus::from_json_str(r#"{"a":1,"b":2,"c":3,"d":100000}"#).unwrap();
    let scorer = VocabularyScorer::build(&corpus);

    for word in ["a", "b", "c", "d"] {
      let score = scorer.score(word).unwrap();
      assert!((0..=100).contains(&(score.combined as i32)));
    }
  }

  #[test]
  fn uniform_corpus_does_not_panic() {
    let corpus = Corpus::from_json_str(r#"{"aa":5,"bb":5,"cc":5}"#).unwrap();
    let scorer = VocabularyScorer::build(&corpus);
    let score = scorer.score("aa").unwrap();
    assert_eq!(score.inverse_frequency, 0.0);
  }
}
