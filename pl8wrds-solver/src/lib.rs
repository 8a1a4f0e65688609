//! Enumerates every corpus word that embeds a plate's letters as an ordered subsequence.
//!
//! The [`Solver`] builds a per-letter posting list over the corpus once at construction
//! (`self::build`), then answers each [`Solver::solve`] call by intersecting the posting
//! lists for the plate's distinct letters down to a small candidate set, and confirming
//! each candidate with a cursor walk that advances through per-letter positions via
//! binary search. Candidate word ids come out of the intersection already sorted
//! ascending, and word ids are assigned densely in lexicographic order by the corpus, so
//! the result list is lexicographic-ascending for free.

#![warn(missing_docs)]

pub mod error;

use std::time::{Duration, Instant};

use corpus::Corpus;
pub use error::SolverError;
use letters::{compress_letter, LetterSet};

const MIN_PLATE_LEN: usize = 3;
const MAX_PLATE_LEN: usize = 8;

/// Options narrowing a [`Solver::solve`] call. All fields are optional; omitted fields
/// admit all corpus words.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
  /// Reject candidate words shorter than this.
  pub min_length: Option<usize>,
  /// Reject candidate words longer than this.
  pub max_length: Option<usize>,
  /// Stop once this many matches have been found.
  pub max_results: Option<usize>,
}

/// The result of a single [`Solver::solve`] call.
#[derive(Debug, Clone)]
pub struct SolveResult {
  /// Matching word ids, lexicographic ascending (word ids are assigned in that order).
  pub word_ids: Vec<u32>,
  /// `word_ids.len()`, kept as a field to match the external contract's shape.
  pub count: usize,
  /// Wall-clock time spent inside [`Solver::solve`].
  pub elapsed: Duration,
}

type Postings = [Vec<(u32, Vec<u8>)>; 26];

/// A solver built once over a [`Corpus`] and shared (read-only) across every subsequent
/// query — safe to call concurrently from multiple threads during precomputation.
pub struct Solver<'corpus> {
  corpus: &'corpus Corpus,
  postings: Postings,
}

impl<'corpus> Solver<'corpus> {
  /// Builds a [`Solver`] over `corpus`, indexing every word's letter positions once.
  #[must_use]
  pub fn build(corpus: &'corpus Corpus) -> Self {
    let mut postings: Postings = std::array::from_fn(|_| Vec::new());

    for (word_id, (word, _frequency)) in corpus.iter_words().enumerate() {
      let word_id = word_id as u32;
      let mut per_letter: [Vec<u8>; 26] = std::array::from_fn(|_| Vec::new());

      for (position, byte) in word.bytes().enumerate() {
        let letter = compress_letter(byte.to_ascii_uppercase());
        per_letter[letter as usize].push(position as u8);
      }

      for (letter, positions) in per_letter.into_iter().enumerate() {
        if !positions.is_empty() {
          postings[letter].push((word_id, positions));
        }
      }
    }

    tracing::debug!(words = corpus.len(), "built subsequence solver index");

    Self { corpus, postings }
  }

  /// Returns every corpus word matching `plate` as an ordered subsequence, subject to
  /// `opts`.
  ///
  /// # Errors
  ///
  /// Returns [`SolverError::BadPlate`] if `plate` is not 3–8 uppercase ASCII letters.
  /// A plate with zero matches is not an error: it returns an empty result.
  pub fn solve(&self, plate: &str, opts: &SolveOptions) -> Result<SolveResult, SolverError> {
    let start = Instant::now();
    let compressed = validate_plate(plate)?;

    let distinct_letters: Vec<u8> = LetterSet::from_ascii_slice(plate.as_bytes())
      .ascii_bytes()
      .map(compress_letter)
      .collect();

    let mut word_ids = Vec::new();
    for word_id in self.candidate_word_ids(&distinct_letters) {
      let word_len = self.corpus.word_at(word_id).map_or(0, str::len);

      if opts.min_length.is_some_and(|min| word_len < min) {
        continue;
      }
      if opts.max_length.is_some_and(|max| word_len > max) {
        continue;
      }
      if self.matches(word_id, &compressed) {
        word_ids.push(word_id);
      }
      if opts.max_results.is_some_and(|max| word_ids.len() >= max) {
        break;
      }
    }

    let count = word_ids.len();
    Ok(SolveResult {
      word_ids,
      count,
      elapsed: start.elapsed(),
    })
  }

  /// Intersects the posting lists for `distinct_letters`, smallest list first, returning
  /// the surviving word ids in ascending order. This is the coarse "plate letters are a
  /// multiset subset of the word" filter.
  fn candidate_word_ids(&self, distinct_letters: &[u8]) -> Vec<u32> {
    if distinct_letters.is_empty() {
      return Vec::new();
    }

    let mut letters = distinct_letters.to_vec();
    letters.sort_by_key(|&letter| self.postings[letter as usize].len());

    let mut candidates: Vec<u32> = self.postings[letters[0] as usize]
      .iter()
      .map(|(word_id, _)| *word_id)
      .collect();

    for &letter in &letters[1..] {
      if candidates.is_empty() {
        break;
      }
      candidates = intersect_sorted_ids(&candidates, &self.postings[letter as usize]);
    }

    candidates
  }

  /// Confirms `word_id` embeds `plate_letters` as an ordered subsequence, advancing a
  /// cursor through each letter's position list via binary search.
  fn matches(&self, word_id: u32, plate_letters: &[u8]) -> bool {
    let mut cursor: i32 = -1;

    for &letter in plate_letters {
      let Some(positions) = positions_for(&self.postings[letter as usize], word_id) else {
        return false;
      };

      let next = positions.partition_point(|&position| i32::from(position) <= cursor);
      if next == positions.len() {
        return false;
      }
      cursor = i32::from(positions[next]);
    }

    true
  }
}

fn positions_for(postings: &[(u32, Vec<u8>)], word_id: u32) -> Option<&[u8]> {
  postings
    .binary_search_by_key(&word_id, |(id, _)| *id)
    .ok()
    .map(|index| postings[index].1.as_slice())
}

fn intersect_sorted_ids(ids: &[u32], postings: &[(u32, Vec<u8>)]) -> Vec<u32> {
  let mut result = Vec::with_capacity(ids.len().min(postings.len()));
  let (mut i, mut j) = (0, 0);

  while i < ids.len() && j < postings.len() {
    match ids[i].cmp(&postings[j].0) {
      std::cmp::Ordering::Less => i += 1,
      std::cmp::Ordering::Greater => j += 1,
      std::cmp::Ordering::Equal => {
        result.push(ids[i]);
        i += 1;
        j += 1;
      }
    }
  }

  result
}

fn validate_plate(plate: &str) -> Result<Vec<u8>, SolverError> {
  if !(MIN_PLATE_LEN..=MAX_PLATE_LEN).contains(&plate.len()) {
    return Err(SolverError::BadPlate {
      plate: plate.to_string(),
      reason: format!("length must be {MIN_PLATE_LEN}..={MAX_PLATE_LEN}, got {}", plate.len()),
    });
  }
  if !plate.bytes().all(|b| b.is_ascii_uppercase()) {
    return Err(SolverError::BadPlate {
      plate: plate.to_string(),
      reason: "must be uppercase ASCII letters only".to_string(),
    });
  }

  Ok(plate.bytes().map(compress_letter).collect())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn corpus_with(entries: &str) -> Corpus {
    Corpus::from_json_str(entries).unwrap()
  }

  #[test]
  fn bad_plate_length() {
    let corpus = corpus_with(r#"{"cab": 1}"#);
    let solver = Solver::build(&corpus);
    assert!(matches!(
      solver.solve("AB", &SolveOptions::default()),
      Err(SolverError::BadPlate { .. })
    ));
  }

  #[test]
  fn bad_plate_non_letters() {
    let corpus = corpus_with(r#"{"cab": 1}"#);
    let solver = Solver::build(&corpus);
    assert!(matches!(
      solver.solve("A1C", &SolveOptions::default()),
      Err(SolverError::BadPlate { .. })
    ));
  }

  #[test]
  fn no_matches_is_not_an_error() {
    let corpus = corpus_with(r#"{"cab": 1}"#);
    let solver = Solver::build(&corpus);
    let result = solver.solve("XYZ", &SolveOptions::default()).unwrap();
    assert_eq!(result.count, 0);
    assert!(result.word_ids.is_empty());
  }

  #[test]
  fn max_results_truncates_deterministically() {
    let corpus = corpus_with(r#"{"cab":1,"cabin":1,"cable":1}"#);
    let solver = Solver::build(&corpus);
    let opts = SolveOptions {
      max_results: Some(1),
      ..Default::default()
    };
    let result = solver.solve("CAB", &opts).unwrap();
    assert_eq!(result.count, 1);
  }
}
