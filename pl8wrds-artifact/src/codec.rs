//! Encodes and decodes the two artifact files, with full structural validation on decode.

use std::collections::BTreeSet;
use std::io::{Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};

use crate::error::ArtifactError;
use crate::model::{CompleteArtifact, Dictionary};

/// Writes `artifact` to `path` as gzip-compressed JSON, atomically (write to a sibling
/// `.tmp` file, then rename over `path`).
///
/// # Errors
///
/// Returns [`ArtifactError::Io`] on any filesystem failure and
/// [`ArtifactError::Json`] if `artifact` cannot be serialized.
pub fn encode_complete_artifact(
  artifact: &CompleteArtifact,
  path: impl AsRef<Path>,
) -> Result<(), ArtifactError> {
  let json = serde_json::to_vec(artifact)?;

  let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
  encoder.write_all(&json)?;
  let gzipped = encoder.finish()?;

  write_atomically(path.as_ref(), &gzipped)
}

/// Reads and fully validates a [`CompleteArtifact`] from `path`.
///
/// # Errors
///
/// Returns [`ArtifactError::Io`]/[`ArtifactError::Json`] on read or parse failure, and
/// [`ArtifactError::ArtifactInvalid`] if the decoded artifact fails structural
/// validation. A partially valid artifact is never returned.
pub fn decode_complete_artifact(path: impl AsRef<Path>) -> Result<CompleteArtifact, ArtifactError> {
  let compressed = std::fs::read(path.as_ref())?;
  let mut decoder = GzDecoder::new(compressed.as_slice());
  let mut json = Vec::new();
  decoder.read_to_end(&mut json)?;

  let artifact: CompleteArtifact = serde_json::from_slice(&json)?;
  validate_complete_artifact(&artifact)?;

  Ok(artifact)
}

/// Validates a [`CompleteArtifact`] on its own: `metadata.total_plates` matches
/// `plates.len()`, every solution score is in range, and plates are lexicographically
/// ordered. Cross-referencing against a [`Dictionary`] is a separate step — see
/// [`validate_against_dictionary`] — since the two files are decoded independently.
///
/// # Errors
///
/// Returns [`ArtifactError::ArtifactInvalid`] on any violation.
pub fn validate_complete_artifact(artifact: &CompleteArtifact) -> Result<(), ArtifactError> {
  if artifact.metadata.total_plates as usize != artifact.plates.len() {
    return Err(ArtifactError::ArtifactInvalid {
      reason: format!(
        "metadata.total_plates={} but plates.len()={}",
        artifact.metadata.total_plates,
        artifact.plates.len()
      ),
    });
  }

  for window in artifact.plates.windows(2) {
    if window[0].letters_joined() > window[1].letters_joined() {
      return Err(ArtifactError::ArtifactInvalid {
        reason: format!(
          "plates are not lexicographically ordered: {:?} before {:?}",
          window[0].letters_joined(),
          window[1].letters_joined(),
        ),
      });
    }
  }

  for plate in &artifact.plates {
    for (word_id, score) in &plate.solutions {
      if word_id.parse::<u32>().is_err() {
        return Err(ArtifactError::ArtifactInvalid {
          reason: format!("word_id {word_id:?} is not a non-negative integer"),
        });
      }
      if *score > 100 {
        return Err(ArtifactError::ArtifactInvalid {
          reason: format!("solution score {score} for word_id {word_id} out of range 0..=100"),
        });
      }
    }
  }

  Ok(())
}

/// Cross-checks that every `word_id` referenced by any plate in `artifact` exists in
/// `dictionary`, and that every dictionary score is in range.
///
/// # Errors
///
/// Returns [`ArtifactError::ArtifactInvalid`] on a dangling reference or an out-of-range
/// score.
pub fn validate_against_dictionary(
  artifact: &CompleteArtifact,
  dictionary: &Dictionary,
) -> Result<(), ArtifactError> {
  let referenced: BTreeSet<&String> = artifact
    .plates
    .iter()
    .flat_map(|plate| plate.solutions.keys())
    .collect();

  for word_id in referenced {
    let Some(entry) = dictionary.get(word_id) else {
      return Err(ArtifactError::ArtifactInvalid {
        reason: format!("word_id {word_id:?} referenced by a plate is missing from the dictionary"),
      });
    };
    if entry.frequency_score > 100 || entry.orthographic_score > 100 {
      return Err(ArtifactError::ArtifactInvalid {
        reason: format!("dictionary entry {word_id:?} has an out-of-range score"),
      });
    }
  }

  Ok(())
}

/// Writes `dictionary` to `path` as plain (uncompressed) JSON, atomically.
///
/// # Errors
///
/// Returns [`ArtifactError::Io`] on any filesystem failure and [`ArtifactError::Json`]
/// if `dictionary` cannot be serialized.
pub fn write_dictionary(dictionary: &Dictionary, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
  let json = serde_json::to_vec_pretty(dictionary)?;
  write_atomically(path.as_ref(), &json)
}

/// Reads a [`Dictionary`] from `path`.
///
/// # Errors
///
/// Returns [`ArtifactError::Io`]/[`ArtifactError::Json`] on read or parse failure.
pub fn read_dictionary(path: impl AsRef<Path>) -> Result<Dictionary, ArtifactError> {
  let text = std::fs::read_to_string(path.as_ref())?;
  Ok(serde_json::from_str(&text)?)
}

/// Computes the SHA-256 hex digest of `bytes` — used for `metadata.corpus_hash`, over
/// the raw bytes of the corpus file the artifact was built from.
#[must_use]
pub fn corpus_hash(bytes: &[u8]) -> String {
  let mut hasher = Sha256::new();
  hasher.update(bytes);
  format!("{:x}", hasher.finalize())
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), ArtifactError> {
  let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
  tmp_name.push(".tmp");
  let tmp_path = path.with_file_name(tmp_name);

  std::fs::write(&tmp_path, contents)?;
  std::fs::rename(&tmp_path, path)?;
  tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact file");
  Ok(())
}
