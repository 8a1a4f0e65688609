use std::collections::BTreeMap;

use pl8wrds_artifact::{
  corpus_hash, decode_complete_artifact, encode_complete_artifact, read_dictionary, write_dictionary,
  ArtifactMetadata, CompleteArtifact, Dictionary, DictionaryWord, PlateRecord,
};

fn sample_artifact() -> CompleteArtifact {
  let mut cab_solutions = BTreeMap::new();
  cab_solutions.insert("0".to_string(), 40);
  cab_solutions.insert("1".to_string(), 40);

  CompleteArtifact {
    metadata: ArtifactMetadata {
      total_plates: 1,
      total_solutions: 2,
      generation_date: "2026-01-01T00:00:00Z".to_string(),
      max_solutions: 256,
      corpus_hash: corpus_hash(b"cab=5\ncabin=4\n"),
    },
    plates: vec![PlateRecord {
      letters: vec!['C', 'A', 'B'],
      solutions: cab_solutions,
    }],
  }
}

fn sample_dictionary() -> Dictionary {
  let mut dictionary = Dictionary::new();
  dictionary.insert(
    "0".to_string(),
    DictionaryWord {
      word: "cab".to_string(),
      frequency_score: 60,
      orthographic_score: 20,
    },
  );
  dictionary.insert(
    "1".to_string(),
    DictionaryWord {
      word: "cabin".to_string(),
      frequency_score: 65,
      orthographic_score: 25,
    },
  );
  dictionary
}

#[test]
fn s6_repeated_runs_produce_byte_identical_dictionary_json() {
  let dir = std::env::temp_dir().join("pl8wrds-artifact-s6-determinism");
  std::fs::create_dir_all(&dir).unwrap();

  let dictionary = sample_dictionary();
  let first_path = dir.join("dictionary_first.json");
  let second_path = dir.join("dictionary_second.json");

  write_dictionary(&dictionary, &first_path).unwrap();
  write_dictionary(&dictionary, &second_path).unwrap();

  let first_bytes = std::fs::read(&first_path).unwrap();
  let second_bytes = std::fs::read(&second_path).unwrap();
  assert_eq!(first_bytes, second_bytes, "dictionary.json must be byte-identical across runs");

  std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn s6_repeated_runs_produce_semantically_identical_artifacts() {
  let dir = std::env::temp_dir().join("pl8wrds-artifact-s6-artifact-determinism");
  std::fs::create_dir_all(&dir).unwrap();

  let artifact = sample_artifact();
  let first_path = dir.join("first.json.gz");
  let second_path = dir.join("second.json.gz");

  encode_complete_artifact(&artifact, &first_path).unwrap();
  encode_complete_artifact(&artifact, &second_path).unwrap();

  let first = decode_complete_artifact(&first_path).unwrap();
  let second = decode_complete_artifact(&second_path).unwrap();
  assert_eq!(first, second, "same plate order, same solutions, same scores");

  std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn artifact_cross_references_close_over_its_dictionary() {
  let artifact = sample_artifact();
  let dictionary = sample_dictionary();
  pl8wrds_artifact::validate_against_dictionary(&artifact, &dictionary).unwrap();
}

#[test]
fn dictionary_round_trips_through_disk() {
  let dir = std::env::temp_dir().join("pl8wrds-artifact-dictionary-round-trip");
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("dictionary.json");

  let dictionary = sample_dictionary();
  write_dictionary(&dictionary, &path).unwrap();
  let loaded = read_dictionary(&path).unwrap();

  assert_eq!(dictionary, loaded);
  std::fs::remove_dir_all(&dir).ok();
}
