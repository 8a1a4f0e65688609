//! Encodes and decodes the PL8WRDS on-disk game artifact: a gzipped JSON file of solved
//! plate records plus a plain-JSON shared word dictionary.

#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod model;

pub use codec::{
  corpus_hash, decode_complete_artifact, encode_complete_artifact, read_dictionary,
  validate_against_dictionary, validate_complete_artifact, write_dictionary,
};
pub use error::ArtifactError;
pub use model::{
  reconstruct_ensemble, ArtifactMetadata, CompleteArtifact, Dictionary, DictionaryWord, PlateRecord,
};
