//! The three component scorers, their weighted-mean ensemble, and the model builders
//! that feed the orthographic and information scorers.

#![warn(missing_docs)]

pub mod ensemble;
pub mod error;
pub mod information;
pub mod info_model;
pub mod ngram_model;
pub mod orthographic;
pub mod tier;
pub mod vocabulary;

pub use ensemble::{combine, ComponentScore, ComponentStatus, EnsembleResult, EnsembleWeights};
pub use error::{EnsembleError, InformationError, ModelError, VocabularyError};
pub use information::InformationScorer;
pub use info_model::{build_information_model, plate_universe, InformationModel, PlateSolutions};
pub use ngram_model::{build_orthographic_model, OrthographicModel, OrthographicModelStats};
pub use orthographic::OrthographicScorer;
pub use tier::{difficulty_label, difficulty_tier};
pub use vocabulary::{VocabularyScore, VocabularyScorer};
