//! Offline precomputation: builds the orthographic and information models from a
//! corpus, then solves every plate in the information model's universe and assembles
//! the artifact the game client loads.

#![warn(missing_docs)]

pub mod build_models;
pub mod config;
pub mod error;
pub mod model_io;
pub mod precompute;
pub mod word_scores;

pub use build_models::run_build_models;
pub use config::build_thread_pool;
pub use error::PipelineError;
pub use model_io::{read_information_model, read_orthographic_model, write_information_model, write_orthographic_model};
pub use precompute::{run_precompute, PrecomputeConfig};
pub use word_scores::{word_scores, WordScores};
