//! The `pl8wrds` command-line surface: `build-models`, `precompute`, `solve`, `score`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default plate length the information model's universe is built over.
pub const DEFAULT_PLATE_LENGTH: usize = 3;
/// Default number of plates checkpointed per chunk during `precompute`.
pub const DEFAULT_CHECKPOINT_EVERY: usize = 500;

/// Builds models, precomputes the game artifact, or queries the solver/scorers
/// directly against a corpus.
#[derive(Debug, Parser)]
#[command(name = "pl8wrds", version, about)]
pub struct Cli {
  /// Which operation to run.
  #[command(subcommand)]
  pub command: Command,
}

/// One of the four operations the CLI exposes.
#[derive(Debug, Subcommand)]
pub enum Command {
  /// Builds the orthographic and information models from a corpus and writes them to
  /// `--out`.
  BuildModels {
    /// Path to the corpus JSON file. Falls back to `PL8WRDS_CORPUS` if omitted.
    #[arg(long, env = "PL8WRDS_CORPUS")]
    corpus: PathBuf,
    /// Directory to write `orthographic_model.json`/`information_model.json` into.
    #[arg(long)]
    out: PathBuf,
    /// Plate length the information model's universe covers.
    #[arg(long, default_value_t = DEFAULT_PLATE_LENGTH)]
    plate_length: usize,
  },

  /// Solves every plate in the information model's universe and writes
  /// `pl8wrds_complete.json.gz`/`dictionary.json` to `--out`.
  Precompute {
    /// Path to the corpus JSON file the models were built from.
    #[arg(long, env = "PL8WRDS_CORPUS")]
    corpus: PathBuf,
    /// Directory `build-models` wrote its model files into.
    #[arg(long)]
    models: PathBuf,
    /// Directory to write the artifact files into.
    #[arg(long)]
    out: PathBuf,
    /// Plates per checkpoint chunk.
    #[arg(long, default_value_t = DEFAULT_CHECKPOINT_EVERY)]
    checkpoint_every: usize,
  },

  /// Prints every corpus word solving `plate`, one per line.
  Solve {
    /// The plate to solve, 3–8 uppercase ASCII letters.
    plate: String,
    /// Path to the corpus JSON file.
    #[arg(long, env = "PL8WRDS_CORPUS")]
    corpus: PathBuf,
  },

  /// Prints the three component scores and ensemble for a (word, plate) pair as JSON.
  Score {
    /// The word to score.
    word: String,
    /// The plate to score it against.
    plate: String,
    /// Path to the corpus JSON file.
    #[arg(long, env = "PL8WRDS_CORPUS")]
    corpus: PathBuf,
    /// Directory `build-models` wrote its model files into.
    #[arg(long)]
    models: PathBuf,
  },
}
