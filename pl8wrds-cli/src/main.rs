mod cli;
mod commands;
mod exit;
mod wire;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();

  let result = match cli.command {
    Command::BuildModels { corpus, out, plate_length } => commands::build_models(&corpus, &out, plate_length),
    Command::Precompute {
      corpus,
      models,
      out,
      checkpoint_every,
    } => commands::precompute(&corpus, &models, &out, checkpoint_every),
    Command::Solve { plate, corpus } => commands::solve(&plate, &corpus),
    Command::Score {
      word,
      plate,
      corpus,
      models,
    } => commands::score(&word, &plate, &corpus, &models),
  };

  if let Err(error) = result {
    eprintln!("error: {error:?}");
    std::process::exit(exit::classify(&error));
  }
}
