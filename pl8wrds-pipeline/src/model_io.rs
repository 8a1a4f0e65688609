//! Persists and reloads the two models [`pl8wrds_scoring`] builds, so `precompute` can
//! run against models a separate `build-models` invocation already produced.

use std::collections::BTreeMap;
use std::path::Path;

use pl8wrds_scoring::{InformationModel, ModelError, OrthographicModel, OrthographicModelStats, PlateSolutions};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// File name `build-models` writes the orthographic model to, inside its `--out` dir.
pub const ORTHOGRAPHIC_MODEL_FILE: &str = "orthographic_model.json";
/// File name `build-models` writes the information model to, inside its `--out` dir.
pub const INFORMATION_MODEL_FILE: &str = "information_model.json";

#[derive(Serialize, Deserialize)]
struct OrthographicModelStatsWire {
  total_ngrams: u64,
  p10: f64,
  p99: f64,
  smoothing_eps: f64,
}

#[derive(Serialize, Deserialize)]
struct OrthographicModelWire {
  trigrams: BTreeMap<String, f64>,
  quartets: BTreeMap<String, f64>,
  stats: OrthographicModelStatsWire,
}

/// Writes `model` to `dir`/`orthographic_model.json` as plain JSON.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] on a filesystem failure and [`PipelineError::Json`] if
/// the model cannot be serialized.
pub fn write_orthographic_model(model: &OrthographicModel, dir: &Path) -> Result<(), PipelineError> {
  let wire = OrthographicModelWire {
    trigrams: model.trigrams.iter().map(|(k, v)| (k.clone(), *v)).collect(),
    quartets: model.quartets.iter().map(|(k, v)| (k.clone(), *v)).collect(),
    stats: OrthographicModelStatsWire {
      total_ngrams: model.stats.total_ngrams,
      p10: model.stats.p10,
      p99: model.stats.p99,
      smoothing_eps: model.stats.smoothing_eps,
    },
  };
  let json = serde_json::to_vec_pretty(&wire)?;
  std::fs::write(dir.join(ORTHOGRAPHIC_MODEL_FILE), json)?;
  Ok(())
}

/// Reads an [`OrthographicModel`] back from `dir`/`orthographic_model.json`.
///
/// # Errors
///
/// Returns [`PipelineError::Model`] wrapping [`ModelError::Missing`] if the file does
/// not exist, and [`PipelineError::Json`] if it fails to parse.
pub fn read_orthographic_model(dir: &Path) -> Result<OrthographicModel, PipelineError> {
  let path = dir.join(ORTHOGRAPHIC_MODEL_FILE);
  if !path.exists() {
    return Err(PipelineError::Model(ModelError::Missing {
      path: path.display().to_string(),
    }));
  }
  let text = std::fs::read_to_string(&path)?;
  let wire: OrthographicModelWire = serde_json::from_str(&text)?;
  Ok(OrthographicModel {
    trigrams: wire.trigrams.into_iter().collect(),
    quartets: wire.quartets.into_iter().collect(),
    stats: OrthographicModelStats {
      total_ngrams: wire.stats.total_ngrams,
      p10: wire.stats.p10,
      p99: wire.stats.p99,
      smoothing_eps: wire.stats.smoothing_eps,
    },
  })
}

#[derive(Serialize, Deserialize)]
struct PlateSolutionsWire {
  solutions: Vec<String>,
  solution_count: u32,
}

#[derive(Serialize, Deserialize)]
struct InformationModelMeta {
  max_solutions: u32,
}

#[derive(Serialize)]
struct InformationModelWireOut<'a> {
  #[serde(flatten)]
  plates: BTreeMap<&'a str, PlateSolutionsWire>,
  #[serde(rename = "__meta__")]
  meta: InformationModelMeta,
}

#[derive(Deserialize)]
struct InformationModelWireIn {
  #[serde(flatten)]
  plates: BTreeMap<String, PlateSolutionsWire>,
  #[serde(rename = "__meta__")]
  meta: InformationModelMeta,
}

/// Writes `model` to `dir`/`information_model.json`: a flat `{plate: {solutions,
/// solution_count}}` map with a reserved `"__meta__"` key carrying `max_solutions`.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] on a filesystem failure and [`PipelineError::Json`] if
/// the model cannot be serialized.
pub fn write_information_model(model: &InformationModel, dir: &Path) -> Result<(), PipelineError> {
  let plates = model
    .plates
    .iter()
    .map(|(plate, solutions)| {
      (
        plate.as_str(),
        PlateSolutionsWire {
          solutions: solutions.solutions.clone(),
          solution_count: solutions.solution_count,
        },
      )
    })
    .collect();

  let wire = InformationModelWireOut {
    plates,
    meta: InformationModelMeta {
      max_solutions: model.max_solutions,
    },
  };
  let json = serde_json::to_vec_pretty(&wire)?;
  std::fs::write(dir.join(INFORMATION_MODEL_FILE), json)?;
  Ok(())
}

/// Reads an [`InformationModel`] back from `dir`/`information_model.json`.
///
/// # Errors
///
/// Returns [`PipelineError::Model`] wrapping [`ModelError::Missing`] if the file does
/// not exist, and [`PipelineError::Json`] if it fails to parse.
pub fn read_information_model(dir: &Path) -> Result<InformationModel, PipelineError> {
  let path = dir.join(INFORMATION_MODEL_FILE);
  if !path.exists() {
    return Err(PipelineError::Model(ModelError::Missing {
      path: path.display().to_string(),
    }));
  }
  let text = std::fs::read_to_string(&path)?;
  let wire: InformationModelWireIn = serde_json::from_str(&text)?;

  let plates = wire
    .plates
    .into_iter()
    .map(|(plate, solutions)| {
      (
        plate,
        PlateSolutions {
          solutions: solutions.solutions,
          solution_count: solutions.solution_count,
        },
      )
    })
    .collect();

  Ok(InformationModel {
    plates,
    max_solutions: wire.meta.max_solutions,
  })
}
