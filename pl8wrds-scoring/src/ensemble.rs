//! Ensemble Combiner: weighted mean over the three component scorers.

use crate::error::EnsembleError;

/// A single component's contribution to an [`EnsembleResult`] — a fixed `(name, status)`
/// pair, not an entry in a dynamic scoring dict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScore {
  /// The component's name, for display/debugging.
  pub name: &'static str,
  /// Whether this component produced a score.
  pub status: ComponentStatus,
}

/// Whether a component scorer produced a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentStatus {
  /// The component scored successfully.
  Succeeded(u8),
  /// The component could not be computed; it contributes `0` to the ensemble.
  Failed,
}

impl ComponentStatus {
  const fn score_or_zero(self) -> u8 {
    match self {
      Self::Succeeded(score) => score,
      Self::Failed => 0,
    }
  }
}

/// Per-component weights for [`combine`]. All fields must be non-negative, and at least
/// one must be greater than zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleWeights {
  /// Weight applied to the vocabulary score.
  pub vocabulary: f64,
  /// Weight applied to the information score.
  pub information: f64,
  /// Weight applied to the orthographic score.
  pub orthographic: f64,
}

impl Default for EnsembleWeights {
  fn default() -> Self {
    Self {
      vocabulary: 1.0,
      information: 1.0,
      orthographic: 1.0,
    }
  }
}

/// The combined score for a (plate, word) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleResult {
  /// `round((w_v*vocab + w_i*info + w_o*ortho) / (w_v + w_i + w_o))`, with failed
  /// components contributing a score of `0`.
  pub ensemble: u8,
  /// `successful_components / 3.0`.
  pub confidence: f64,
  /// Human-readable interpretation band for `ensemble`.
  pub band: &'static str,
  /// The vocabulary, information, and orthographic components, in that order.
  pub components: [ComponentScore; 3],
}

/// Combines the three component scores for `word` using `weights`.
///
/// `vocabulary`/`information`/`orthographic` are [None] when that scorer could not
/// produce a value (e.g. `WordNotInCorpus`); a failed component contributes a score of
/// `0` but its weight still counts toward the denominator.
///
/// # Errors
///
/// Returns [`EnsembleError::AllComponentsFailed`] if every component is [None].
///
/// # Panics
///
/// Panics in debug mode if any weight is negative or every weight is zero — `weights`
/// is expected to be validated before reaching this call, the same contract the source
/// spec places on callers.
pub fn combine(
  word: &str,
  vocabulary: Option<u8>,
  information: Option<u8>,
  orthographic: Option<u8>,
  weights: EnsembleWeights,
) -> Result<EnsembleResult, EnsembleError> {
  debug_assert!(
    weights.vocabulary >= 0.0 && weights.information >= 0.0 && weights.orthographic >= 0.0,
    "ensemble weights must be non-negative"
  );
  debug_assert!(
    weights.vocabulary + weights.information + weights.orthographic > 0.0,
    "at least one ensemble weight must be greater than zero"
  );

  let components = [
    ComponentScore {
      name: "vocabulary",
      status: vocabulary.map_or(ComponentStatus::Failed, ComponentStatus::Succeeded),
    },
    ComponentScore {
      name: "information",
      status: information.map_or(ComponentStatus::Failed, ComponentStatus::Succeeded),
    },
    ComponentScore {
      name: "orthographic",
      status: orthographic.map_or(ComponentStatus::Failed, ComponentStatus::Succeeded),
    },
  ];

  let successful = components
    .iter()
    .filter(|c| matches!(c.status, ComponentStatus::Succeeded(_)))
    .count();

  if successful == 0 {
    return Err(EnsembleError::AllComponentsFailed {
      word: word.to_string(),
    });
  }

  let weight_values = [weights.vocabulary, weights.information, weights.orthographic];
  let numerator: f64 = components
    .iter()
    .zip(weight_values)
    .map(|(component, weight)| weight * f64::from(component.status.score_or_zero()))
    .sum();
  let denominator: f64 = weight_values.iter().sum();

  let ensemble = (numerator / denominator).round().clamp(0.0, 100.0) as u8;
  let confidence = successful as f64 / 3.0;
  let band = interpretation_band(ensemble);

  Ok(EnsembleResult {
    ensemble,
    confidence,
    band,
    components,
  })
}

/// Maps an ensemble score to its fixed interpretation band.
#[must_use]
pub const fn interpretation_band(ensemble: u8) -> &'static str {
  match ensemble {
    0..=29 => "Poor",
    30..=49 => "Fair",
    50..=69 => "Good",
    70..=89 => "Excellent",
    _ => "Exceptional",
  }
}
