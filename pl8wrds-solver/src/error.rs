//! Errors produced by the subsequence solver.

/// Failure modes for [`crate::Solver::solve`].
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
  /// The plate string was not 3–8 uppercase ASCII letters.
  #[error("invalid plate {plate:?}: {reason}")]
  BadPlate {
    /// The plate string as given.
    plate: String,
    /// Why it was rejected.
    reason: String,
  },
}
