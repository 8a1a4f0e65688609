//! Reads the small env-var configuration surface the pipeline needs.

use std::num::NonZeroUsize;

/// Env var naming an explicit worker-thread count; overrides `available_parallelism`.
pub const THREADS_ENV_VAR: &str = "PL8WRDS_THREADS";

/// Builds a [`rayon::ThreadPool`] sized from [`THREADS_ENV_VAR`], falling back to
/// [`std::thread::available_parallelism`] when unset or unparsable.
///
/// # Panics
///
/// Panics if `rayon` cannot spawn its worker threads, which only happens under
/// resource exhaustion the caller cannot recover from either.
#[must_use]
pub fn build_thread_pool() -> rayon::ThreadPool {
  let threads = std::env::var(THREADS_ENV_VAR)
    .ok()
    .and_then(|value| value.parse::<usize>().ok())
    .and_then(NonZeroUsize::new)
    .or_else(|| std::thread::available_parallelism().ok())
    .map_or(1, NonZeroUsize::get);

  tracing::info!(threads, "sized precomputation thread pool");

  rayon::ThreadPoolBuilder::new()
    .num_threads(threads)
    .build()
    .expect("failed to build rayon thread pool")
}
