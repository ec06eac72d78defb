//! Obstruction search configuration, validation, and error types.
//!
//! [`SearchConfig`] is the builder-input for [`ObstructionSearch`](crate::ObstructionSearch).
//! [`validate()`](SearchConfig::validate) checks structural invariants
//! before any trial runs.

use std::error::Error;
use std::fmt;

// ── CandidatePolicy ────────────────────────────────────────────────

/// Which cells are tried as obstruction placements.
///
/// Both policies exclude the guard's start cell and every cell that is
/// not open in the original grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandidatePolicy {
    /// Only cells the unobstructed patrol visits. An obstacle anywhere
    /// else is never reached, so this yields the same count as
    /// `Exhaustive` with far fewer trials.
    #[default]
    Visited,
    /// Every open cell. The brute-force reference.
    Exhaustive,
}

impl fmt::Display for CandidatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visited => f.write_str("visited"),
            Self::Exhaustive => f.write_str("exhaustive"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SearchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `worker_count` was explicitly set to zero.
    ZeroWorkers,
    /// `batch_size` is zero.
    ZeroBatchSize,
    /// `max_ticks_per_trial` was explicitly set to zero.
    ZeroTickBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker_count must be at least 1"),
            Self::ZeroBatchSize => write!(f, "batch_size must be at least 1"),
            Self::ZeroTickBudget => write!(f, "max_ticks_per_trial must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SearchConfig ───────────────────────────────────────────────────

/// Configuration for [`ObstructionSearch`](crate::ObstructionSearch).
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Number of trial worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`). `Some(1)` runs
    /// every trial on the calling thread.
    pub worker_count: Option<usize>,
    /// Candidates handed to a worker per task. Default: 32.
    pub batch_size: usize,
    /// Which cells to try. Default: [`CandidatePolicy::Visited`].
    pub candidates: CandidatePolicy,
    /// Per-trial transition limit. `None` (default) relies on the
    /// finite state space alone.
    pub max_ticks_per_trial: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            batch_size: 32,
            candidates: CandidatePolicy::Visited,
            max_ticks_per_trial: None,
        }
    }
}

impl SearchConfig {
    /// A configuration that runs every trial on the calling thread.
    pub fn sequential() -> Self {
        Self {
            worker_count: Some(1),
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.max_ticks_per_trial == Some(0) {
            return Err(ConfigError::ZeroTickBudget);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                cpus.clamp(1, 16)
            }
        }
    }
}
