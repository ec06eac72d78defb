//! Obstruction search: which single added obstacle traps the guard.
//!
//! For every candidate cell a trial copies the pristine grid, puts an
//! obstacle there, and runs the [`LoopDetector`](crate::LoopDetector)
//! from the guard's start. Trials share nothing mutable, so they run
//! either inline or across a pool of worker threads fed over a bounded
//! channel:
//!
//! ```text
//! Caller                                  Trial Workers (N)
//!   |                                          |
//!   |--TrialBatch--> [task_tx: bounded(N*4)] --> task_rx.recv()
//!   |                                          | clone base grid
//!   |                                          | place obstacle
//!   |                                          | run detector
//!   |<--TrialResult-- [reply_tx: unbounded] <--|
//!   | join workers                             |
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use patrol_core::{Cell, GridError, PatrolError, Position};
use patrol_grid::Grid;
use tracing::{debug, trace, warn};

use crate::config::{CandidatePolicy, ConfigError, SearchConfig};
use crate::metrics::SearchMetrics;
use crate::traversal::traverse;
use crate::worker::{self, TrialBatch, TrialResult, TrialSpec};

// ── Error types ──────────────────────────────────────────────────

/// Errors from [`ObstructionSearch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The search configuration is invalid.
    Config(ConfigError),
    /// The grid could not be patrolled, or a trial failed.
    Patrol(PatrolError),
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
    /// A worker thread panicked.
    WorkerPanicked {
        /// Index of the worker.
        worker: usize,
    },
    /// Fewer trial results came back than candidates were sent.
    IncompleteResults {
        /// Candidates dispatched.
        expected: usize,
        /// Results received.
        received: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Patrol(e) => write!(f, "patrol: {e}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::WorkerPanicked { worker } => write!(f, "trial worker {worker} panicked"),
            Self::IncompleteResults { expected, received } => {
                write!(f, "received {received} of {expected} trial results")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Patrol(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PatrolError> for SearchError {
    fn from(e: PatrolError) -> Self {
        Self::Patrol(e)
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Patrol(PatrolError::Grid(e))
    }
}

// ── SearchReport ─────────────────────────────────────────────────

/// Outcome of a completed search.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Loop-inducing placements, in row-major order.
    pub placements: Vec<Position>,
    /// Counters and timing for the search.
    pub metrics: SearchMetrics,
}

impl SearchReport {
    /// Number of loop-inducing placements.
    pub fn count(&self) -> usize {
        self.placements.len()
    }
}

// ── ObstructionSearch ────────────────────────────────────────────

/// Counts single-cell obstructions that force the patrol into a loop.
///
/// # Examples
///
/// ```
/// use patrol_engine::{ObstructionSearch, SearchConfig};
/// use patrol_grid::Grid;
///
/// let grid = Grid::from_lines(&[
///     "....#.....",
///     ".........#",
///     "..........",
///     "..#.......",
///     ".......#..",
///     "..........",
///     ".#..^.....",
///     "........#.",
///     "#.........",
///     "......#...",
/// ])
/// .unwrap();
/// let search = ObstructionSearch::new(SearchConfig::sequential()).unwrap();
/// assert_eq!(search.run(&grid).unwrap().count(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ObstructionSearch {
    config: SearchConfig,
}

impl ObstructionSearch {
    /// Create a search, validating `config`.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Cells that will be tried, in trial order.
    ///
    /// Never includes the start cell or any cell that is not open.
    pub fn candidates(&self, grid: &Grid) -> Result<Vec<Position>, SearchError> {
        let start = grid.find_guard_start()?;
        self.candidates_from(grid, start)
    }

    fn candidates_from(&self, grid: &Grid, start: Position) -> Result<Vec<Position>, SearchError> {
        let viable = |p: Position| p != start && grid.at(p) == Some(Cell::Open);
        let candidates = match self.config.candidates {
            CandidatePolicy::Visited => {
                let mut scratch = grid.clone();
                let traversal = traverse(&mut scratch)?;
                traversal.path.into_iter().filter(|&p| viable(p)).collect()
            }
            CandidatePolicy::Exhaustive => grid.positions().filter(|&p| viable(p)).collect(),
        };
        Ok(candidates)
    }

    /// Try every candidate and report the loop-inducing placements.
    ///
    /// `grid` is never modified. The result does not depend on the
    /// worker count or batch size.
    pub fn run(&self, grid: &Grid) -> Result<SearchReport, SearchError> {
        let started = Instant::now();
        let start = grid.find_guard_start()?;
        let candidates = self.candidates_from(grid, start)?;
        let spec = TrialSpec {
            start,
            max_ticks: self.config.max_ticks_per_trial,
        };

        let batches = candidates.len().div_ceil(self.config.batch_size);
        let workers = self.config.resolved_worker_count().min(batches).max(1);
        debug!(
            candidates = candidates.len(),
            workers,
            policy = %self.config.candidates,
            "obstruction search started"
        );

        let results = if workers == 1 {
            Self::run_inline(grid, spec, &candidates)
        } else {
            self.run_parallel(grid, spec, &candidates, workers)?
        };

        let mut metrics = SearchMetrics {
            worker_count: workers,
            ..SearchMetrics::default()
        };
        let mut placements = Vec::new();
        for result in results {
            let outcome = match result.outcome {
                Ok(outcome) => outcome,
                Err(e) => {
                    if let PatrolError::TickBudgetExceeded { limit } = e {
                        warn!(position = %result.position, limit, "trial exhausted tick budget");
                    }
                    return Err(e.into());
                }
            };
            metrics.record_trial(outcome.ticks(), outcome.is_loop());
            if outcome.is_loop() {
                trace!(position = %result.position, ticks = outcome.ticks(), "loop-inducing placement");
                placements.push(result.position);
            }
        }
        placements.sort();
        metrics.total_us = started.elapsed().as_micros() as u64;

        debug!(
            placements = placements.len(),
            total_ticks = metrics.total_ticks,
            total_us = metrics.total_us,
            "obstruction search finished"
        );
        Ok(SearchReport {
            placements,
            metrics,
        })
    }

    fn run_inline(grid: &Grid, spec: TrialSpec, candidates: &[Position]) -> Vec<TrialResult> {
        candidates
            .iter()
            .enumerate()
            .map(|(ordinal, &position)| TrialResult {
                ordinal,
                position,
                outcome: worker::run_trial(grid, spec, position),
            })
            .collect()
    }

    fn run_parallel(
        &self,
        grid: &Grid,
        spec: TrialSpec,
        candidates: &[Position],
        workers: usize,
    ) -> Result<Vec<TrialResult>, SearchError> {
        let base = Arc::new(grid.clone());

        // Task channel: bounded(workers * 4); caller blocks when workers lag.
        let (task_tx, task_rx) = crossbeam_channel::bounded::<TrialBatch>(workers * 4);
        // Reply channel: unbounded, so workers never block on the caller.
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<TrialResult>();

        let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(workers);
        for i in 0..workers {
            let task_rx = task_rx.clone();
            let reply_tx = reply_tx.clone();
            let base = Arc::clone(&base);
            let spawned = thread::Builder::new()
                .name(format!("patrol-trial-{i}"))
                .spawn(move || worker::worker_loop(task_rx, reply_tx, base, spec));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    drop(task_tx);
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(SearchError::ThreadSpawnFailed {
                        reason: format!("patrol-trial-{i}: {e}"),
                    });
                }
            }
        }
        drop(task_rx);
        drop(reply_tx);

        let batch_size = self.config.batch_size;
        for (n, chunk) in candidates.chunks(batch_size).enumerate() {
            let batch = TrialBatch {
                first_ordinal: n * batch_size,
                candidates: chunk.iter().copied().collect(),
            };
            // Every worker gone: the joins below report why.
            if task_tx.send(batch).is_err() {
                break;
            }
        }
        drop(task_tx);

        let mut slots: Vec<Option<TrialResult>> =
            std::iter::repeat_with(|| None).take(candidates.len()).collect();
        for result in reply_rx.iter() {
            let ordinal = result.ordinal;
            slots[ordinal] = Some(result);
        }

        for (worker, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                return Err(SearchError::WorkerPanicked { worker });
            }
        }

        let results: Vec<TrialResult> = slots.into_iter().flatten().collect();
        if results.len() != candidates.len() {
            return Err(SearchError::IncompleteResults {
                expected: candidates.len(),
                received: results.len(),
            });
        }
        Ok(results)
    }
}

/// Number of single-cell obstructions that trap the guard in a loop,
/// using the default configuration.
pub fn count_loop_obstructions(grid: &Grid) -> Result<usize, SearchError> {
    let search = ObstructionSearch::new(SearchConfig::default())?;
    Ok(search.run(grid)?.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_test_utils::{grid, sample_grid, SAMPLE_LOOP_PLACEMENTS};

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    fn sequential() -> ObstructionSearch {
        ObstructionSearch::new(SearchConfig::sequential()).unwrap()
    }

    #[test]
    fn sample_has_six_placements() {
        let report = sequential().run(&sample_grid()).unwrap();
        assert_eq!(report.count(), 6);
        let expected: Vec<Position> = SAMPLE_LOOP_PLACEMENTS
            .iter()
            .map(|&(r, c)| p(r, c))
            .collect();
        assert_eq!(report.placements, expected);
    }

    #[test]
    fn default_entry_point_matches() {
        assert_eq!(count_loop_obstructions(&sample_grid()).unwrap(), 6);
    }

    #[test]
    fn parallel_matches_sequential() {
        let config = SearchConfig {
            worker_count: Some(4),
            batch_size: 3,
            ..SearchConfig::default()
        };
        let parallel = ObstructionSearch::new(config).unwrap().run(&sample_grid()).unwrap();
        let inline = sequential().run(&sample_grid()).unwrap();
        assert_eq!(parallel.placements, inline.placements);
        assert_eq!(parallel.metrics.candidates, inline.metrics.candidates);
        assert_eq!(parallel.metrics.total_ticks, inline.metrics.total_ticks);
        assert_eq!(parallel.metrics.worker_count, 4);
        assert_eq!(inline.metrics.worker_count, 1);
    }

    #[test]
    fn candidates_exclude_start_and_non_open() {
        let g = sample_grid();
        let start = g.find_guard_start().unwrap();
        for policy in [CandidatePolicy::Visited, CandidatePolicy::Exhaustive] {
            let search = ObstructionSearch::new(SearchConfig {
                candidates: policy,
                ..SearchConfig::sequential()
            })
            .unwrap();
            let candidates = search.candidates(&g).unwrap();
            assert!(!candidates.contains(&start));
            assert!(candidates.iter().all(|&c| g.at(c) == Some(Cell::Open)));
        }
    }

    #[test]
    fn visited_candidates_are_patrol_cells_minus_start() {
        let candidates = sequential().candidates(&sample_grid()).unwrap();
        assert_eq!(candidates.len(), 40);
    }

    #[test]
    fn exhaustive_policy_agrees_with_visited() {
        let exhaustive = ObstructionSearch::new(SearchConfig {
            candidates: CandidatePolicy::Exhaustive,
            ..SearchConfig::sequential()
        })
        .unwrap()
        .run(&sample_grid())
        .unwrap();
        let visited = sequential().run(&sample_grid()).unwrap();
        assert_eq!(exhaustive.placements, visited.placements);
        assert!(exhaustive.metrics.candidates > visited.metrics.candidates);
    }

    #[test]
    fn input_grid_is_not_modified() {
        let g = sample_grid();
        sequential().run(&g).unwrap();
        assert_eq!(g, sample_grid());
    }

    #[test]
    fn metrics_count_trials_and_loops() {
        let report = sequential().run(&sample_grid()).unwrap();
        assert_eq!(report.metrics.candidates, 40);
        assert_eq!(report.metrics.loops_found, 6);
        assert!(report.metrics.max_trial_ticks > 0);
        assert!(report.metrics.total_ticks >= report.metrics.max_trial_ticks);
    }

    #[test]
    fn guard_on_edge_has_no_candidates() {
        let report = sequential().run(&grid(&["^.", ".."])).unwrap();
        assert_eq!(report.count(), 0);
        assert_eq!(report.metrics.candidates, 0);
    }

    #[test]
    fn missing_guard_is_an_error() {
        assert_eq!(
            sequential().run(&grid(&["..", ".."])).unwrap_err(),
            SearchError::Patrol(PatrolError::Grid(GridError::GuardNotFound))
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let err = ObstructionSearch::new(SearchConfig {
            batch_size: 0,
            ..SearchConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, SearchError::Config(ConfigError::ZeroBatchSize));
        assert!(err.source().is_some());
    }

    #[test]
    fn tight_tick_budget_surfaces_as_error() {
        let search = ObstructionSearch::new(SearchConfig {
            max_ticks_per_trial: Some(2),
            ..SearchConfig::sequential()
        })
        .unwrap();
        assert_eq!(
            search.run(&sample_grid()).unwrap_err(),
            SearchError::Patrol(PatrolError::TickBudgetExceeded { limit: 2 })
        );
    }
}
