//! Trial worker pool for the obstruction search.
//!
//! Each worker receives [`TrialBatch`] tasks via a crossbeam channel,
//! runs one trial per candidate against its own copy of the shared base
//! grid, and sends a [`TrialResult`] per candidate back on the reply
//! channel. The base grid is only ever read.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use patrol_core::{GuardState, PatrolError, Position};
use patrol_grid::Grid;
use smallvec::SmallVec;

use crate::detector::{LoopDetector, LoopOutcome};

/// Candidates stored inline in one batch before spilling to the heap.
pub(crate) const BATCH_INLINE: usize = 32;

/// A run of consecutive candidates dispatched to one worker.
pub(crate) struct TrialBatch {
    /// Ordinal of `candidates[0]` in the search's candidate list.
    pub(crate) first_ordinal: usize,
    pub(crate) candidates: SmallVec<[Position; BATCH_INLINE]>,
}

/// Result of a single trial.
#[derive(Debug)]
pub(crate) struct TrialResult {
    pub(crate) ordinal: usize,
    pub(crate) position: Position,
    pub(crate) outcome: Result<LoopOutcome, PatrolError>,
}

/// Parameters shared by every trial of one search.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TrialSpec {
    pub(crate) start: Position,
    pub(crate) max_ticks: Option<u64>,
}

/// Place an obstacle at `candidate` on a copy of `base` and run the
/// guard from its start.
pub(crate) fn run_trial(
    base: &Grid,
    spec: TrialSpec,
    candidate: Position,
) -> Result<LoopOutcome, PatrolError> {
    let mut variant = base.with_obstacle(candidate)?;
    let detector = LoopDetector::new(&mut variant, GuardState::at_start(spec.start));
    match spec.max_ticks {
        Some(limit) => detector.run_bounded(limit),
        None => Ok(detector.run()),
    }
}

/// Main loop for a trial worker thread.
///
/// Runs until the task channel is closed (sender dropped) or the reply
/// channel has no receiver left.
pub(crate) fn worker_loop(
    task_rx: Receiver<TrialBatch>,
    reply_tx: Sender<TrialResult>,
    base: Arc<Grid>,
    spec: TrialSpec,
) {
    while let Ok(batch) = task_rx.recv() {
        for (offset, &position) in batch.candidates.iter().enumerate() {
            let result = TrialResult {
                ordinal: batch.first_ordinal + offset,
                position,
                outcome: run_trial(&base, spec, position),
            };
            if reply_tx.send(result).is_err() {
                return;
            }
        }
    }
    // Channel closed; worker exits cleanly.
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_test_utils::sample_grid;
    use smallvec::smallvec;
    use std::thread;

    fn sample_spec() -> TrialSpec {
        TrialSpec {
            start: Position::new(6, 4),
            max_ticks: None,
        }
    }

    #[test]
    fn trial_detects_known_loop_placement() {
        let base = sample_grid();
        let outcome = run_trial(&base, sample_spec(), Position::new(6, 3)).unwrap();
        assert!(outcome.is_loop());
    }

    #[test]
    fn trial_leaves_base_untouched() {
        let base = sample_grid();
        run_trial(&base, sample_spec(), Position::new(1, 1)).unwrap();
        assert_eq!(base, sample_grid());
    }

    #[test]
    fn trial_out_of_bounds_candidate_errors() {
        let base = sample_grid();
        assert!(run_trial(&base, sample_spec(), Position::new(10, 0)).is_err());
    }

    #[test]
    fn worker_answers_every_candidate_then_exits() {
        let (task_tx, task_rx) = crossbeam_channel::bounded(4);
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
        let base = Arc::new(sample_grid());

        let handle = thread::spawn(move || worker_loop(task_rx, reply_tx, base, sample_spec()));

        task_tx
            .send(TrialBatch {
                first_ordinal: 10,
                candidates: smallvec![Position::new(6, 3), Position::new(1, 4)],
            })
            .unwrap();
        drop(task_tx);

        let mut results: Vec<TrialResult> = reply_rx.iter().collect();
        handle.join().unwrap();

        results.sort_by_key(|r| r.ordinal);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].ordinal, 10);
        assert!(results[0].outcome.as_ref().unwrap().is_loop());
        assert_eq!(results[1].ordinal, 11);
        assert_eq!(results[1].position, Position::new(1, 4));
        assert!(!results[1].outcome.as_ref().unwrap().is_loop());
    }
}
