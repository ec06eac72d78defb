//! Per-search metrics for the obstruction search.
//!
//! [`SearchMetrics`] captures counts and timing for one
//! [`ObstructionSearch::run`](crate::ObstructionSearch::run).

/// Counters and timing collected during a single search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Candidate placements tried.
    pub candidates: usize,
    /// Placements that trapped the guard in a loop.
    pub loops_found: usize,
    /// Sum of transitions across every trial.
    pub total_ticks: u64,
    /// Longest single trial, in transitions.
    pub max_trial_ticks: u64,
    /// Worker threads used (1 when trials ran inline).
    pub worker_count: usize,
    /// Wall-clock time for the whole search, in microseconds.
    pub total_us: u64,
}

impl SearchMetrics {
    /// Fold one finished trial into the counters.
    pub(crate) fn record_trial(&mut self, ticks: u64, looped: bool) {
        self.candidates += 1;
        self.total_ticks += ticks;
        self.max_trial_ticks = self.max_trial_ticks.max(ticks);
        if looped {
            self.loops_found += 1;
        }
    }
}
