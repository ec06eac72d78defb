//! Dense set of guard states for one patrol run.

use crate::grid::Grid;
use patrol_core::{Direction, GuardState};

/// Set of `(position, direction)` states seen during a single run.
///
/// One byte per cell holds a bit per [`Direction`], so membership and
/// insertion are O(1) and the whole set is `rows * cols` bytes. The state
/// space is finite (`4 * rows * cols`), which is what bounds every run.
#[derive(Clone, Debug)]
pub struct VisitedStates {
    cols: u32,
    bits: Vec<u8>,
    len: usize,
}

impl VisitedStates {
    /// An empty set sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            bits: vec![0u8; grid.cell_count()],
            len: 0,
        }
    }

    fn slot(&self, state: GuardState) -> Option<usize> {
        let GuardState { position, .. } = state;
        if position.row < 0 || position.col < 0 || position.col as u32 >= self.cols {
            return None;
        }
        let i = (position.row as usize) * (self.cols as usize) + (position.col as usize);
        (i < self.bits.len()).then_some(i)
    }

    fn mask(direction: Direction) -> u8 {
        1 << direction.index()
    }

    /// Record `state`. Returns `true` if it was not already present.
    ///
    /// States outside the grid are never stored and always return `true`.
    pub fn insert(&mut self, state: GuardState) -> bool {
        let Some(i) = self.slot(state) else {
            return true;
        };
        let mask = Self::mask(state.direction);
        if self.bits[i] & mask != 0 {
            return false;
        }
        self.bits[i] |= mask;
        self.len += 1;
        true
    }

    /// Whether `state` has been recorded.
    pub fn contains(&self, state: GuardState) -> bool {
        self.slot(state)
            .is_some_and(|i| self.bits[i] & Self::mask(state.direction) != 0)
    }

    /// Number of distinct states recorded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no state has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget all states, keeping the allocation.
    pub fn clear(&mut self) {
        self.bits.fill(0);
        self.len = 0;
    }

    /// Upper bound on distinct states for this grid size.
    pub fn capacity(&self) -> usize {
        self.bits.len() * Direction::ALL.len()
    }
}
