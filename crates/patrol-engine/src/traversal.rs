//! The unobstructed patrol.

use crate::detector::{LoopDetector, LoopOutcome};
use indexmap::IndexSet;
use patrol_core::{GuardState, PatrolError, Position};
use patrol_grid::Grid;
use tracing::debug;

/// Result of walking the guard from its start until the run ends.
#[derive(Clone, Debug)]
pub struct Traversal {
    /// The guard's start cell.
    pub start: Position,
    /// How the run ended. Well-formed puzzles always exit; a grid whose
    /// own patrol loops still terminates and reports `Looped`.
    pub outcome: LoopOutcome,
    /// Distinct cells carrying a trail or the start mark afterwards.
    pub visited: usize,
    /// Cells the guard occupied, in first-visit order.
    pub path: IndexSet<Position>,
}

/// Walk the guard from its start cell, marking `grid` in place.
///
/// # Errors
///
/// [`GridError::GuardNotFound`](patrol_core::GridError::GuardNotFound)
/// if `grid` has no start cell.
pub fn traverse(grid: &mut Grid) -> Result<Traversal, PatrolError> {
    let start = grid.find_guard_start()?;

    let mut path = IndexSet::new();
    path.insert(start);

    let mut detector = LoopDetector::new(grid, GuardState::at_start(start));
    let outcome = loop {
        if let Some(outcome) = detector.tick() {
            break outcome;
        }
        path.insert(detector.state().position);
    };

    let visited = grid.visited_count();
    debug!(
        %start,
        ?outcome,
        visited,
        "unobstructed patrol finished"
    );
    Ok(Traversal {
        start,
        outcome,
        visited,
        path,
    })
}

/// Number of distinct cells the unobstructed patrol visits.
///
/// Runs on a private copy; `grid` is not marked.
///
/// # Examples
///
/// ```
/// use patrol_engine::visited_cell_count;
/// use patrol_grid::Grid;
///
/// let grid = Grid::from_lines(&["#..", "..#", "^.."]).unwrap();
/// assert_eq!(visited_cell_count(&grid).unwrap(), 4);
/// ```
pub fn visited_cell_count(grid: &Grid) -> Result<usize, PatrolError> {
    let mut scratch = grid.clone();
    traverse(&mut scratch).map(|t| t.visited)
}
