//! Exact cycle detection over guard states.
//!
//! The guard's state space is finite (`4 * rows * cols`) and
//! [`step`](crate::step::step) is deterministic, so every run either leaves
//! the grid or revisits a state within that many ticks. [`LoopDetector`]
//! records each state before stepping and stops at the first repeat.

use crate::step::step;
use patrol_core::{Direction, GuardState, PatrolError, Position};
use patrol_grid::{Grid, VisitedStates};

/// How a patrol run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The guard stepped off the grid.
    Exited {
        /// Transitions (moves and turns) taken before leaving.
        ticks: u64,
    },
    /// The guard reached a state it had already been in.
    Looped {
        /// Transitions taken before the repeat was seen.
        ticks: u64,
        /// The first repeated state.
        repeated: GuardState,
    },
}

impl LoopOutcome {
    /// `true` for [`LoopOutcome::Looped`].
    pub fn is_loop(&self) -> bool {
        matches!(self, Self::Looped { .. })
    }

    /// Transitions taken during the run.
    pub fn ticks(&self) -> u64 {
        match *self {
            Self::Exited { ticks } | Self::Looped { ticks, .. } => ticks,
        }
    }
}

/// A single patrol run over a borrowed grid.
///
/// The grid is marked as the guard walks, exactly as [`step`] does; the
/// set of seen states lives in the detector and is dropped with it.
pub struct LoopDetector<'g> {
    grid: &'g mut Grid,
    state: GuardState,
    visited: VisitedStates,
    ticks: u64,
}

impl<'g> LoopDetector<'g> {
    /// Start a run at `start`.
    pub fn new(grid: &'g mut Grid, start: GuardState) -> Self {
        let visited = VisitedStates::for_grid(grid);
        Self {
            grid,
            state: start,
            visited,
            ticks: 0,
        }
    }

    /// Current guard state.
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Transitions taken so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick. Returns `Some` once the run has ended.
    ///
    /// A guard starting off the grid exits on its first tick.
    pub fn tick(&mut self) -> Option<LoopOutcome> {
        if !self.grid.in_bounds(self.state.position) {
            return Some(LoopOutcome::Exited { ticks: self.ticks });
        }
        if !self.visited.insert(self.state) {
            return Some(LoopOutcome::Looped {
                ticks: self.ticks,
                repeated: self.state,
            });
        }
        match step(self.grid, self.state.position, self.state.direction) {
            Some(next) => {
                self.state = next;
                self.ticks += 1;
                None
            }
            None => Some(LoopOutcome::Exited { ticks: self.ticks }),
        }
    }

    /// Run to completion.
    pub fn run(mut self) -> LoopOutcome {
        loop {
            if let Some(outcome) = self.tick() {
                return outcome;
            }
        }
    }

    /// Run to completion, failing once more than `max_ticks` transitions
    /// have been taken.
    pub fn run_bounded(mut self, max_ticks: u64) -> Result<LoopOutcome, PatrolError> {
        loop {
            if let Some(outcome) = self.tick() {
                return Ok(outcome);
            }
            if self.ticks > max_ticks {
                return Err(PatrolError::TickBudgetExceeded { limit: max_ticks });
            }
        }
    }
}

/// Run a patrol from `(start, direction)` and report how it ended.
pub fn detect_loop(grid: &mut Grid, start: Position, direction: Direction) -> LoopOutcome {
    LoopDetector::new(grid, GuardState::new(start, direction)).run()
}

/// [`detect_loop`] with a transition budget.
///
/// # Errors
///
/// [`PatrolError::TickBudgetExceeded`] once more than `max_ticks`
/// transitions have been taken without the run ending.
pub fn detect_loop_bounded(
    grid: &mut Grid,
    start: Position,
    direction: Direction,
    max_ticks: u64,
) -> Result<LoopOutcome, PatrolError> {
    LoopDetector::new(grid, GuardState::new(start, direction)).run_bounded(max_ticks)
}

/// Whether the patrol from `(start, direction)` never leaves the grid.
///
/// # Examples
///
/// ```
/// use patrol_core::{Direction, Position};
/// use patrol_engine::find_loop;
/// use patrol_grid::Grid;
///
/// let mut grid = Grid::from_lines(&[".#..", "...#", "#|..", "..#."]).unwrap();
/// assert!(find_loop(&mut grid, Position::new(2, 1), Direction::Up));
/// ```
pub fn find_loop(grid: &mut Grid, start: Position, direction: Direction) -> bool {
    detect_loop(grid, start, direction).is_loop()
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_test_utils::{grid, sample_grid};

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    #[test]
    fn four_obstacle_box_loops() {
        let mut g = grid(&[".#..", "...#", "#|..", "..#."]);
        assert!(find_loop(&mut g, p(2, 1), Direction::Up));
    }

    #[test]
    fn loop_entered_facing_right() {
        let mut g = grid(&["..#..", "-...#", ".#...", "...#."]);
        assert!(find_loop(&mut g, p(1, 0), Direction::Right));
    }

    #[test]
    fn shifted_start_escapes() {
        let mut g = grid(&[".#..", "...#", "#.|.", "..#."]);
        assert!(!find_loop(&mut g, p(2, 2), Direction::Up));
    }

    #[test]
    fn unobstructed_sample_does_not_loop() {
        let mut g = sample_grid();
        let start = g.find_guard_start().unwrap();
        assert!(!find_loop(&mut g, start, Direction::Up));
    }

    #[test]
    fn looped_reports_repeated_state() {
        // Rectangle walked clockwise from (1,1).
        let mut g = grid(&[".#...", "....#", "#....", "...#."]);
        let outcome = detect_loop(&mut g, p(1, 1), Direction::Up);
        match outcome {
            LoopOutcome::Looped { repeated, ticks } => {
                assert_eq!(repeated, GuardState::new(p(1, 1), Direction::Up));
                assert!(ticks > 0);
            }
            other => panic!("expected loop, got {other:?}"),
        }
    }

    #[test]
    fn exit_counts_transitions() {
        let mut g = grid(&["...", "...", "^.."]);
        let outcome = detect_loop(&mut g, p(2, 0), Direction::Up);
        assert_eq!(outcome, LoopOutcome::Exited { ticks: 2 });
    }

    #[test]
    fn start_outside_grid_exits_immediately() {
        let mut g = grid(&[".."]);
        let outcome = detect_loop(&mut g, p(5, 5), Direction::Up);
        assert_eq!(outcome, LoopOutcome::Exited { ticks: 0 });
    }

    #[test]
    fn run_bounded_reports_budget() {
        let mut g = grid(&[".#...", "....#", "#....", "...#."]);
        let detector = LoopDetector::new(&mut g, GuardState::new(p(1, 1), Direction::Up));
        assert_eq!(
            detector.run_bounded(3),
            Err(PatrolError::TickBudgetExceeded { limit: 3 })
        );
    }

    #[test]
    fn bounded_free_fn_passes_short_exit() {
        let mut g = grid(&["...", "...", "^.."]);
        assert_eq!(
            detect_loop_bounded(&mut g, p(2, 0), Direction::Up, 2),
            Ok(LoopOutcome::Exited { ticks: 2 })
        );
    }

    #[test]
    fn run_bounded_within_budget_matches_run() {
        let mut a = sample_grid();
        let mut b = sample_grid();
        let start = GuardState::at_start(a.find_guard_start().unwrap());
        let bounded = LoopDetector::new(&mut a, start).run_bounded(10_000).unwrap();
        let unbounded = LoopDetector::new(&mut b, start).run();
        assert_eq!(bounded, unbounded);
        assert_eq!(a, b);
    }

    #[test]
    fn ticks_never_exceed_state_space() {
        let mut g = grid(&[".#..", "...#", "#...", "..#."]);
        let bound = 4 * g.cell_count() as u64;
        let outcome = detect_loop(&mut g, p(2, 1), Direction::Up);
        assert!(outcome.ticks() <= bound);
    }
}
