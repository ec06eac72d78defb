//! Patrol: a guard walking a bounded grid, turning right at obstacles.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Patrol sub-crates. For most users, adding `patrol` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use patrol::prelude::*;
//!
//! let grid = Grid::from_lines(&[
//!     "....#.....",
//!     ".........#",
//!     "..........",
//!     "..#.......",
//!     ".......#..",
//!     "..........",
//!     ".#..^.....",
//!     "........#.",
//!     "#.........",
//!     "......#...",
//! ])
//! .unwrap();
//!
//! // Part 1: distinct cells on the unobstructed patrol.
//! assert_eq!(visited_cell_count(&grid).unwrap(), 41);
//!
//! // Part 2: single obstructions that trap the guard in a loop.
//! let search = ObstructionSearch::new(SearchConfig::default()).unwrap();
//! let report = search.run(&grid).unwrap();
//! assert_eq!(report.count(), 6);
//! assert_eq!(report.placements[0], Position::new(6, 3));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `patrol-core` | Positions, directions, cells, error types |
//! | [`grid`] | `patrol-grid` | The bounded grid and the visited-state set |
//! | [`engine`] | `patrol-engine` | Stepping, loop detection, obstruction search |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`patrol-core`).
///
/// [`types::Position`], [`types::Direction`], [`types::Cell`], and the
/// [`types::GridError`] / [`types::PatrolError`] error enums.
pub use patrol_core as types;

/// The bounded grid (`patrol-grid`).
///
/// [`grid::Grid`] stores cells row-major with explicit bounds checks;
/// [`grid::VisitedStates`] is the per-run set of guard states.
pub use patrol_grid as grid;

/// Simulation engine (`patrol-engine`).
///
/// [`engine::step()`] for single ticks, [`engine::LoopDetector`] for whole
/// runs, and [`engine::ObstructionSearch`] for the obstruction count.
pub use patrol_engine as engine;

/// Common imports for typical Patrol usage.
///
/// ```rust
/// use patrol::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use patrol_core::{Cell, Direction, GuardState, Position};

    // Errors
    pub use patrol_core::{GridError, PatrolError};
    pub use patrol_engine::{ConfigError, SearchError};

    // Grid
    pub use patrol_grid::Grid;

    // Engine
    pub use patrol_engine::{
        count_loop_obstructions, detect_loop, find_loop, step, traverse, visited_cell_count,
        CandidatePolicy, LoopOutcome, ObstructionSearch, SearchConfig, SearchMetrics,
        SearchReport,
    };
}
