//! Bounded 2D grid model for Patrol simulations.
//!
//! [`Grid`] is a fixed-size, row-major cell store with explicit bounds
//! checks: stepping off an edge is observable via [`Grid::in_bounds`] and
//! [`Grid::at`] returning `None`, never by wrapping or panicking.
//! [`VisitedStates`] is the per-run set of guard states used for cycle
//! detection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod visited;

pub use grid::Grid;
pub use visited::VisitedStates;
