//! Benchmark profiles and utilities for the Patrol simulation.
//!
//! Provides pre-built grids for benchmarking and examples:
//!
//! - [`sample_profile`]: the 10x10 sample (41 visited, 6 loop placements)
//! - [`reference_profile`]: 130x130 field, roughly puzzle-input sized
//! - [`stress_profile`]: 400x400 field for parallel search scaling
//! - [`scatter_obstacles`]: deterministic obstacle placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use patrol_core::{Cell, GridError, Position};
use patrol_grid::Grid;

/// The 10x10 sample grid.
pub fn sample_profile() -> Result<Grid, GridError> {
    Grid::from_lines(&[
        "....#.....",
        ".........#",
        "..........",
        "..#.......",
        ".......#..",
        "..........",
        ".#..^.....",
        "........#.",
        "#.........",
        "......#...",
    ])
}

/// Build a reference profile: 130x130 grid, ~1 obstacle per 60 cells.
pub fn reference_profile(seed: u64) -> Result<Grid, GridError> {
    open_field_profile(130, 130 * 130 / 60, seed)
}

/// Build a stress profile: 400x400 grid at the same density as
/// [`reference_profile`].
pub fn stress_profile(seed: u64) -> Result<Grid, GridError> {
    open_field_profile(400, 400 * 400 / 60, seed)
}

/// A `size * size` open field with `obstacles` scattered obstacles and
/// the guard start at the centre.
pub fn open_field_profile(size: usize, obstacles: usize, seed: u64) -> Result<Grid, GridError> {
    let mut grid = Grid::new(size, size, Cell::Open)?;
    let centre = Position::new((size / 2) as i32, (size / 2) as i32);
    let reserved = (size / 2) * size + size / 2;
    grid.set(centre, Cell::GuardStart)?;

    for index in scatter_obstacles(grid.cell_count(), obstacles, seed, reserved) {
        grid.set(grid.position_of(index), Cell::Obstacle)?;
    }
    Ok(grid)
}

/// Generate deterministic obstacle indices.
///
/// Spreads `n` distinct flat indices over `cell_count` cells using a
/// simple hash of the seed, never returning `reserved`. At most
/// `cell_count - 1` indices are produced.
pub fn scatter_obstacles(cell_count: usize, n: usize, seed: u64, reserved: usize) -> Vec<usize> {
    let n = n.min(cell_count.saturating_sub(1));
    let mut indices = Vec::with_capacity(n);
    let mut occupied = HashSet::with_capacity(n + 1);
    occupied.insert(reserved);

    let mut state = seed;
    for _ in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let mut index = ((state >> 33) % cell_count as u64) as usize;

        // Linear probe past taken cells.
        while occupied.contains(&index) {
            index = (index + 1) % cell_count;
        }
        occupied.insert(index);
        indices.push(index);
    }

    indices
}
