//! Test fixtures and a reference oracle for Patrol development.
//!
//! Provides the canonical 10x10 sample grid with its known answers, a
//! [`grid`] shorthand for literal test grids, proptest strategies for
//! random well-formed grids, and a naive patrol simulator that shares no
//! code with `patrol-engine`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use patrol_grid::Grid;
use proptest::prelude::*;

// ── Sample fixture ─────────────────────────────────────────────

/// The 10x10 sample grid. The guard starts at `(6, 4)`.
pub const SAMPLE_LINES: [&str; 10] = [
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
];

/// The sample after its unobstructed patrol.
pub const SAMPLE_TRAIL: [&str; 10] = [
    "....#.....",
    "....+---+#",
    "....|...|.",
    "..#.|...|.",
    "..+-+-+#|.",
    "..|.|.|.|.",
    ".#+-+-+-+.",
    ".+----++#.",
    "#+----+|..",
    "......#|..",
];

/// Distinct cells the sample patrol visits.
pub const SAMPLE_VISITED: usize = 41;

/// Single obstructions that trap the sample guard, row-major.
pub const SAMPLE_LOOP_PLACEMENTS: [(i32, i32); 6] =
    [(6, 3), (7, 6), (7, 7), (8, 1), (8, 3), (9, 7)];

/// The sample grid, freshly parsed.
pub fn sample_grid() -> Grid {
    grid(&SAMPLE_LINES)
}

/// Parse literal rows, panicking on malformed input.
pub fn grid(lines: &[&str]) -> Grid {
    match Grid::from_lines(lines) {
        Ok(g) => g,
        Err(e) => panic!("bad test grid {lines:?}: {e}"),
    }
}

// ── Strategies ─────────────────────────────────────────────────

/// Random grids of up to `max_dim` x `max_dim` cells with exactly one
/// guard start and roughly one obstacle per `1 / density` cells.
pub fn arb_patrol_grid(max_dim: usize, density: f64) -> impl Strategy<Value = Grid> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(move |(rows, cols)| {
        let cells = rows * cols;
        (
            proptest::collection::vec(proptest::bool::weighted(density), cells),
            0..cells,
        )
            .prop_map(move |(blocked, start)| {
                let lines: Vec<String> = (0..rows)
                    .map(|r| {
                        (0..cols)
                            .map(|c| {
                                let i = r * cols + c;
                                if i == start {
                                    '^'
                                } else if blocked[i] {
                                    '#'
                                } else {
                                    '.'
                                }
                            })
                            .collect()
                    })
                    .collect();
                match Grid::from_lines(&lines) {
                    Ok(g) => g,
                    Err(e) => panic!("strategy built a bad grid: {e}"),
                }
            })
    })
}

// ── Reference oracle ───────────────────────────────────────────

const HEADINGS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

struct Board {
    rows: Vec<Vec<char>>,
}

impl Board {
    fn of(grid: &Grid) -> Self {
        Self {
            rows: grid.render().iter().map(|l| l.chars().collect()).collect(),
        }
    }

    fn get(&self, r: i32, c: i32) -> Option<char> {
        if r < 0 || c < 0 {
            return None;
        }
        self.rows.get(r as usize)?.get(c as usize).copied()
    }

    fn start(&self) -> Option<(i32, i32)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|&ch| ch == '^')
                .map(|c| (r as i32, c as i32))
        })
    }

    /// Cells the guard occupies, or `None` if it never leaves.
    fn walk(&self, start: (i32, i32)) -> Option<HashSet<(i32, i32)>> {
        let (mut r, mut c) = start;
        let mut heading = 0usize;
        let mut seen_states = HashSet::new();
        let mut cells = HashSet::new();
        loop {
            cells.insert((r, c));
            if !seen_states.insert((r, c, heading)) {
                return None;
            }
            let (dr, dc) = HEADINGS[heading];
            match self.get(r + dr, c + dc) {
                None => return Some(cells),
                Some('#') => heading = (heading + 1) % 4,
                Some(_) => {
                    r += dr;
                    c += dc;
                }
            }
        }
    }
}

/// Distinct cells the unobstructed patrol visits, or `None` if the
/// start is missing or the patrol never leaves.
pub fn reference_visited_count(grid: &Grid) -> Option<usize> {
    let board = Board::of(grid);
    board.walk(board.start()?).map(|cells| cells.len())
}

/// Brute-force count of open cells whose obstruction traps the guard.
pub fn reference_loop_count(grid: &Grid) -> Option<usize> {
    let mut board = Board::of(grid);
    let start = board.start()?;
    let mut loops = 0;
    for r in 0..board.rows.len() {
        for c in 0..board.rows[r].len() {
            if board.rows[r][c] != '.' {
                continue;
            }
            board.rows[r][c] = '#';
            if board.walk(start).is_none() {
                loops += 1;
            }
            board.rows[r][c] = '.';
        }
    }
    Some(loops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_agrees_with_sample_answers() {
        let g = sample_grid();
        assert_eq!(reference_visited_count(&g), Some(SAMPLE_VISITED));
        assert_eq!(reference_loop_count(&g), Some(SAMPLE_LOOP_PLACEMENTS.len()));
    }

    #[test]
    fn oracle_reports_self_loop() {
        let g = grid(&[".#..", "...#", "#^..", "..#."]);
        assert_eq!(reference_visited_count(&g), None);
    }

    #[test]
    fn oracle_without_start() {
        assert_eq!(reference_loop_count(&grid(&[".."])), None);
    }
}
