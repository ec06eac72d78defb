//! The bounded, row-major grid.

use patrol_core::{Cell, GridError, Position};
use std::fmt;

/// A rectangular grid of [`Cell`]s with `[row, col]` addressing.
///
/// Valid positions satisfy `0 <= row < rows` and `0 <= col < cols`.
/// Reads outside that range return `None`; writes return
/// [`GridError::OutOfBounds`]. Nothing wraps.
///
/// Cells are stored row-major, so `index_of` and `position_of` are
/// O(1) arithmetic and [`positions`](Grid::positions) yields canonical
/// row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum dimension size: positions use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `rows * cols` grid filled with `fill`.
    ///
    /// # Examples
    ///
    /// ```
    /// use patrol_core::{Cell, Position};
    /// use patrol_grid::Grid;
    ///
    /// let grid = Grid::new(3, 4, Cell::Open).unwrap();
    /// assert_eq!(grid.cell_count(), 12);
    /// assert!(grid.in_bounds(Position::new(2, 3)));
    /// assert!(!grid.in_bounds(Position::new(3, 0)));
    /// ```
    pub fn new(rows: usize, cols: usize, fill: Cell) -> Result<Self, GridError> {
        let (rows, cols) = Self::check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![fill; (rows as usize) * (cols as usize)],
        })
    }

    /// Build a grid from rows of cell symbols.
    ///
    /// Every row must have the same, non-zero length, every symbol must be
    /// one of `.#^|-+`, and at most one `^` may appear. A grid with no `^`
    /// is accepted here; [`find_guard_start`](Grid::find_guard_start)
    /// reports its absence.
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let (row_count, col_count) = Self::check_dims(rows.len(), width)?;

        let mut cells = Vec::with_capacity((row_count as usize) * (col_count as usize));
        let mut guard: Option<Position> = None;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &symbol) in row.iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    row: r,
                    col: c,
                    symbol,
                })?;
                if cell == Cell::GuardStart {
                    let here = Position::new(r as i32, c as i32);
                    if let Some(first) = guard {
                        return Err(GridError::MultipleGuards {
                            first,
                            second: here,
                        });
                    }
                    guard = Some(here);
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    /// Build a grid from string rows, one symbol per character.
    ///
    /// # Examples
    ///
    /// ```
    /// use patrol_core::{Cell, Position};
    /// use patrol_grid::Grid;
    ///
    /// let grid = Grid::from_lines(&["#..", "..#", "^.."]).unwrap();
    /// assert_eq!(grid.at(Position::new(0, 0)), Some(Cell::Obstacle));
    /// assert_eq!(grid.find_guard_start().unwrap(), Position::new(2, 0));
    /// ```
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = lines.iter().map(|l| l.as_ref().chars().collect()).collect();
        Self::from_rows(&rows)
    }

    fn check_dims(rows: usize, cols: usize) -> Result<(u32, u32), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM as usize {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM as usize {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok((rows as u32, cols as u32))
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `position` addresses a cell of this grid.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as u32) < self.rows
            && (position.col as u32) < self.cols
    }

    /// Row-major flat index of `position`, or `None` if out of bounds.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        if !self.in_bounds(position) {
            return None;
        }
        Some((position.row as usize) * (self.cols as usize) + (position.col as usize))
    }

    /// Position of flat index `index`. `index` must be `< cell_count()`.
    pub fn position_of(&self, index: usize) -> Position {
        debug_assert!(index < self.cells.len());
        let cols = self.cols as usize;
        Position::new((index / cols) as i32, (index % cols) as i32)
    }

    /// The cell at `position`, or `None` if out of bounds.
    pub fn at(&self, position: Position) -> Option<Cell> {
        self.index_of(position).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `position`.
    pub fn set(&mut self, position: Position, cell: Cell) -> Result<(), GridError> {
        let i = self.index_of(position).ok_or(GridError::OutOfBounds {
            position,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Replace the cell at `position` with `f(old)`, returning the new cell.
    ///
    /// Returns `None` and leaves the grid untouched if out of bounds.
    pub fn update(&mut self, position: Position, f: impl FnOnce(Cell) -> Cell) -> Option<Cell> {
        let i = self.index_of(position)?;
        let next = f(self.cells[i]);
        self.cells[i] = next;
        Some(next)
    }

    /// Row-major first `^` cell.
    pub fn find_guard_start(&self) -> Result<Position, GridError> {
        self.cells
            .iter()
            .position(|&c| c == Cell::GuardStart)
            .map(|i| self.position_of(i))
            .ok_or(GridError::GuardNotFound)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.position_of(i))
    }

    /// Number of cells satisfying `pred`.
    pub fn count_where(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&c| pred(c)).count()
    }

    /// Number of cells carrying a trail mark or the guard start.
    pub fn visited_count(&self) -> usize {
        self.count_where(Cell::is_visited)
    }

    /// A copy of this grid with `position` set to [`Cell::Obstacle`].
    pub fn with_obstacle(&self, position: Position) -> Result<Self, GridError> {
        let mut variant = self.clone();
        variant.set(position, Cell::Obstacle)?;
        Ok(variant)
    }

    /// One string per row, using the cell symbols.
    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
