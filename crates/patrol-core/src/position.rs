//! Grid positions and guard state.

use crate::direction::Direction;
use std::fmt;

/// A `(row, col)` address on the grid.
///
/// Coordinates are signed so that the cell one step past an edge is
/// representable; whether it lies inside a particular grid is the grid's
/// business, not the position's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, top-to-bottom.
    pub row: i32,
    /// Column index, left-to-right.
    pub col: i32,
}

impl Position {
    /// Construct a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`.
    ///
    /// Never wraps and never fails; the result may be out of bounds.
    pub fn offset(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset_2d();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Where the guard is and which way it faces.
///
/// Two equal states reached during one run mean the patrol has entered
/// a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GuardState {
    /// Current cell.
    pub position: Position,
    /// Current facing.
    pub direction: Direction,
}

impl GuardState {
    /// Construct a guard state.
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// A freshly placed guard: at `position`, facing up.
    pub const fn at_start(position: Position) -> Self {
        Self::new(position, Direction::Up)
    }
}

impl fmt::Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_does_not_wrap() {
        let p = Position::new(0, 0);
        assert_eq!(p.offset(Direction::Up), Position::new(-1, 0));
        assert_eq!(p.offset(Direction::Left), Position::new(0, -1));
        assert_eq!(p.offset(Direction::Down), Position::new(1, 0));
        assert_eq!(p.offset(Direction::Right), Position::new(0, 1));
    }

    #[test]
    fn position_orders_row_major() {
        let mut v = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0)
            ]
        );
    }

    #[test]
    fn start_state_faces_up() {
        let s = GuardState::at_start(Position::new(6, 4));
        assert_eq!(s.direction, Direction::Up);
        assert_eq!(s.to_string(), "(6, 4) facing up");
    }
}
