//! Cardinal facings and the clockwise turn rule.

use std::fmt;

/// Orientation of a crossing, used to pick the trail kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Up or down movement.
    Vertical,
    /// Left or right movement.
    Horizontal,
}

impl Axis {
    /// The other axis.
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }
}

/// Cardinal direction the guard is facing.
///
/// Offsets are `(row_offset, col_offset)` with rows counted top-to-bottom,
/// so `Up` decreases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Row - 1. The initial facing of every guard.
    Up = 0,
    /// Col + 1.
    Right = 1,
    /// Row + 1.
    Down = 2,
    /// Col - 1.
    Left = 3,
}

impl Direction {
    /// All four directions in clockwise order starting from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the (row_offset, col_offset) for this direction.
    pub fn offset_2d(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The clockwise successor: Up → Right → Down → Left → Up.
    pub fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Dense index in `0..4`, matching [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_cycle_returns_to_start_after_four() {
        for d in Direction::ALL {
            assert_eq!(d.turn_right().turn_right().turn_right().turn_right(), d);
        }
    }

    #[test]
    fn turn_order_is_clockwise() {
        assert_eq!(Direction::Up.turn_right(), Direction::Right);
        assert_eq!(Direction::Right.turn_right(), Direction::Down);
        assert_eq!(Direction::Down.turn_right(), Direction::Left);
        assert_eq!(Direction::Left.turn_right(), Direction::Up);
    }

    #[test]
    fn offsets_are_unit_vectors() {
        assert_eq!(Direction::Up.offset_2d(), (-1, 0));
        assert_eq!(Direction::Right.offset_2d(), (0, 1));
        assert_eq!(Direction::Down.offset_2d(), (1, 0));
        assert_eq!(Direction::Left.offset_2d(), (0, -1));
    }

    #[test]
    fn axis_matches_offset() {
        for d in Direction::ALL {
            let (dr, _) = d.offset_2d();
            let expected = if dr != 0 {
                Axis::Vertical
            } else {
                Axis::Horizontal
            };
            assert_eq!(d.axis(), expected);
        }
        assert_eq!(Axis::Vertical.perpendicular(), Axis::Horizontal);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }
}
