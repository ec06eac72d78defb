//! Cell kinds and the trail-marking upgrade rule.

use crate::direction::Axis;

/// The state of one grid cell.
///
/// `Open` and `Obstacle` are terrain; `GuardStart` marks the initial guard
/// cell; the three trail kinds record that the guard crossed the cell.
/// Trails only ever upgrade: `Open` → one axis trail → `TurnTrail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Walkable, not yet visited (`.`).
    Open,
    /// Blocks movement; the guard turns instead (`#`).
    Obstacle,
    /// Initial guard cell, facing up (`^`).
    GuardStart,
    /// Crossed moving up or down (`|`).
    VerticalTrail,
    /// Crossed moving left or right (`-`).
    HorizontalTrail,
    /// Crossed on both axes, or turned on (`+`).
    TurnTrail,
}

impl Cell {
    /// Parse a single symbol. Returns `None` for unknown symbols.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Obstacle),
            '^' => Some(Cell::GuardStart),
            '|' => Some(Cell::VerticalTrail),
            '-' => Some(Cell::HorizontalTrail),
            '+' => Some(Cell::TurnTrail),
            _ => None,
        }
    }

    /// The symbol this cell renders as.
    pub fn symbol(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Obstacle => '#',
            Cell::GuardStart => '^',
            Cell::VerticalTrail => '|',
            Cell::HorizontalTrail => '-',
            Cell::TurnTrail => '+',
        }
    }

    /// Trail kind for a crossing along `axis`.
    pub fn trail(axis: Axis) -> Self {
        match axis {
            Axis::Vertical => Cell::VerticalTrail,
            Axis::Horizontal => Cell::HorizontalTrail,
        }
    }

    /// Whether the guard has been here: any trail, or the start cell.
    pub fn is_visited(self) -> bool {
        matches!(
            self,
            Cell::GuardStart | Cell::VerticalTrail | Cell::HorizontalTrail | Cell::TurnTrail
        )
    }

    /// Whether this cell blocks movement.
    pub fn is_obstacle(self) -> bool {
        self == Cell::Obstacle
    }

    /// The cell after the guard walks onto it along `axis`.
    ///
    /// A perpendicular trail upgrades to `TurnTrail`; `TurnTrail` is final.
    /// `GuardStart` counts as a vertical crossing. Obstacles are returned
    /// unchanged.
    pub fn marked(self, axis: Axis) -> Self {
        let existing = match self {
            Cell::Open => return Cell::trail(axis),
            Cell::Obstacle | Cell::TurnTrail => return self,
            Cell::GuardStart | Cell::VerticalTrail => Axis::Vertical,
            Cell::HorizontalTrail => Axis::Horizontal,
        };
        if existing == axis {
            Cell::trail(axis)
        } else {
            Cell::TurnTrail
        }
    }

    /// The cell after the guard turns in place on it.
    pub fn turned(self) -> Self {
        match self {
            Cell::Obstacle => Cell::Obstacle,
            _ => Cell::TurnTrail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Cell; 6] = [
        Cell::Open,
        Cell::Obstacle,
        Cell::GuardStart,
        Cell::VerticalTrail,
        Cell::HorizontalTrail,
        Cell::TurnTrail,
    ];

    fn arb_cell() -> impl Strategy<Value = Cell> {
        prop::sample::select(ALL.to_vec())
    }

    fn arb_axis() -> impl Strategy<Value = Axis> {
        prop_oneof![Just(Axis::Vertical), Just(Axis::Horizontal)]
    }

    /// Trail strength: a marked cell never returns to a lower rank.
    fn rank(cell: Cell) -> u8 {
        match cell {
            Cell::Open => 0,
            Cell::GuardStart | Cell::VerticalTrail | Cell::HorizontalTrail => 1,
            Cell::TurnTrail => 2,
            Cell::Obstacle => 3,
        }
    }

    #[test]
    fn symbols_roundtrip() {
        for cell in ALL {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), None);
    }

    #[test]
    fn open_takes_axis_trail() {
        assert_eq!(Cell::Open.marked(Axis::Vertical), Cell::VerticalTrail);
        assert_eq!(Cell::Open.marked(Axis::Horizontal), Cell::HorizontalTrail);
    }

    #[test]
    fn perpendicular_crossing_upgrades_to_turn() {
        assert_eq!(
            Cell::HorizontalTrail.marked(Axis::Vertical),
            Cell::TurnTrail
        );
        assert_eq!(
            Cell::VerticalTrail.marked(Axis::Horizontal),
            Cell::TurnTrail
        );
    }

    #[test]
    fn same_axis_crossing_keeps_trail() {
        assert_eq!(
            Cell::VerticalTrail.marked(Axis::Vertical),
            Cell::VerticalTrail
        );
        assert_eq!(
            Cell::HorizontalTrail.marked(Axis::Horizontal),
            Cell::HorizontalTrail
        );
    }

    #[test]
    fn guard_start_counts_as_vertical() {
        assert_eq!(Cell::GuardStart.marked(Axis::Vertical), Cell::VerticalTrail);
        assert_eq!(Cell::GuardStart.marked(Axis::Horizontal), Cell::TurnTrail);
    }

    #[test]
    fn turning_marks_turn_trail() {
        assert_eq!(Cell::Open.turned(), Cell::TurnTrail);
        assert_eq!(Cell::GuardStart.turned(), Cell::TurnTrail);
        assert_eq!(Cell::Obstacle.turned(), Cell::Obstacle);
    }

    #[test]
    fn visited_kinds() {
        assert!(!Cell::Open.is_visited());
        assert!(!Cell::Obstacle.is_visited());
        assert!(Cell::GuardStart.is_visited());
        assert!(Cell::TurnTrail.is_visited());
    }

    proptest! {
        #[test]
        fn marking_never_downgrades(
            start in arb_cell(),
            axes in prop::collection::vec(arb_axis(), 0..16),
        ) {
            let mut cell = start;
            for axis in axes {
                let next = cell.marked(axis);
                prop_assert!(rank(next) >= rank(cell));
                if cell == Cell::TurnTrail {
                    prop_assert_eq!(next, Cell::TurnTrail);
                }
                cell = next;
            }
        }
    }
}
