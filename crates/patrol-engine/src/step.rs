//! One tick of guard movement.

use patrol_core::{Direction, GuardState, Position};
use patrol_grid::Grid;

/// Advance the guard one tick and mark the grid.
///
/// - Ahead is off the grid: returns `None`, grid unchanged.
/// - Ahead is an obstacle: the guard stays put, its cell becomes a turn
///   trail, and it faces the clockwise successor.
/// - Otherwise: the guard moves ahead and that cell takes the trail for
///   the direction's axis (upgraded to a turn trail on a perpendicular
///   crossing).
///
/// # Examples
///
/// ```
/// use patrol_core::{Cell, Direction, Position};
/// use patrol_engine::step;
/// use patrol_grid::Grid;
///
/// let mut grid = Grid::from_lines(&["#..", "|..", "|.."]).unwrap();
/// let next = step(&mut grid, Position::new(1, 0), Direction::Up).unwrap();
/// assert_eq!(next.position, Position::new(1, 0));
/// assert_eq!(next.direction, Direction::Right);
/// assert_eq!(grid.at(Position::new(1, 0)), Some(Cell::TurnTrail));
/// ```
pub fn step(grid: &mut Grid, position: Position, direction: Direction) -> Option<GuardState> {
    let ahead = position.offset(direction);
    let cell = grid.at(ahead)?;

    if cell.is_obstacle() {
        grid.update(position, |c| c.turned());
        return Some(GuardState::new(position, direction.turn_right()));
    }

    grid.update(ahead, |c| c.marked(direction.axis()));
    Some(GuardState::new(ahead, direction))
}
