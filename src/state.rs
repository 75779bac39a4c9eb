use grid_util::point::Point;

use crate::direction::Direction;

/// A vertex of the search graph: where the walker stands and which way it faces. The facing
/// matters because turning is charged separately from moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub position: Point,
    pub direction: Direction,
}

impl SearchState {
    pub fn new(position: Point, direction: Direction) -> SearchState {
        SearchState {
            position,
            direction,
        }
    }

    /// The state reached by moving one step in `direction`, now facing that way.
    pub fn advance(&self, direction: Direction) -> SearchState {
        SearchState::new(direction.step(self.position), direction)
    }
}
