use std::num::NonZeroU32;

use crate::direction::Direction;
use crate::{DEFAULT_MOVE_COST, DEFAULT_ROTATION_COST};

/// Costs used when scoring a walk through the maze, and the direction the walker initially faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeSettings {
    /// Cost of every step.
    pub move_cost: NonZeroU32,
    /// Extra cost of a step taken in a different direction than the walker is facing.
    pub rotation_cost: u32,
    pub initial_direction: Direction,
}

impl Default for MazeSettings {
    fn default() -> MazeSettings {
        MazeSettings {
            move_cost: DEFAULT_MOVE_COST,
            rotation_cost: DEFAULT_ROTATION_COST,
            initial_direction: Direction::Up,
        }
    }
}

impl MazeSettings {
    pub fn with_move_cost(self, move_cost: NonZeroU32) -> MazeSettings {
        MazeSettings { move_cost, ..self }
    }
    pub fn with_rotation_cost(self, rotation_cost: u32) -> MazeSettings {
        MazeSettings {
            rotation_cost,
            ..self
        }
    }
    pub fn with_initial_direction(self, initial_direction: Direction) -> MazeSettings {
        MazeSettings {
            initial_direction,
            ..self
        }
    }
}
