use crate::direction::Direction;
use crate::settings::MazeSettings;
use crate::solver::MazeSolver;

/// Charges `move_cost` for every step and `rotation_cost` on top for every step that changes
/// direction. With a zero rotation cost this is a plain shortest-path search. Costs are widened
/// to `u64` so that a maximal rotation cost still fits a single step.
#[derive(Clone, Debug)]
pub struct RotationSolver {
    pub move_cost: u32,
    pub rotation_cost: u32,
    pub initial_direction: Direction,
}

impl RotationSolver {
    pub fn new(settings: &MazeSettings) -> RotationSolver {
        RotationSolver {
            move_cost: settings.move_cost.get(),
            rotation_cost: settings.rotation_cost,
            initial_direction: settings.initial_direction,
        }
    }
}

impl From<&MazeSettings> for RotationSolver {
    fn from(settings: &MazeSettings) -> RotationSolver {
        RotationSolver::new(settings)
    }
}

impl MazeSolver for RotationSolver {
    fn cost(&self, facing: Direction, direction: Direction) -> u64 {
        let move_cost = u64::from(self.move_cost);
        if facing == direction {
            move_cost
        } else {
            move_cost.saturating_add(u64::from(self.rotation_cost))
        }
    }

    fn initial_direction(&self) -> Direction {
        self.initial_direction
    }
}
