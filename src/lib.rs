//! # maze_solver
//!
//! Finds paths through grid mazes. Two questions can be asked of a [Maze]:
//!
//! - [find_shortest_path](Maze::find_shortest_path) returns one cheapest path;
//! - [find_lowest_scoring_paths](Maze::find_lowest_scoring_paths) returns the lowest score and
//!   *every* path achieving it.
//!
//! Walks are scored with a cost per move plus a rotation cost whenever the direction of travel
//! changes, configured through [MazeSettings]. Because turning costs something, the search runs
//! over [SearchState]s (position and facing direction) rather than plain positions, using a
//! [uniform-cost search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) that re-admits
//! states reached with a tying score so that no cheapest path is missed. Connected components are
//! pre-computed to avoid flood-filling behaviour if no path exists.
//!
//! Mazes are generic over their cells through the [Cell] trait; [Tile] is the stock cell type
//! used by the text format in [text].
pub mod cell;
pub mod direction;
pub mod error;
pub mod grid;
pub mod priority_queue;
pub mod result;
pub mod search;
pub mod settings;
pub mod solver;
pub mod state;
pub mod text;

use std::num::NonZeroU32;

use log::info;

pub use crate::cell::{Cell, Tile};
pub use crate::direction::Direction;
pub use crate::error::MazeError;
pub use crate::grid::MazeGrid;
pub use crate::result::{LowestScoringPathsResult, PathResult};
pub use crate::settings::MazeSettings;
pub use crate::solver::{rotation::RotationSolver, MazeSolver};
pub use crate::state::SearchState;
pub use grid_util::point::Point;

/// At most one successor per direction.
pub const N_SMALLVEC_SIZE: usize = 4;
pub const DEFAULT_MOVE_COST: NonZeroU32 = NonZeroU32::MIN;
pub const DEFAULT_ROTATION_COST: u32 = 0;

/// A grid of cells together with a resolved start, end and the [MazeSettings] used to score
/// walks between them. The maze is never modified by a search, so searches on the same maze can
/// run concurrently. Start and end are checked against the grid once, in [Maze::new], and are
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct Maze<T> {
    grid: MazeGrid<T>,
    start: Point,
    end: Point,
    settings: MazeSettings,
}

impl<T: Cell> Maze<T> {
    /// Creates a maze from rows of cells. An explicit start or end must lie inside the grid;
    /// otherwise the first start or end cell in row-major order is used.
    pub fn new(
        rows: Vec<Vec<T>>,
        start: Option<Point>,
        end: Option<Point>,
        settings: MazeSettings,
    ) -> Result<Maze<T>, MazeError> {
        let grid = MazeGrid::new(rows);
        let start = Self::resolve(&grid, start, T::is_start, MazeError::NoStart)?;
        let end = Self::resolve(&grid, end, T::is_end, MazeError::NoEnd)?;
        info!(
            "Created maze with {} rows, start {} and end {}",
            grid.height(),
            start,
            end
        );
        Ok(Maze {
            grid,
            start,
            end,
            settings,
        })
    }

    /// Creates a maze whose start and end are taken from the start and end cells.
    pub fn from_rows(rows: Vec<Vec<T>>, settings: MazeSettings) -> Result<Maze<T>, MazeError> {
        Maze::new(rows, None, None, settings)
    }

    fn resolve(
        grid: &MazeGrid<T>,
        explicit: Option<Point>,
        tagged: fn(&T) -> bool,
        missing: MazeError,
    ) -> Result<Point, MazeError> {
        match explicit {
            Some(p) if grid.in_bounds(p) => Ok(p),
            Some(p) => Err(MazeError::InvalidPosition(p)),
            None => grid.find_position(tagged).ok_or(missing),
        }
    }

    pub fn grid(&self) -> &MazeGrid<T> {
        &self.grid
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }
    pub fn settings(&self) -> MazeSettings {
        self.settings
    }

    /// The solver scoring walks according to this maze's settings.
    pub fn solver(&self) -> RotationSolver {
        RotationSolver::from(&self.settings)
    }

    /// Finds a single cheapest path from the start to the end. Which one is returned when several
    /// tie is unspecified.
    pub fn find_shortest_path(&self) -> Option<PathResult> {
        self.solver()
            .get_shortest_path(&self.grid, self.start, self.end)
    }

    /// Finds the lowest score from the start to the end and every path achieving it.
    pub fn find_lowest_scoring_paths(&self) -> Option<LowestScoringPathsResult> {
        self.solver()
            .get_lowest_scoring_paths(&self.grid, self.start, self.end)
    }

    pub fn cell(&self, point: Point) -> Option<&T> {
        self.grid.get(point)
    }

    /// Positions of all cells matching `predicate`, in row-major order.
    pub fn filter_positions<F>(&self, predicate: F) -> Vec<Point>
    where
        F: Fn(&T) -> bool,
    {
        self.grid.filter_positions(predicate)
    }
}
