use crate::cell::Cell;
use crate::direction::Direction;
use crate::grid::MazeGrid;
use crate::result::{LowestScoringPathsResult, PathResult};
use crate::search::{lowest_cost_paths, PathSelection};
use crate::state::SearchState;
use crate::N_SMALLVEC_SIZE;
use grid_util::point::Point;
use itertools::Itertools;
use log::{info, warn};
use smallvec::SmallVec;

pub mod rotation;

/// A way of scoring walks through a maze. Implementors decide what a single move costs, the
/// searches are shared.
pub trait MazeSolver {
    /// Cost of moving one step in `direction` while facing `facing`.
    fn cost(&self, facing: Direction, direction: Direction) -> u64;

    /// The direction the walker faces at the start.
    fn initial_direction(&self) -> Direction;

    fn successors<T: Cell>(
        &self,
        grid: &MazeGrid<T>,
        state: &SearchState,
    ) -> SmallVec<[(SearchState, u64); N_SMALLVEC_SIZE]> {
        grid.neighborhood_states(state)
            .into_iter()
            .map(|next| (next, self.cost(state.direction, next.direction)))
            .collect()
    }

    /// Score of walking `path`, or [None] if two consecutive positions are not neighbours.
    /// Saturates at [u64::MAX].
    fn path_score(&self, path: &[Point]) -> Option<u64> {
        let mut facing = self.initial_direction();
        let mut total: u64 = 0;
        for (a, b) in path.iter().tuple_windows() {
            let direction = Direction::between(*a, *b)?;
            total = total.saturating_add(self.cost(facing, direction));
            facing = direction;
        }
        Some(total)
    }

    /// Finds one cheapest path from `start` to `end`.
    fn get_shortest_path<T: Cell>(
        &self,
        grid: &MazeGrid<T>,
        start: Point,
        end: Point,
    ) -> Option<PathResult> {
        self.search(grid, start, end, PathSelection::First)
            .and_then(|r| r.path_results.into_iter().next())
    }

    /// Finds the lowest score with which `end` can be reached and every path achieving it.
    fn get_lowest_scoring_paths<T: Cell>(
        &self,
        grid: &MazeGrid<T>,
        start: Point,
        end: Point,
    ) -> Option<LowestScoringPathsResult> {
        self.search(grid, start, end, PathSelection::AllLowest)
    }

    /// Shared body of [get_shortest_path](Self::get_shortest_path) and
    /// [get_lowest_scoring_paths](Self::get_lowest_scoring_paths).
    fn search<T: Cell>(
        &self,
        grid: &MazeGrid<T>,
        start: Point,
        end: Point,
        selection: PathSelection,
    ) -> Option<LowestScoringPathsResult> {
        // Check if start and end are on the same connected component.
        if grid.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            return None;
        }
        let initial = SearchState::new(start, self.initial_direction());
        let result = lowest_cost_paths(
            &initial,
            |state| self.successors(grid, state),
            |state| state.position == end,
            selection,
        );
        match result {
            Some((paths, score)) => Some(LowestScoringPathsResult {
                score,
                path_results: paths
                    .into_iter()
                    .map(|states| PathResult::new(states.iter().map(|s| s.position).collect()))
                    .collect(),
            }),
            None => {
                warn!("Reachable end could not be pathed to, are the components correct?");
                None
            }
        }
    }
}
