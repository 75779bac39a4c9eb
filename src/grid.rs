use crate::cell::Cell;
use crate::direction::Direction;
use crate::state::SearchState;
use crate::N_SMALLVEC_SIZE;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [MazeGrid] holds the rows of cells of a maze. Rows may differ in length, so a point is only in
/// bounds if its column exists in its own row. Connected components of the walkable cells are
/// kept in a [UnionFind] structure so unreachable goals are detected without a flood fill.
#[derive(Clone, Debug)]
pub struct MazeGrid<T> {
    rows: Vec<Vec<T>>,
    /// Flat index of the first cell of each row.
    row_offsets: Vec<usize>,
    components: UnionFind<usize>,
}

impl<T: Cell> MazeGrid<T> {
    pub fn new(rows: Vec<Vec<T>>) -> MazeGrid<T> {
        let mut row_offsets = Vec::with_capacity(rows.len());
        let mut total = 0;
        for row in &rows {
            row_offsets.push(total);
            total += row.len();
        }
        let mut grid = MazeGrid {
            rows,
            row_offsets,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }
    pub fn height(&self) -> usize {
        self.rows.len()
    }
    /// Total number of cells over all rows.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        self.get(point).is_some()
    }
    pub fn get(&self, point: Point) -> Option<&T> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.rows
            .get(point.y as usize)
            .and_then(|row| row.get(point.x as usize))
    }
    pub fn can_move_to(&self, point: Point) -> bool {
        self.get(point).is_some_and(|cell| !cell.is_wall())
    }

    /// The states reachable in one step from `state`: one per direction whose target is in bounds
    /// and not a wall.
    pub fn neighborhood_states(
        &self,
        state: &SearchState,
    ) -> SmallVec<[SearchState; N_SMALLVEC_SIZE]> {
        Direction::ALL
            .into_iter()
            .map(|d| state.advance(d))
            .filter(|next| self.can_move_to(next.position))
            .collect()
    }

    /// Positions of all cells matching `predicate`, in row-major order.
    pub fn filter_positions<F>(&self, predicate: F) -> Vec<Point>
    where
        F: Fn(&T) -> bool,
    {
        self.positions()
            .filter(|(_, cell)| predicate(cell))
            .map(|(p, _)| p)
            .collect()
    }

    /// The first cell matching `predicate` in row-major order.
    pub fn find_position<F>(&self, predicate: F) -> Option<Point>
    where
        F: Fn(&T) -> bool,
    {
        self.positions().find(|(_, cell)| predicate(cell)).map(|(p, _)| p)
    }

    fn positions(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Point::new(x as i32, y as i32), cell))
        })
    }

    fn get_ix_point(&self, point: &Point) -> Option<usize> {
        self.get(*point)?;
        Some(self.row_offsets[point.y as usize] + point.x as usize)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.get_ix_point(point).map(|ix| self.components.find(ix))
    }

    /// Checks whether a search from `start` can possibly arrive at `goal`. A walled start is
    /// allowed to step out onto any open neighbour, a walled goal is only reached by standing on it.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if start == goal {
            return self.in_bounds(*start);
        }
        let goal_ix = match self.get_ix_point(goal) {
            Some(ix) if self.can_move_to(*goal) => ix,
            _ => return false,
        };
        if self.can_move_to(*start) {
            self.get_ix_point(start)
                .is_some_and(|ix| self.components.equiv(ix, goal_ix))
        } else {
            Direction::ALL
                .into_iter()
                .map(|d| d.step(*start))
                .filter(|p| self.can_move_to(*p))
                .filter_map(|p| self.get_ix_point(&p))
                .any(|ix| self.components.equiv(ix, goal_ix))
        }
    }

    /// Checks if start and goal can not be connected.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.len());
        let mut links = 0;
        for (point, cell) in self.positions() {
            if cell.is_wall() {
                continue;
            }
            let Some(parent_ix) = self.get_ix_point(&point) else {
                continue;
            };
            for neighbour in [Direction::Right.step(point), Direction::Down.step(point)] {
                if self.can_move_to(neighbour) {
                    if let Some(ix) = self.get_ix_point(&neighbour) {
                        components.union(parent_ix, ix);
                        links += 1;
                    }
                }
            }
        }
        info!(
            "Generated components for {} cells in {} rows ({} links)",
            self.len(),
            self.height(),
            links
        );
        self.components = components;
    }
}
