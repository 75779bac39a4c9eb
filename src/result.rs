use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use itertools::Itertools;

use crate::direction::Direction;

pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A walk through the maze, from the start to the end inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathResult {
    pub path: Vec<Point>,
}

impl PathResult {
    pub fn new(path: Vec<Point>) -> PathResult {
        PathResult { path }
    }

    /// Number of moves, one less than the number of positions.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The direction of every move. Stops early at the first pair of positions that are not
    /// neighbours, which never happens for paths produced by a search.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.path
            .iter()
            .tuple_windows()
            .map_while(|(a, b)| Direction::between(*a, *b))
    }

    /// Number of moves taken in a different direction than the walker was facing, starting out
    /// facing `initial`.
    pub fn turns(&self, initial: Direction) -> usize {
        self.directions()
            .scan(initial, |facing, d| {
                let turned = *facing != d;
                *facing = d;
                Some(turned)
            })
            .filter(|&turned| turned)
            .count()
    }
}

/// The lowest score with which the end can be reached and every path achieving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LowestScoringPathsResult {
    pub score: u64,
    pub path_results: Vec<PathResult>,
}

impl LowestScoringPathsResult {
    /// Every position lying on at least one of the paths, in the order first visited.
    pub fn positions(&self) -> FxIndexSet<Point> {
        self.path_results
            .iter()
            .flat_map(|r| r.path.iter().copied())
            .collect()
    }
}
