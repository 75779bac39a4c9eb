/// This module implements a uniform-cost search in the style of
/// [pathfinding's dijkstra function](https://docs.rs/pathfinding/latest/pathfinding/directed/dijkstra/index.html)
/// that can keep going after the first goal is found to enumerate every path of minimal cost.
use fxhash::FxHashMap;
use log::debug;
use num_traits::{SaturatingAdd, Zero};
use std::hash::Hash;

use crate::priority_queue::PriorityQueue;

/// How many of the cheapest paths a search collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathSelection {
    /// Stop at the first path reaching a goal.
    First,
    /// Keep searching until every path of minimal cost has been found.
    AllLowest,
}

/// Searches from `start` for the cheapest paths to a node satisfying `success`, returning the
/// paths (start and goal inclusive) and their shared cost.
///
/// A node is queued again whenever it is reached with a cost equal to the best seen so far, not
/// only when strictly cheaper. This is what lets [PathSelection::AllLowest] find every cheapest
/// path rather than just one; the work it adds is bounded since the graph is finite and costs
/// never decrease along a path. Goal nodes are never expanded. Costs saturate at their maximum
/// instead of overflowing.
pub fn lowest_cost_paths<N, C, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
    selection: PathSelection,
) -> Option<(Vec<Vec<N>>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy + SaturatingAdd,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = PriorityQueue::new();
    to_see.enqueue(vec![start.clone()], C::zero());
    let mut best: FxHashMap<N, C> = FxHashMap::default();
    best.insert(start.clone(), C::zero());

    let mut lowest: Option<C> = None;
    let mut lowest_paths: Vec<Vec<N>> = Vec::new();
    let mut expanded = 0usize;
    let mut relaxed = 0usize;

    while let Some((cost, path)) = to_see.dequeue() {
        // Once a goal has been reached, anything more expensive can neither improve nor tie it.
        if lowest.is_some_and(|l| cost > l) {
            continue;
        }
        let Some(node) = path.last() else {
            continue;
        };
        if success(node) {
            match lowest {
                Some(l) if cost == l => lowest_paths.push(path),
                _ => {
                    lowest = Some(cost);
                    lowest_paths = vec![path];
                }
            }
            if selection == PathSelection::First {
                break;
            }
            continue;
        }
        expanded += 1;
        for (successor, move_cost) in successors(node) {
            let new_cost = cost.saturating_add(&move_cost);
            if best.get(&successor).is_some_and(|&c| new_cost > c) {
                continue;
            }
            best.insert(successor.clone(), new_cost);
            relaxed += 1;
            let mut new_path = Vec::with_capacity(path.len() + 1);
            new_path.extend_from_slice(&path);
            new_path.push(successor);
            to_see.enqueue(new_path, new_cost);
        }
    }
    debug!(
        "Search expanded {} nodes, relaxed {} edges, found {} path(s)",
        expanded,
        relaxed,
        lowest_paths.len()
    );
    lowest.map(|c| (lowest_paths, c))
}
