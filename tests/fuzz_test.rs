/// Fuzzes the searches on many random mazes, checking them against simple independent
/// implementations: a breadth-first search for step counts and a plain Dijkstra over
/// (position, direction) states for scores and the number of lowest scoring paths.
use maze_solver::{Cell, Direction, Maze, MazeSettings, Point};
use rand::prelude::*;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::num::NonZeroU32;

const N: usize = 6;
const N_GRIDS: usize = 2000;

fn random_maze(rng: &mut StdRng, settings: MazeSettings) -> Maze<bool> {
    let mut rows: Vec<Vec<bool>> = (0..N)
        .map(|_| (0..N).map(|_| rng.gen_bool(0.3)).collect())
        .collect();
    rows[0][0] = false;
    rows[N - 1][N - 1] = false;
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    Maze::new(rows, Some(start), Some(end), settings).unwrap()
}

fn random_settings(rng: &mut StdRng) -> MazeSettings {
    MazeSettings::default()
        .with_move_cost(NonZeroU32::new(rng.gen_range(1..=3)).unwrap())
        .with_rotation_cost(*[0, 1, 5, 1000].choose(rng).unwrap())
        .with_initial_direction(*Direction::ALL.choose(rng).unwrap())
}

fn visualize_maze(maze: &Maze<bool>) {
    for (y, row) in maze.grid().rows().iter().enumerate() {
        for (x, blocked) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            if p == maze.start() {
                print!("S");
            } else if p == maze.end() {
                print!("G");
            } else if *blocked {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn open_neighbours(maze: &Maze<bool>, p: Point) -> Vec<(Point, Direction)> {
    Direction::ALL
        .into_iter()
        .map(|d| (d.step(p), d))
        .filter(|(n, _)| maze.cell(*n).is_some_and(|c| !c.is_wall()))
        .collect()
}

fn bfs_steps(maze: &Maze<bool>) -> Option<usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(maze.start(), 0);
    queue.push_back(maze.start());
    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        if p == maze.end() {
            return Some(d);
        }
        for (n, _) in open_neighbours(maze, p) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

type State = (Point, Direction);

fn edge_cost(settings: &MazeSettings, facing: Direction, d: Direction) -> u64 {
    let rotation = if facing == d { 0 } else { settings.rotation_cost };
    u64::from(settings.move_cost.get()) + u64::from(rotation)
}

/// Lowest score to the end and the number of distinct paths achieving it. End states are not
/// expanded, matching the searches under test.
fn dijkstra_score_and_count(maze: &Maze<bool>) -> Option<(u64, usize)> {
    let settings = maze.settings();
    let start: State = (maze.start(), settings.initial_direction);
    let mut dist: HashMap<State, u64> = HashMap::new();
    let mut done: HashSet<State> = HashSet::new();
    let mut order: Vec<State> = Vec::new();
    // Heap entries refer to `pushed` by index, since states are not ordered.
    let mut pushed: Vec<State> = vec![start];
    let mut heap = BinaryHeap::new();
    dist.insert(start, 0);
    heap.push(Reverse((0, 0)));
    while let Some(Reverse((d, ix))) = heap.pop() {
        let state = pushed[ix];
        if d > dist[&state] || !done.insert(state) {
            continue;
        }
        order.push(state);
        if state.0 == maze.end() {
            continue;
        }
        for (n, dir) in open_neighbours(maze, state.0) {
            let nd = d + edge_cost(&settings, state.1, dir);
            if dist.get(&(n, dir)).map_or(true, |&old| nd < old) {
                dist.insert((n, dir), nd);
                pushed.push((n, dir));
                heap.push(Reverse((nd, pushed.len() - 1)));
            }
        }
    }
    let best = dist
        .iter()
        .filter(|(s, _)| s.0 == maze.end())
        .map(|(_, &d)| d)
        .min()?;

    let mut count: HashMap<State, usize> = HashMap::new();
    count.insert(start, 1);
    for state in &order {
        if state.0 == maze.end() {
            continue;
        }
        let c = count.get(state).copied().unwrap_or(0);
        for (n, dir) in open_neighbours(maze, state.0) {
            if dist[state] + edge_cost(&settings, state.1, dir) == dist[&(n, dir)] {
                *count.entry((n, dir)).or_insert(0) += c;
            }
        }
    }
    let paths = Direction::ALL
        .into_iter()
        .filter(|d| dist.get(&(maze.end(), *d)) == Some(&best))
        .map(|d| count.get(&(maze.end(), d)).copied().unwrap_or(0))
        .sum();
    Some((best, paths))
}

/// Checks that a path walks from start to end over open cells one unit step at a time and
/// returns its score.
fn validate_path(maze: &Maze<bool>, path: &[Point]) -> u64 {
    assert_eq!(path.first(), Some(&maze.start()));
    assert_eq!(path.last(), Some(&maze.end()));
    let mut facing = maze.settings().initial_direction;
    let mut score = 0;
    for pair in path.windows(2) {
        let d = Direction::between(pair[0], pair[1]).expect("not a unit step");
        assert!(!maze.cell(pair[1]).unwrap().is_wall());
        score += edge_cost(&maze.settings(), facing, d);
        facing = d;
    }
    score
}

#[test]
fn fuzz_shortest_path_steps() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let maze = random_maze(&mut rng, MazeSettings::default());
        let expected = bfs_steps(&maze);
        let path = maze.find_shortest_path();
        if path.as_ref().map(|p| p.steps()) != expected {
            visualize_maze(&maze);
        }
        assert_eq!(path.as_ref().map(|p| p.steps()), expected);
        if let Some(path) = path {
            validate_path(&maze, &path.path);
        }
    }
}

#[test]
fn fuzz_lowest_scoring_paths() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let settings = random_settings(&mut rng);
        let maze = random_maze(&mut rng, settings);
        let expected = dijkstra_score_and_count(&maze);
        let result = maze.find_lowest_scoring_paths();
        let found = result.as_ref().map(|r| (r.score, r.path_results.len()));
        if found != expected {
            println!("settings: {settings:?}");
            visualize_maze(&maze);
        }
        assert_eq!(found, expected);
        let Some(result) = result else {
            assert!(maze.find_shortest_path().is_none());
            continue;
        };
        for path_result in &result.path_results {
            assert_eq!(validate_path(&maze, &path_result.path), result.score);
        }
        let shortest = maze.find_shortest_path().unwrap();
        assert_eq!(validate_path(&maze, &shortest.path), result.score);
    }
}

/// Repeated searches report the same score and the same set of paths.
#[test]
fn fuzz_repeatable() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let settings = random_settings(&mut rng);
        let maze = random_maze(&mut rng, settings);
        let sorted_paths = |m: &Maze<bool>| {
            m.find_lowest_scoring_paths().map(|r| {
                let mut paths: Vec<Vec<(i32, i32)>> = r
                    .path_results
                    .iter()
                    .map(|p| p.path.iter().map(|q| (q.x, q.y)).collect())
                    .collect();
                paths.sort();
                (r.score, paths)
            })
        };
        assert_eq!(sorted_paths(&maze), sorted_paths(&maze));
    }
}

/// Independent searches on a shared maze need no synchronization.
#[test]
fn concurrent_searches() {
    let mut rng = StdRng::seed_from_u64(3);
    let settings = MazeSettings::default().with_rotation_cost(5);
    let mazes: Vec<Maze<bool>> = (0..8).map(|_| random_maze(&mut rng, settings)).collect();
    let sequential: Vec<_> = mazes
        .iter()
        .map(|m| m.find_lowest_scoring_paths().map(|r| r.score))
        .collect();
    let concurrent: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = mazes
            .iter()
            .map(|m| s.spawn(move || m.find_lowest_scoring_paths().map(|r| r.score)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, concurrent);
}
