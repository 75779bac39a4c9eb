use maze_solver::{Direction, Maze, MazeSettings, Tile};

// Finds every lowest scoring path when each move costs 1 and each change of direction
// costs an additional 1000, starting out facing right.

const MAZE: &str = "
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

fn main() {
    let settings = MazeSettings::default()
        .with_rotation_cost(1000)
        .with_initial_direction(Direction::Right);
    let maze: Maze<Tile> = Maze::parse(MAZE, settings).unwrap();
    let result = maze.find_lowest_scoring_paths().unwrap();
    println!("Lowest score: {}", result.score);
    println!("Paths with this score: {}", result.path_results.len());
    for (i, path_result) in result.path_results.iter().enumerate() {
        println!(
            "Path {}: {} steps, {} turns",
            i,
            path_result.steps(),
            path_result.turns(settings.initial_direction)
        );
    }
    let positions = result.positions();
    println!("\nPositions on any best path: {}", positions.len());
    println!(
        "{}",
        maze.text(&positions.into_iter().collect::<Vec<_>>(), 'O')
    );
}
