use maze_solver::{Maze, MazeSettings, Tile};

// In this example the shortest path is found through a 5x5 maze with shape
// #####
// #.#E#
// #.#.#
// #S..#
// #####
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Every move costs 1 and turning is free.

fn main() {
    let maze: Maze<Tile> = Maze::parse(
        "#####\n#.#E#\n#.#.#\n#S..#\n#####",
        MazeSettings::default(),
    )
    .unwrap();
    println!("{}\n", maze);
    let result = maze.find_shortest_path().unwrap();
    println!("Steps: {}", result.steps());
    println!("{}\n", maze.text(&result.path, 'O'));
    println!("Path:");
    for p in result.path {
        println!("{:?}", p);
    }
}
