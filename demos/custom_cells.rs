use maze_solver::{Cell, Maze, MazeSettings, Point};

// Searches a maze made of a custom cell type. Only the wall/empty/start/end queries are
// needed; here doors count as open and rocks block the way.
//
//  ~~~~~
//  ~>-R~
//  ~-~D~
//  ~--*~
//  ~~~~~

#[derive(Clone, Copy, Debug)]
enum Terrain {
    Water,
    Rock,
    Grass,
    Door,
    Entrance,
    Treasure,
}

impl Cell for Terrain {
    fn is_wall(&self) -> bool {
        matches!(self, Terrain::Water | Terrain::Rock)
    }
    fn is_empty(&self) -> bool {
        matches!(self, Terrain::Grass | Terrain::Door)
    }
    fn is_start(&self) -> bool {
        matches!(self, Terrain::Entrance)
    }
    fn is_end(&self) -> bool {
        matches!(self, Terrain::Treasure)
    }
}

impl TryFrom<char> for Terrain {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, char> {
        match symbol {
            '~' => Ok(Terrain::Water),
            'R' => Ok(Terrain::Rock),
            '-' => Ok(Terrain::Grass),
            'D' => Ok(Terrain::Door),
            '>' => Ok(Terrain::Entrance),
            '*' => Ok(Terrain::Treasure),
            other => Err(other),
        }
    }
}

fn main() {
    let maze: Maze<Terrain> =
        Maze::parse("~~~~~\n~>-R~\n~-~D~\n~--*~\n~~~~~", MazeSettings::default()).unwrap();
    let result = maze.find_lowest_scoring_paths().unwrap();
    println!("Lowest score: {}", result.score);
    for path_result in &result.path_results {
        let path: Vec<(i32, i32)> = path_result.path.iter().map(|p| (p.x, p.y)).collect();
        println!("{:?}", path);
    }
    let doors = maze.filter_positions(|t| matches!(t, Terrain::Door));
    println!("Doors: {:?}", doors);
    assert_eq!(maze.start(), Point::new(1, 1));
}
