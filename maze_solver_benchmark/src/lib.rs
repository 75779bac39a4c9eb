use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::{self, File};
use std::path::Path;
use walkdir::WalkDir;

/// One expected outcome for a maze: the settings to search with and what the lowest scoring
/// paths search should report.
#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub move_cost: u32,
    pub rotation_cost: u32,
    /// Direction symbol, one of `^`, `v`, `<`, `>`.
    pub initial_direction: char,
    pub score: u64,
    /// Number of distinct positions on any lowest scoring path.
    pub tiles: usize,
    /// Number of lowest scoring paths.
    pub paths: usize,
}

fn load_benchmark(name: &str) -> (String, Vec<Scenario>) {
    let maze_str = fs::read_to_string(Path::new(&format!("./mazes/{}.txt", name)))
        .expect("Could not read maze file");

    let file = File::open(Path::new(&format!("./scenarios/{}.csv", name)))
        .expect("Could not open scenario file");

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let scenarios: Vec<Scenario> = csv_reader
        .deserialize()
        .map(|result| result.expect("Could not parse scenario record"))
        .collect();
    (maze_str, scenarios)
}

/// Names of all mazes below `mazes/`, relative and without extension, e.g. `simple/one_step`.
pub fn get_benchmark_names() -> Vec<String> {
    let root = Path::new("mazes/");
    let root = root
        .canonicalize()
        .expect("Failed to canonicalize root path");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).into_iter() {
        let entry = entry.expect("Could not get dir entry");
        let rel_path = entry
            .path()
            .strip_prefix(&root)
            .expect("Entry outside of root");
        if entry.file_type().is_file() && rel_path.components().count() >= 2 {
            let name = rel_path
                .to_str()
                .expect("Non UTF-8 maze path")
                .split_once('.')
                .expect("Maze file without extension")
                .0;
            names.push(name.replace('\\', "/"));
        }
    }
    names.sort();
    names
}

/// Loads the text of a maze together with its scenarios.
pub fn get_benchmark(name: &str) -> (String, Vec<Scenario>) {
    let benchmark_names = get_benchmark_names();
    if benchmark_names.iter().any(|n| n == name) {
        load_benchmark(name)
    } else {
        panic!("Could not load benchmark {name}!");
    }
}
