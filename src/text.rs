//! Reading mazes from text and drawing them back, optionally with a path on top.
//!
//! Each non-blank line is a row; surrounding whitespace is ignored and every remaining character
//! is one cell.
use core::fmt;
use std::fs;
use std::path::Path;

use grid_util::point::Point;
use log::warn;

use crate::cell::Cell;
use crate::error::MazeError;
use crate::settings::MazeSettings;
use crate::Maze;

/// Parses rows of cells from `input`.
pub fn parse_rows<T>(input: &str) -> Result<Vec<Vec<T>>, MazeError>
where
    T: TryFrom<char>,
{
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, symbol)| {
                    T::try_from(symbol).map_err(|_| {
                        warn!("Unknown cell type {:?} at ({}, {})", symbol, x, y);
                        MazeError::UnknownCellType(symbol)
                    })
                })
                .collect::<Result<Vec<T>, MazeError>>()
        })
        .collect()
}

impl<T: Cell + TryFrom<char>> Maze<T> {
    /// Creates a maze from its textual representation, taking start and end from the start and
    /// end cells.
    pub fn parse(input: &str, settings: MazeSettings) -> Result<Maze<T>, MazeError> {
        Maze::from_rows(parse_rows(input)?, settings)
    }

    /// Creates a maze from a text file.
    pub fn from_file<P: AsRef<Path>>(path: P, settings: MazeSettings) -> Result<Maze<T>, MazeError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| MazeError::CannotReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Maze::parse(&input, settings)
    }
}

impl<T: Cell + Copy + Into<char>> Maze<T> {
    /// Draws the maze with every position of `path` replaced by `symbol`. Plain empty cells are
    /// drawn as spaces.
    pub fn text(&self, path: &[Point], symbol: char) -> String {
        self.grid
            .rows()
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        if path.contains(&Point::new(x as i32, y as i32)) {
                            symbol
                        } else if cell.is_empty() && !cell.is_start() && !cell.is_end() {
                            ' '
                        } else {
                            (*cell).into()
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T: Cell + Copy + Into<char>> fmt::Display for Maze<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text(&[], 'O'))
    }
}
