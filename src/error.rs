use std::path::PathBuf;

use grid_util::point::Point;
use thiserror::Error;

/// Errors raised while building a [Maze](crate::Maze). Searching itself never fails.
#[derive(Debug, Error)]
pub enum MazeError {
    /// A symbol in the maze text maps to no known cell type.
    #[error("unknown cell type {0:?}")]
    UnknownCellType(char),

    /// A symbol maps to no direction.
    #[error("unknown direction {0:?}")]
    UnknownDirection(char),

    /// No start position was given and no start cell exists.
    #[error("maze has no start")]
    NoStart,

    /// No end position was given and no end cell exists.
    #[error("maze has no end")]
    NoEnd,

    /// An explicitly given position lies outside the grid.
    #[error("position {0} is outside the maze")]
    InvalidPosition(Point),

    #[error("cannot read maze file {}", .path.display())]
    CannotReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
