use crate::error::MazeError;

/// The queries the search needs from a cell of the maze. Any cell type offering these can be
/// searched; [Tile] is the stock implementation used by the text format.
pub trait Cell {
    fn is_wall(&self) -> bool;
    fn is_empty(&self) -> bool;
    fn is_start(&self) -> bool {
        false
    }
    fn is_end(&self) -> bool {
        false
    }
}

/// Plain maze tiles: `.` empty, `#` wall, `S` start and `E` end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Start,
    End,
}

impl Cell for Tile {
    /// Start and end tiles are walkable, so they count as empty.
    fn is_empty(&self) -> bool {
        !self.is_wall()
    }
    fn is_wall(&self) -> bool {
        *self == Tile::Wall
    }
    fn is_start(&self) -> bool {
        *self == Tile::Start
    }
    fn is_end(&self) -> bool {
        *self == Tile::End
    }
}

impl TryFrom<char> for Tile {
    type Error = MazeError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '.' => Ok(Tile::Empty),
            '#' => Ok(Tile::Wall),
            'S' => Ok(Tile::Start),
            'E' => Ok(Tile::End),
            _ => Err(MazeError::UnknownCellType(symbol)),
        }
    }
}

impl From<Tile> for char {
    fn from(tile: Tile) -> char {
        match tile {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::End => 'E',
        }
    }
}

/// Lets a plain `bool` grid (`true` meaning blocked) be searched directly.
impl Cell for bool {
    fn is_wall(&self) -> bool {
        *self
    }
    fn is_empty(&self) -> bool {
        !*self
    }
}
