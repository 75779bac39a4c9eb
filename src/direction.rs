use core::fmt;
use grid_util::point::Point;

use crate::error::MazeError;

/// One of the four directions of travel. Diagonal movement does not exist in a maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset as `(dx, dy)`, with y pointing down from the top-left corner.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The neighbour of `point` one step in this direction.
    pub fn step(self, point: Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(point.x + dx, point.y + dy)
    }

    /// The direction of a single step from `from` to `to`, if they are 4-neighbours.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let delta = (to.x - from.x, to.y - from.y);
        Direction::ALL.into_iter().find(|d| d.offset() == delta)
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MazeError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Direction::ALL
            .into_iter()
            .find(|d| d.symbol() == symbol)
            .ok_or(MazeError::UnknownDirection(symbol))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_and_distinct() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        let offsets = Direction::ALL.map(|d| d.offset());
        for (i, a) in offsets.iter().enumerate() {
            assert!(!offsets[i + 1..].contains(a));
        }
    }

    #[test]
    fn between_inverts_step() {
        let origin = Point::new(3, 3);
        for d in Direction::ALL {
            assert_eq!(Direction::between(origin, d.step(origin)), Some(d));
        }
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, Point::new(4, 4)), None);
        assert_eq!(Direction::between(origin, Point::new(5, 3)), None);
    }

    #[test]
    fn symbols_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::try_from(d.symbol()).unwrap(), d);
        }
        assert!(matches!(
            Direction::try_from('x'),
            Err(MazeError::UnknownDirection('x'))
        ));
    }
}
