use serde::{Deserialize, Serialize};

/// A cell position, `x` is the column and `y` is the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    pub fn step(self, side: Side) -> Coord {
        let offset = side.offset();
        Coord {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }

    pub fn manhattan_distance(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Up,
    Down,
    Left,
    Right,
}

impl Side {
    /// Neighbor enumeration order. Path search breaks ties in this order.
    pub const ALL: [Side; 4] = [Side::Up, Side::Down, Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Up => Side::Down,
            Side::Down => Side::Up,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn offset(self) -> Coord {
        match self {
            Side::Up => Coord { x: 0, y: -1 },
            Side::Down => Coord { x: 0, y: 1 },
            Side::Left => Coord { x: -1, y: 0 },
            Side::Right => Coord { x: 1, y: 0 },
        }
    }
}

/// Wall flags for the four sides of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellWalls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl CellWalls {
    pub fn get(&self, side: Side) -> bool {
        match side {
            Side::Up => self.up,
            Side::Down => self.down,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side) {
        match side {
            Side::Up => self.up = true,
            Side::Down => self.down = true,
            Side::Left => self.left = true,
            Side::Right => self.right = true,
        }
    }

    pub fn count(&self) -> usize {
        Side::ALL.iter().filter(|&&side| self.get(side)).count()
    }
}
