use std::fmt::Display;

/// Board square. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Square reached by moving `steps` squares in `dir`, if it is on a board of `size`.
    #[inline]
    pub fn offset(self, dir: Direction, steps: u8, size: u8) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = self.row as i16 + (dr as i16) * (steps as i16);
        let col = self.col as i16 + (dc as i16) * (steps as i16);
        let size = size as i16;
        if row < 0 || col < 0 || row >= size || col >= size {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }
}

impl Display for Coord {
    /// Column letter followed by the 1-based row number, e.g. `c4`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let col = char::from(b'a' + self.col);
        write!(f, "{col}{}", self.row + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Also the order in which jumps are enumerated from a square.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction and distance from `from` to `to` if they share a row or column.
    pub fn between(from: Coord, to: Coord) -> Option<(Direction, u8)> {
        match (from.row == to.row, from.col == to.col) {
            (true, false) if to.col > from.col => Some((Direction::Right, to.col - from.col)),
            (true, false) => Some((Direction::Left, from.col - to.col)),
            (false, true) if to.row > from.row => Some((Direction::Down, to.row - from.row)),
            (false, true) => Some((Direction::Up, from.row - to.row)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Opening move: take one of your own stones off the board.
    Remove(Coord),
    /// Jump over one or more opponent stones in a straight line.
    Jump { from: Coord, to: Coord },
}

impl Move {
    /// Number of opponent stones this move captures.
    pub fn captures(&self) -> u8 {
        match *self {
            Move::Remove(..) => 0,
            Move::Jump { from, to } => Direction::between(from, to).map(|(_, d)| d / 2).unwrap_or(0),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Remove(c) => write!(f, "remove {c}"),
            Move::Jump { from, to } => write!(f, "{from}-{to}"),
        }
    }
}
