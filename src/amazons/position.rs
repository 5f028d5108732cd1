use std::ops::{Add, Sub};

use crate::amazons::consts::MAX_BOARD_SIZE;
use crate::utils::prelude::*;

/// A board coordinate. Validity against a particular board's size is the
/// caller's responsibility (`Board::in_bounds`) since, unlike the teacher's
/// `Coord`, a board's size is a runtime parameter rather than a fixed const.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Renders the column as a letter and the row as a 1-based number, e.g. `d10`.
    pub fn notate(&self) -> String {
        let col_letter = (b'a' + self.col as u8) as char;
        format!("{}{}", col_letter, self.row + 1)
    }
}

impl std::str::FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_char = chars
            .next()
            .ok_or_else(|| anyhow!("empty position string"))?;

        if !col_char.is_ascii_alphabetic() {
            return Err(anyhow!("position {s} must start with a column letter"));
        }
        let col = (col_char.to_ascii_lowercase() as u8 - b'a') as usize;
        if col >= MAX_BOARD_SIZE {
            return Err(anyhow!("column {col_char} is out of range"));
        }

        let row_str: String = chars.collect();
        let row_num: usize = row_str
            .parse()
            .with_context(|| format!("invalid row number in position {s}"))?;
        if row_num == 0 {
            return Err(anyhow!("row numbers are 1-based, received 0 in {s}"));
        }

        Ok(Position { row: row_num - 1, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

/// A signed offset, used to walk rays out of a `Position` one direction at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    pub rows: isize,
    pub cols: isize,
}

impl Offset {
    pub fn new(rows: isize, cols: isize) -> Offset {
        Offset { rows, cols }
    }
}

/// The 8 compass directions a queen may move along: one step of each of the
/// two axes, every combination except the zero vector.
pub static DIRECTIONS: [Offset; 8] = [
    Offset { rows: 1, cols: 0 },
    Offset { rows: 1, cols: 1 },
    Offset { rows: 0, cols: 1 },
    Offset { rows: -1, cols: 1 },
    Offset { rows: -1, cols: 0 },
    Offset { rows: -1, cols: -1 },
    Offset { rows: 0, cols: -1 },
    Offset { rows: 1, cols: -1 },
];

impl From<Position> for Offset {
    fn from(value: Position) -> Self {
        Offset { rows: value.row as isize, cols: value.col as isize }
    }
}

impl Add<Offset> for Position {
    type Output = Offset;
    fn add(self, rhs: Offset) -> Self::Output {
        Offset::from(self) + rhs
    }
}

impl Add<Offset> for Offset {
    type Output = Offset;
    fn add(self, rhs: Offset) -> Self::Output {
        Offset { rows: self.rows + rhs.rows, cols: self.cols + rhs.cols }
    }
}

impl Sub<Position> for Position {
    type Output = Offset;
    fn sub(self, rhs: Position) -> Self::Output {
        Offset::from(self) - Offset::from(rhs)
    }
}

impl Sub<Offset> for Offset {
    type Output = Offset;
    fn sub(self, rhs: Offset) -> Self::Output {
        Offset { rows: self.rows - rhs.rows, cols: self.cols - rhs.cols }
    }
}

impl Offset {
    /// Whether this offset, read as an absolute coordinate, still lands inside
    /// a board of the given size.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.rows >= 0 && (self.rows as usize) < size && self.cols >= 0 && (self.cols as usize) < size
    }

    /// Coerces the offset into a `Position`, unchecked; caller must have
    /// verified `in_bounds` first.
    pub fn coerce(&self) -> Position {
        Position { row: self.rows as usize, col: self.cols as usize }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notate_round_trip() {
        for s in ["a1", "d10", "j4", "z26"] {
            let pos: Position = s.parse().unwrap();
            assert_eq!(pos.notate(), s);
        }
    }

    #[test]
    fn rejects_zero_row() {
        assert!("a0".parse::<Position>().is_err());
    }

    #[test]
    fn rejects_bad_column() {
        assert!("110".parse::<Position>().is_err());
    }

    #[test]
    fn directions_has_eight_unique_offsets() {
        let set: std::collections::HashSet<_> = DIRECTIONS.iter().collect();
        assert_eq!(set.len(), 8);
        assert!(!DIRECTIONS.contains(&Offset::new(0, 0)));
    }
}
