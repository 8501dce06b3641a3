use super::BoardError;
use std::fmt;
use std::str::FromStr;

/// A cell on the 8x8 grid, stored as `row * 8 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= 8 || col >= 8 { return Err(BoardError::OutOfBounds { row, col }); }
        Ok(Square((row * 8 + col) as u8))
    }

    pub fn from_index(idx: usize) -> Result<Self, BoardError> {
        if idx >= 64 { return Err(BoardError::OutOfBounds { row: idx / 8, col: idx % 8 }); }
        Ok(Square(idx as u8))
    }

    pub fn row(self) -> usize { (self.0 / 8) as usize }
    pub fn col(self) -> usize { (self.0 % 8) as usize }
    pub fn index(self) -> usize { self.0 as usize }
    pub fn bit(self) -> u64 { 1u64 << self.0 }

    pub fn is_corner(self) -> bool {
        matches!((self.row(), self.col()), (0, 0) | (0, 7) | (7, 0) | (7, 7))
    }

    pub fn is_edge(self) -> bool {
        self.row() == 0 || self.row() == 7 || self.col() == 0 || self.col() == 7
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col() as u8) as char, self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.trim().as_bytes();
        if b.len() != 2 { return Err(BoardError::ParseMove(s.to_string())); }
        let file = b[0].to_ascii_uppercase();
        let rank = b[1];
        if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(BoardError::ParseMove(s.to_string()));
        }
        Square::new((rank - b'1') as usize, (file - b'A') as usize)
    }
}

/// Iterates the set bits of a mask in ascending index order, i.e. row-major.
#[derive(Clone, Copy, Debug)]
pub struct SquareIter(pub u64);

impl Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 { return None; }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareIter {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Square),
    Pass,
}

impl Move {
    pub fn square(self) -> Option<Square> {
        match self {
            Move::Place(sq) => Some(sq),
            Move::Pass => None,
        }
    }

    pub fn is_pass(self) -> bool { self == Move::Pass }
}

impl From<Square> for Move {
    fn from(sq: Square) -> Self { Move::Place(sq) }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(sq) => write!(f, "{}", sq),
            Move::Pass => write!(f, "PASS"),
        }
    }
}

impl FromStr for Move {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("pass") { return Ok(Move::Pass); }
        s.parse::<Square>().map(Move::Place)
    }
}
