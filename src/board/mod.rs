pub mod bitboard;
pub mod square;

pub use bitboard::{Board, GameOutcome};
pub use square::{Move, Square, SquareIter};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(BoardError::ParseColor(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl From<Color> for Cell {
    fn from(c: Color) -> Self {
        match c {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: usize, col: usize },
    #[error("illegal move at {square}")]
    InvalidMove { square: Square },
    #[error("cannot pass while legal moves exist")]
    IllegalPass,
    #[error("cannot parse move: {0:?}")]
    ParseMove(String),
    #[error("cannot parse color {0:?}: use 'b' or 'w'")]
    ParseColor(String),
    #[error("cannot parse board: {0}")]
    ParseBoard(String),
    #[error("black and white masks overlap")]
    Overlap,
}
