use super::{BoardError, Cell, Color, Move, Square, SquareIter};
use std::fmt;
use std::str::FromStr;

const NOT_A_FILE: u64 = 0xfefe_fefe_fefe_fefe;
const NOT_H_FILE: u64 = 0x7f7f_7f7f_7f7f_7f7f;

// (shift, mask): positive shifts move towards higher indices. The mask drops
// bits that wrapped around a row edge.
const DIRECTIONS: [(i32, u64); 8] = [
    (1, NOT_A_FILE),   // east
    (-1, NOT_H_FILE),  // west
    (8, u64::MAX),     // south
    (-8, u64::MAX),    // north
    (9, NOT_A_FILE),   // south-east
    (7, NOT_H_FILE),   // south-west
    (-7, NOT_A_FILE),  // north-east
    (-9, NOT_H_FILE),  // north-west
];

#[inline]
fn shift(bb: u64, (s, mask): (i32, u64)) -> u64 {
    if s > 0 { (bb << s) & mask } else { (bb >> -s) & mask }
}

/// 8x8 board as two disjoint occupancy masks. Boards are `Copy`, so every
/// search branch works on its own value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    black: u64,
    white: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Color),
    Draw,
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

impl Board {
    /// Standard opening: D4/E5 white, E4/D5 black, Black to move.
    pub fn startpos() -> Self {
        let d4 = 1u64 << (3 * 8 + 3);
        let e4 = 1u64 << (3 * 8 + 4);
        let d5 = 1u64 << (4 * 8 + 3);
        let e5 = 1u64 << (4 * 8 + 4);
        Self { black: e4 | d5, white: d4 | e5 }
    }

    pub fn empty() -> Self { Self { black: 0, white: 0 } }

    pub fn from_masks(black: u64, white: u64) -> Result<Self, BoardError> {
        if black & white != 0 { return Err(BoardError::Overlap); }
        Ok(Self { black, white })
    }

    pub fn mask(&self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn occupied(&self) -> u64 { self.black | self.white }
    pub fn empty_mask(&self) -> u64 { !self.occupied() }

    pub fn cell(&self, sq: Square) -> Cell {
        let b = sq.bit();
        if self.black & b != 0 { Cell::Black } else if self.white & b != 0 { Cell::White } else { Cell::Empty }
    }

    /// Returns a copy with one cell overwritten. Used to set up positions; no
    /// legality is implied.
    pub fn with_cell(&self, sq: Square, cell: Cell) -> Board {
        let b = sq.bit();
        let (mut black, mut white) = (self.black & !b, self.white & !b);
        match cell {
            Cell::Black => black |= b,
            Cell::White => white |= b,
            Cell::Empty => {}
        }
        Board { black, white }
    }

    pub fn count(&self, color: Color) -> u32 { self.mask(color).count_ones() }
    pub fn piece_count(&self) -> u32 { self.occupied().count_ones() }

    /// Empty cells from which `color` captures in at least one direction.
    pub fn legal_moves_mask(&self, color: Color) -> u64 {
        let own = self.mask(color);
        let opp = self.mask(color.opponent());
        let empty = self.empty_mask();
        let mut moves = 0u64;
        for dir in DIRECTIONS {
            let mut run = shift(own, dir) & opp;
            // a capturing run holds at most six stones
            for _ in 0..5 { run |= shift(run, dir) & opp; }
            moves |= shift(run, dir) & empty;
        }
        moves
    }

    /// Legal moves in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Square> {
        SquareIter(self.legal_moves_mask(color)).collect()
    }

    pub fn has_legal_move(&self, color: Color) -> bool { self.legal_moves_mask(color) != 0 }

    pub fn is_legal_move(&self, sq: Square, color: Color) -> bool {
        self.empty_mask() & sq.bit() != 0 && self.flips(sq, color) != 0
    }

    /// Opponent stones captured by placing `color` on `sq`; zero when the
    /// placement captures nothing.
    pub fn flips(&self, sq: Square, color: Color) -> u64 {
        let own = self.mask(color);
        let opp = self.mask(color.opponent());
        let origin = sq.bit();
        let mut flipped = 0u64;
        for dir in DIRECTIONS {
            let mut run = 0u64;
            let mut cur = shift(origin, dir);
            while cur & opp != 0 {
                run |= cur;
                cur = shift(cur, dir);
            }
            if cur & own != 0 { flipped |= run; }
        }
        flipped
    }

    /// Places `color` on `sq` and turns every captured run.
    pub fn apply_move(&self, sq: Square, color: Color) -> Result<Board, BoardError> {
        if self.occupied() & sq.bit() != 0 { return Err(BoardError::InvalidMove { square: sq }); }
        let flips = self.flips(sq, color);
        if flips == 0 { return Err(BoardError::InvalidMove { square: sq }); }
        Ok(self.with_flips(sq, color, flips))
    }

    /// Applies a move or a pass. A pass is only accepted when `color` has no
    /// legal placement.
    pub fn play(&self, mv: Move, color: Color) -> Result<Board, BoardError> {
        match mv {
            Move::Place(sq) => self.apply_move(sq, color),
            Move::Pass if self.has_legal_move(color) => Err(BoardError::IllegalPass),
            Move::Pass => Ok(*self),
        }
    }

    /// Applies a placement whose flip mask was already computed by
    /// [`Board::flips`]. The caller guarantees the move is legal.
    pub(crate) fn with_flips(&self, sq: Square, color: Color, flips: u64) -> Board {
        let placed = sq.bit() | flips;
        match color {
            Color::Black => Board { black: self.black | placed, white: self.white & !flips },
            Color::White => Board { black: self.black & !flips, white: self.white | placed },
        }
    }

    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White)
    }

    /// Result by piece count. Meaningful once the position is terminal.
    pub fn outcome(&self) -> GameOutcome {
        let (b, w) = (self.count(Color::Black), self.count(Color::White));
        if b > w { GameOutcome::Win(Color::Black) } else if w > b { GameOutcome::Win(Color::White) } else { GameOutcome::Draw }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for row in 0..8 {
            write!(f, "{}", row + 1)?;
            for col in 0..8 {
                let c = match self.cell(Square::new(row, col).map_err(|_| fmt::Error)?) {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Reads 64 cells in row-major order. `.`/`-` empty, `B`/`X` black,
    /// `W`/`O` white; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut idx = 0usize;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch.to_ascii_uppercase() {
                '.' | '-' => Cell::Empty,
                'B' | 'X' => Cell::Black,
                'W' | 'O' => Cell::White,
                other => return Err(BoardError::ParseBoard(format!("unexpected character {other:?}"))),
            };
            if idx >= 64 { return Err(BoardError::ParseBoard("more than 64 cells".to_string())); }
            board = board.with_cell(Square::from_index(idx)?, cell);
            idx += 1;
        }
        if idx != 64 { return Err(BoardError::ParseBoard(format!("expected 64 cells, got {idx}"))); }
        Ok(board)
    }
}
