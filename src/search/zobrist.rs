use crate::board::{Board, Color, Square, SquareIter};
use rand::Rng;
use std::sync::OnceLock;

struct Keys {
    pieces: [[u64; 2]; 64],
    white_to_move: u64,
}

static KEYS: OnceLock<Keys> = OnceLock::new();

// Drawn once per process from the thread RNG (OS-seeded).
fn keys() -> &'static Keys {
    KEYS.get_or_init(|| {
        let mut rng = rand::thread_rng();
        let mut pieces = [[0u64; 2]; 64];
        for cell in &mut pieces {
            cell[0] = rng.gen();
            cell[1] = rng.gen();
        }
        Keys { pieces, white_to_move: rng.gen() }
    })
}

pub fn piece(sq: Square, color: Color) -> u64 {
    keys().pieces[sq.index()][color.index()]
}

/// Hash of the cell contents only. Identical boards hash identically
/// regardless of who is to move.
pub fn compute(board: &Board) -> u64 {
    let k = keys();
    let mut key = 0u64;
    for color in [Color::Black, Color::White] {
        for sq in SquareIter(board.mask(color)) {
            key ^= k.pieces[sq.index()][color.index()];
        }
    }
    key
}

/// Extra key mixed into transposition lookups so positions that differ only
/// in side to move (reachable through passes) never share an entry.
pub fn side_key(color: Color) -> u64 {
    match color {
        Color::Black => 0,
        Color::White => keys().white_to_move,
    }
}

/// Incremental update for `color` placing on `sq` and turning `flips`.
pub fn after_move(key: u64, sq: Square, flips: u64, color: Color) -> u64 {
    let k = keys();
    let (own, opp) = (color.index(), color.opponent().index());
    let mut key = key ^ k.pieces[sq.index()][own];
    for f in SquareIter(flips) {
        key ^= k.pieces[f.index()][opp] ^ k.pieces[f.index()][own];
    }
    key
}
