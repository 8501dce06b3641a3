use crate::board::{Board, Color, SquareIter};

/// Positional weights, row-major. Corners are prized; the X- and C-squares
/// next to them are penalised.
#[rustfmt::skip]
pub const WEIGHTS: [i32; 64] = [
    120, -20,  20,   5,   5,  20, -20, 120,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
     20,  -5,  15,   3,   3,  15,  -5,  20,
      5,  -5,   3,   3,   3,   3,  -5,   5,
      5,  -5,   3,   3,   3,   3,  -5,   5,
     20,  -5,  15,   3,   3,  15,  -5,  20,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
    120, -20,  20,   5,   5,  20, -20, 120,
];

pub const MOBILITY_WEIGHT: i32 = 10;
pub const CORNER_BONUS: i32 = 100;
pub const PIECE_WEIGHT: i32 = 5;

const CORNERS: u64 = (1 << 0) | (1 << 7) | (1 << 56) | (1 << 63);

// Terminal scores dominate every heuristic value.
pub const WIN_SCORE: i32 = 1_000_000;
pub const DRAW_SCORE: i32 = 0;

fn weighted_sum(mask: u64) -> i32 {
    SquareIter(mask).map(|sq| WEIGHTS[sq.index()]).sum()
}

pub fn positional(board: &Board, color: Color) -> i32 {
    weighted_sum(board.mask(color)) - weighted_sum(board.mask(color.opponent()))
}

pub fn mobility(board: &Board, color: Color) -> i32 {
    board.legal_moves_mask(color).count_ones() as i32 - board.legal_moves_mask(color.opponent()).count_ones() as i32
}

pub fn corners(board: &Board, color: Color) -> i32 {
    let own = (board.mask(color) & CORNERS).count_ones() as i32;
    let opp = (board.mask(color.opponent()) & CORNERS).count_ones() as i32;
    own - opp
}

pub fn material(board: &Board, color: Color) -> i32 {
    board.count(color) as i32 - board.count(color.opponent()) as i32
}

/// Final score by piece count: `WIN_SCORE` for the side ahead.
pub fn terminal_score(board: &Board, color: Color) -> i32 {
    match material(board, color) {
        d if d > 0 => WIN_SCORE,
        d if d < 0 => -WIN_SCORE,
        _ => DRAW_SCORE,
    }
}

/// Static score of `board` from `color`'s point of view. Positions where
/// neither side can move are scored as finished games.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let own_moves = board.legal_moves_mask(color).count_ones() as i32;
    let opp_moves = board.legal_moves_mask(color.opponent()).count_ones() as i32;
    if own_moves == 0 && opp_moves == 0 { return terminal_score(board, color); }
    positional(board, color)
        + (own_moves - opp_moves) * MOBILITY_WEIGHT
        + corners(board, color) * CORNER_BONUS
        + material(board, color) * PIECE_WEIGHT
}
