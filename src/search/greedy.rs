use crate::board::{Board, Color, Move, Square};

pub const CORNER_SCORE: i32 = 100;
pub const EDGE_SCORE: i32 = 10;

/// One-ply score used by the greedy player: corners beat edges, and the
/// number of flipped stones breaks the rest.
pub fn move_score(board: &Board, sq: Square, color: Color) -> i32 {
    let place = if sq.is_corner() { CORNER_SCORE } else if sq.is_edge() { EDGE_SCORE } else { 0 };
    place + board.flips(sq, color).count_ones() as i32
}

/// Highest `move_score`, first row-major move on ties. Pass when there is
/// nothing to play.
pub fn greedy_move(board: &Board, color: Color) -> Move {
    let mut best: Option<(Square, i32)> = None;
    for sq in board.legal_moves(color) {
        let s = move_score(board, sq, color);
        if best.map_or(true, |(_, bs)| s > bs) { best = Some((sq, s)); }
    }
    best.map_or(Move::Pass, |(sq, _)| Move::Place(sq))
}
