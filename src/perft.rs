use crate::board::{Board, Color};

// Leaf count of the game tree; a forced pass counts as a ply and a finished
// game counts as one leaf.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = board.legal_moves_mask(color);
    if moves == 0 {
        if !board.has_legal_move(color.opponent()) { return 1; }
        return perft(board, color.opponent(), depth - 1);
    }
    if depth == 1 { return moves.count_ones() as u64; }
    let mut nodes = 0u64;
    for sq in crate::board::SquareIter(moves) {
        let child = board.with_flips(sq, color, board.flips(sq, color));
        nodes += perft(&child, color.opponent(), depth - 1);
    }
    nodes
}
