use othellobot::board::{Board, BoardError, Cell, Color, Move, Square};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const DIRS: [(i32, i32); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

fn sq(r: usize, c: usize) -> Square { Square::new(r, c).unwrap() }

fn cell_at(b: &Board, r: i32, c: i32) -> Option<Cell> {
    if (0..8).contains(&r) && (0..8).contains(&c) { Some(b.cell(sq(r as usize, c as usize))) } else { None }
}

// Per-direction scan, independent of the bitboard shifts.
fn brute_flips(b: &Board, row: usize, col: usize, color: Color) -> Vec<(usize, usize)> {
    let own = Cell::from(color);
    let opp = Cell::from(color.opponent());
    let mut out = Vec::new();
    if b.cell(sq(row, col)) != Cell::Empty { return out; }
    for (dr, dc) in DIRS {
        let (mut r, mut c) = (row as i32 + dr, col as i32 + dc);
        let mut run = Vec::new();
        while cell_at(b, r, c) == Some(opp) {
            run.push((r as usize, c as usize));
            r += dr;
            c += dc;
        }
        if !run.is_empty() && cell_at(b, r, c) == Some(own) { out.extend(run); }
    }
    out.sort();
    out
}

fn reachable_boards(games: u64) -> Vec<(Board, Color)> {
    let mut out = Vec::new();
    for seed in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut b = Board::startpos();
        let mut color = Color::Black;
        while !b.is_terminal() {
            out.push((b, color));
            let moves = b.legal_moves(color);
            let mv = moves.choose(&mut rng).map_or(Move::Pass, |&s| Move::Place(s));
            b = b.play(mv, color).unwrap();
            color = color.opponent();
        }
        out.push((b, color));
    }
    out
}

#[test]
fn opening_has_four_black_moves() {
    let b = Board::startpos();
    assert_eq!(b.piece_count(), 4);
    assert_eq!(b.cell(sq(3, 3)), Cell::White);
    assert_eq!(b.cell(sq(4, 4)), Cell::White);
    assert_eq!(b.cell(sq(3, 4)), Cell::Black);
    assert_eq!(b.cell(sq(4, 3)), Cell::Black);
    let moves: Vec<String> = b.legal_moves(Color::Black).iter().map(|s| s.to_string()).collect();
    assert_eq!(moves, vec!["D3", "C4", "F5", "E6"]);
}

#[test]
fn legal_moves_match_brute_force_scan() {
    for (b, color) in reachable_boards(24) {
        let mut expected = Vec::new();
        for r in 0..8 {
            for c in 0..8 {
                if !brute_flips(&b, r, c, color).is_empty() { expected.push(sq(r, c)); }
            }
        }
        assert_eq!(b.legal_moves(color), expected, "board:\n{}", b);
        for s in &expected { assert!(b.is_legal_move(*s, color)); }
    }
}

#[test]
fn apply_move_changes_only_placed_and_captured_cells() {
    for (b, color) in reachable_boards(12) {
        for s in b.legal_moves(color) {
            let expected = brute_flips(&b, s.row(), s.col(), color);
            let next = b.apply_move(s, color).unwrap();
            assert_eq!(next.piece_count(), b.piece_count() + 1);
            assert_eq!(next.count(color), b.count(color) + 1 + expected.len() as u32);
            for r in 0..8 {
                for c in 0..8 {
                    let here = sq(r, c);
                    if here == s || expected.contains(&(r, c)) {
                        assert_eq!(next.cell(here), Cell::from(color));
                    } else {
                        assert_eq!(next.cell(here), b.cell(here), "untouched cell {} changed", here);
                    }
                }
            }
        }
    }
}

#[test]
fn apply_move_rejects_occupied_and_non_capturing_cells() {
    let b = Board::startpos();
    let d4 = sq(3, 3);
    assert_eq!(b.apply_move(d4, Color::Black), Err(BoardError::InvalidMove { square: d4 }));
    let a1 = sq(0, 0);
    assert_eq!(b.apply_move(a1, Color::Black), Err(BoardError::InvalidMove { square: a1 }));
    assert!(!b.is_legal_move(a1, Color::Black));
}

#[test]
fn pass_only_allowed_without_moves() {
    let b = Board::startpos();
    assert_eq!(b.play(Move::Pass, Color::Black), Err(BoardError::IllegalPass));
    let stuck: Board = "BW......\n........\n........\n........\n........\n........\n........\n........".parse().unwrap();
    assert!(!stuck.has_legal_move(Color::White));
    assert_eq!(stuck.play(Move::Pass, Color::White), Ok(stuck));
}

#[test]
fn board_text_round_trip() {
    let b = Board::startpos().apply_move(sq(2, 3), Color::Black).unwrap();
    let text = b.to_string();
    assert!(text.starts_with("  A B C D E F G H\n"));
    assert!(text.contains("3 . . . B . . . ."));
    let cells: String = text.lines().skip(1).map(|l| l[1..].to_string()).collect();
    assert_eq!(cells.parse::<Board>().unwrap(), b);
}

#[test]
fn board_parse_errors() {
    assert!(matches!("B".parse::<Board>(), Err(BoardError::ParseBoard(_))));
    assert!(matches!("Z".repeat(64).parse::<Board>(), Err(BoardError::ParseBoard(_))));
    assert!(matches!(".".repeat(65).parse::<Board>(), Err(BoardError::ParseBoard(_))));
    assert_eq!(Board::from_masks(1, 1), Err(BoardError::Overlap));
}
