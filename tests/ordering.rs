use othellobot::board::Square;
use othellobot::search::ordering::{order_moves, HistoryTable, KillerTable};
use pretty_assertions::assert_eq;

fn sq(r: usize, c: usize) -> Square { Square::new(r, c).unwrap() }

#[test]
fn tt_move_then_killers_then_history() {
    let moves = [sq(2, 3), sq(3, 2), sq(4, 5), sq(5, 4)];
    let mut history = HistoryTable::new();
    history.reward(sq(3, 2), 3);
    history.reward(sq(2, 3), 2);
    let killers = [Some(sq(5, 4)), Some(sq(0, 0))];
    let ordered = order_moves(&moves, Some(sq(4, 5)), killers, Some(&history));
    assert_eq!(ordered, vec![sq(4, 5), sq(5, 4), sq(3, 2), sq(2, 3)]);
}

#[test]
fn illegal_hints_are_ignored_and_ties_stay_row_major() {
    let moves = [sq(2, 3), sq(3, 2), sq(4, 5), sq(5, 4)];
    let ordered = order_moves(&moves, Some(sq(7, 7)), [Some(sq(0, 0)), None], Some(&HistoryTable::new()));
    assert_eq!(ordered, moves.to_vec());
    let plain = order_moves(&moves, None, [None, None], None);
    assert_eq!(plain, moves.to_vec());
}

#[test]
fn killer_hint_equal_to_tt_move_is_not_repeated() {
    let moves = [sq(2, 3), sq(3, 2)];
    let ordered = order_moves(&moves, Some(sq(3, 2)), [Some(sq(3, 2)), Some(sq(2, 3))], None);
    assert_eq!(ordered, vec![sq(3, 2), sq(2, 3)]);
}

#[test]
fn killers_keep_two_most_recent_without_duplicates() {
    let mut k = KillerTable::new();
    assert_eq!(k.get(3), [None, None]);
    k.record(3, sq(0, 0));
    k.record(3, sq(0, 0));
    assert_eq!(k.get(3), [Some(sq(0, 0)), None]);
    k.record(3, sq(1, 1));
    k.record(3, sq(2, 2));
    assert_eq!(k.get(3), [Some(sq(2, 2)), Some(sq(1, 1))]);
    k.record(3, sq(1, 1));
    assert_eq!(k.get(3), [Some(sq(1, 1)), Some(sq(2, 2))]);
    assert_eq!(k.get(2), [None, None]);
    k.clear();
    assert_eq!(k.get(3), [None, None]);
}

#[test]
fn history_rewards_depth_squared() {
    let mut h = HistoryTable::new();
    h.reward(sq(4, 4), 3);
    h.reward(sq(4, 4), 3);
    h.reward(sq(4, 4), 1);
    assert_eq!(h.score(sq(4, 4)), 19);
    assert_eq!(h.score(sq(0, 0)), 0);
}
