use crate::board::Square;

/// Up to two cutoff moves per ply, most recent first.
#[derive(Clone, Debug, Default)]
pub struct KillerTable {
    slots: Vec<[Option<Square>; 2]>,
}

impl KillerTable {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.slots.clear(); }

    pub fn get(&self, ply: usize) -> [Option<Square>; 2] {
        self.slots.get(ply).copied().unwrap_or([None, None])
    }

    pub fn record(&mut self, ply: usize, sq: Square) {
        if ply >= self.slots.len() { self.slots.resize(ply + 1, [None, None]); }
        let slot = &mut self.slots[ply];
        if slot[0] == Some(sq) { return; }
        slot[1] = slot[0];
        slot[0] = Some(sq);
    }
}

/// Per-cell count of how useful a move to that cell has been at producing
/// cutoffs, weighted by remaining depth squared.
#[derive(Clone, Debug)]
pub struct HistoryTable {
    scores: [i32; 64],
}

impl Default for HistoryTable {
    fn default() -> Self { Self { scores: [0; 64] } }
}

impl HistoryTable {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.scores = [0; 64]; }

    pub fn score(&self, sq: Square) -> i32 { self.scores[sq.index()] }

    pub fn reward(&mut self, sq: Square, depth: u32) {
        let d = depth.min(i32::MAX as u32) as i32;
        let s = &mut self.scores[sq.index()];
        *s = s.saturating_add(d.saturating_mul(d));
    }
}

/// Search order for a node: transposition move, then killers for this ply,
/// then the rest by descending history score. Ties keep the row-major order
/// of `moves`.
pub fn order_moves(
    moves: &[Square],
    tt_move: Option<Square>,
    killers: [Option<Square>; 2],
    history: Option<&HistoryTable>,
) -> Vec<Square> {
    let mut ordered: Vec<Square> = Vec::with_capacity(moves.len());
    if let Some(m) = tt_move {
        if moves.contains(&m) { ordered.push(m); }
    }
    for k in killers.into_iter().flatten() {
        if moves.contains(&k) && !ordered.contains(&k) { ordered.push(k); }
    }
    let head = ordered.len();
    let mut rest: Vec<Square> = moves.iter().copied().filter(|m| !ordered[..head].contains(m)).collect();
    if let Some(h) = history {
        rest.sort_by_key(|&m| std::cmp::Reverse(h.score(m)));
    }
    ordered.extend(rest);
    ordered
}
