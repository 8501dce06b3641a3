use crate::board::{Board, Color, Move, Square};
use crate::search::eval::{evaluate, WIN_SCORE};
use crate::search::ordering::{order_moves, HistoryTable, KillerTable};
use crate::search::tt::{entries_for_mb, Bound, Entry, Tt};
use crate::search::zobrist;
use anyhow::Context;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window bound strictly outside every reachable score.
pub const INFINITY: i32 = WIN_SCORE + 1;

/// What happens to the transposition table between top-level searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtPolicy {
    #[default]
    ClearEachSearch,
    /// Keep entries across searches; older generations are evicted first.
    Persist,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth: u32,
    /// Wall-clock budget in seconds; `None` searches to full depth.
    pub time_limit_secs: Option<f64>,
    pub tt_policy: TtPolicy,
    pub use_tt: bool,
    pub use_killers: bool,
    pub use_history: bool,
    pub use_pvs: bool,
    /// Seed for the random fallback move; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 4,
            time_limit_secs: Some(10.0),
            tt_policy: TtPolicy::ClearEachSearch,
            use_tt: true,
            use_killers: true,
            use_history: true,
            use_pvs: true,
            seed: None,
        }
    }
}

impl SearchParams {
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.and_then(|s| Duration::try_from_secs_f64(s.max(0.0)).ok())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading search config {}", path.display()))?;
        let params: SearchParams = serde_json::from_str(&text)
            .with_context(|| format!("parsing search config {}", path.display()))?;
        Ok(params)
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score from the searching side's point of view.
    pub score: i32,
    pub nodes: u64,
    /// Deepest fully completed iteration.
    pub depth: u32,
    pub timed_out: bool,
    pub elapsed: Duration,
}

/// Per-invocation search state. Killers and history live and die with the
/// context; the transposition table is borrowed from the owning [`Searcher`].
pub struct SearchContext<'a> {
    tt: &'a Tt,
    killers: KillerTable,
    history: HistoryTable,
    deadline: Option<Instant>,
    nodes: u64,
    aborted: bool,
    root_best: Option<(Square, i32)>,
    use_tt: bool,
    use_killers: bool,
    use_history: bool,
    use_pvs: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(tt: &'a Tt, params: &SearchParams, deadline: Option<Instant>) -> Self {
        Self {
            tt,
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            deadline,
            nodes: 0,
            aborted: false,
            root_best: None,
            use_tt: params.use_tt,
            use_killers: params.use_killers,
            use_history: params.use_history,
            use_pvs: params.use_pvs,
        }
    }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// True once the deadline has passed; every score produced afterwards is
    /// meaningless.
    pub fn aborted(&self) -> bool { self.aborted }

    /// Best root move among the root children that finished before an abort.
    pub fn root_best(&self) -> Option<(Square, i32)> { self.root_best }

    /// Replaces the deadline; later calls to [`negamax`](Self::negamax) are
    /// checked against the new one.
    pub fn set_deadline(&mut self, deadline: Option<Instant>) { self.deadline = deadline; }

    fn out_of_time(&self) -> bool {
        matches!(self.deadline, Some(dl) if Instant::now() >= dl)
    }

    fn store(&self, key: u64, depth: u32, score: i32, best: Move, bound: Bound) {
        if !self.use_tt || self.aborted { return; }
        self.tt.put(Entry { key, depth, score, best, bound, gen: 0 });
    }

    /// Negamax alpha-beta with principal-variation search. `key` is the
    /// colour-blind hash of `board`; scores are from `side`'s point of view.
    pub fn negamax(
        &mut self,
        board: &Board,
        key: u64,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        side: Color,
        ply: usize,
    ) -> (i32, Move) {
        if self.aborted || self.out_of_time() {
            self.aborted = true;
            return (0, Move::Pass);
        }
        self.nodes += 1;

        let tt_key = key ^ zobrist::side_key(side);
        let mut tt_move = None;
        if self.use_tt {
            if let Some(en) = self.tt.get(tt_key) {
                tt_move = en.best.square();
                if en.depth >= depth {
                    if en.bound == Bound::Exact { return (en.score, en.best); }
                    // the root window stays full so its score is always exact
                    if ply > 0 {
                        match en.bound {
                            Bound::Lower => alpha = alpha.max(en.score),
                            Bound::Upper => beta = beta.min(en.score),
                            Bound::Exact => {}
                        }
                        if alpha >= beta { return (en.score, en.best); }
                    }
                }
            }
        }

        if depth == 0 {
            let score = evaluate(board, side);
            self.store(tt_key, 0, score, Move::Pass, Bound::Exact);
            return (score, Move::Pass);
        }

        let moves = board.legal_moves(side);
        if moves.is_empty() {
            if !board.has_legal_move(side.opponent()) {
                let score = evaluate(board, side);
                self.store(tt_key, depth, score, Move::Pass, Bound::Exact);
                return (score, Move::Pass);
            }
            // Forced pass: same board, same depth, other side to move
            let score = -self.negamax(board, key, depth, -beta, -alpha, side.opponent(), ply + 1).0;
            if self.aborted { return (0, Move::Pass); }
            self.store(tt_key, depth, score, Move::Pass, classify(score, alpha, beta));
            return (score, Move::Pass);
        }

        let killers = if self.use_killers { self.killers.get(ply) } else { [None, None] };
        let history = if self.use_history { Some(&self.history) } else { None };
        let ordered = order_moves(&moves, tt_move, killers, history);

        let window_alpha = alpha;
        let opp = side.opponent();
        let mut best = -INFINITY;
        let mut best_move = Move::Pass;
        for (idx, &sq) in ordered.iter().enumerate() {
            let flips = board.flips(sq, side);
            let child = board.with_flips(sq, side, flips);
            let child_key = zobrist::after_move(key, sq, flips, side);
            let score = if idx == 0 || !self.use_pvs {
                -self.negamax(&child, child_key, depth - 1, -beta, -alpha, opp, ply + 1).0
            } else {
                let scout = -self.negamax(&child, child_key, depth - 1, -alpha - 1, -alpha, opp, ply + 1).0;
                if !self.aborted && scout > alpha && scout < beta {
                    -self.negamax(&child, child_key, depth - 1, -beta, -alpha, opp, ply + 1).0
                } else {
                    scout
                }
            };
            if self.aborted { return (0, Move::Pass); }

            if score > best {
                best = score;
                best_move = Move::Place(sq);
                if ply == 0 { self.root_best = Some((sq, score)); }
            }
            if best > alpha { alpha = best; }
            if alpha >= beta {
                self.killers.record(ply, sq);
                self.history.reward(sq, depth);
                break;
            }
        }

        self.store(tt_key, depth, best, best_move, classify(best, window_alpha, beta));
        (best, best_move)
    }
}

// Bound type for a fail-soft score searched with window (alpha, beta).
fn classify(score: i32, alpha: i32, beta: i32) -> Bound {
    if score <= alpha { Bound::Upper } else if score >= beta { Bound::Lower } else { Bound::Exact }
}

pub struct Searcher {
    tt: Arc<Tt>,
    pub(crate) nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self { tt: Arc::new(Tt::new()), nodes: 0 } }
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    /// Iterative deepening up to `params.depth` under the time budget. Never
    /// fails: a side without moves gets `Move::Pass`, and a search that runs
    /// out of time before any root move completes plays a random legal move.
    pub fn search(&mut self, board: &Board, color: Color, params: &SearchParams) -> SearchResult {
        let start = Instant::now();
        let deadline = params.time_limit().map(|d| start + d);
        match params.tt_policy {
            TtPolicy::ClearEachSearch => self.tt.clear(),
            TtPolicy::Persist => self.tt.bump_generation(),
        }
        self.nodes = 0;

        let moves = board.legal_moves(color);
        if moves.is_empty() {
            return SearchResult {
                best_move: Move::Pass,
                score: evaluate(board, color),
                nodes: 0,
                depth: 0,
                timed_out: false,
                elapsed: start.elapsed(),
            };
        }

        let key = zobrist::compute(board);
        let mut ctx = SearchContext::new(&self.tt, params, deadline);
        let mut best: Option<(Square, i32)> = None;
        let mut completed = 0;
        for d in 1..=params.depth {
            let (score, mv) = ctx.negamax(board, key, d, -INFINITY, INFINITY, color, 0);
            if ctx.aborted() {
                debug!("depth {} interrupted by the time limit after {} nodes", d, ctx.nodes());
                if best.is_none() { best = ctx.root_best(); }
                break;
            }
            if let Move::Place(sq) = mv {
                if moves.contains(&sq) {
                    best = Some((sq, score));
                    completed = d;
                }
            }
            debug!("depth {} score {} best {} nodes {}", d, score, mv, ctx.nodes());
        }
        let timed_out = ctx.aborted();
        self.nodes = ctx.nodes();

        let (best_move, score) = match best {
            Some((sq, s)) => (Move::Place(sq), s),
            None => {
                let mut rng = match params.seed {
                    Some(s) => SmallRng::seed_from_u64(s),
                    None => SmallRng::from_entropy(),
                };
                let mv = moves.choose(&mut rng).map_or(Move::Pass, |&sq| Move::Place(sq));
                info!("no searched move available for {}, playing random {}", color, mv);
                (mv, evaluate(board, color))
            }
        };
        SearchResult { best_move, score, nodes: self.nodes, depth: completed, timed_out, elapsed: start.elapsed() }
    }

    pub fn choose_move(&mut self, board: &Board, color: Color, params: &SearchParams) -> Move {
        self.search(board, color, params).best_move
    }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn tt_probe(&self, board: &Board, color: Color) -> Option<(u32, Bound)> {
        let key = zobrist::compute(board) ^ zobrist::side_key(color);
        self.tt.get(key).map(|e| (e.depth, e.bound))
    }

    pub fn tt_len(&self) -> usize { self.tt.len() }

    pub fn set_tt_capacity_entries(&mut self, entries: usize) {
        self.tt = Arc::new(Tt::with_capacity_entries(entries));
    }

    pub fn set_tt_capacity_mb(&mut self, mb: usize) {
        self.tt = Arc::new(Tt::with_capacity_entries(entries_for_mb(mb)));
    }
}
