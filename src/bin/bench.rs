use anyhow::Context;
use clap::Parser;
use othellobot::search::alphabeta::{SearchParams, Searcher, TtPolicy};
use othellobot::{Board, Color};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "othellobot-bench", version, about = "Benchmark OthelloBot search speed")]
struct Args {
    /// 64 cells (".", "B", "W") or 'startpos'
    #[arg(long, default_value = "startpos")]
    board: String,

    /// Side to move: 'b' or 'w'
    #[arg(long, default_value = "b")]
    color: String,

    /// Fixed search depth
    #[arg(long, default_value_t = 6)]
    depth: u32,

    /// Time budget in seconds (0 = unlimited)
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Transposition table size in MB (approximate)
    #[arg(long, default_value_t = 16)]
    hash_mb: usize,

    /// Keep the transposition table between the repeated searches
    #[arg(long, default_value_t = false)]
    persist_tt: bool,

    /// Number of times to repeat the search
    #[arg(long, default_value_t = 1)]
    repeat: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "startpos" { Board::startpos() } else { args.board.parse::<Board>().context("invalid board")? };
    let color = args.color.parse::<Color>()?;

    let mut s = Searcher::default();
    s.set_tt_capacity_mb(args.hash_mb);
    let mut p = SearchParams::default();
    p.depth = args.depth;
    p.time_limit_secs = if args.time > 0.0 { Some(args.time) } else { None };
    p.tt_policy = if args.persist_tt { TtPolicy::Persist } else { TtPolicy::ClearEachSearch };

    for _ in 0..args.repeat.max(1) {
        let t0 = Instant::now();
        let res = s.search(&board, color, &p);
        let dt = t0.elapsed();
        let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
        println!(
            "bestmove={} score={} depth={} nodes={} timed_out={} elapsed={:.3}s nps={:.1}",
            res.best_move, res.score, res.depth, res.nodes, res.timed_out, dt.as_secs_f64(), nps
        );
    }
    Ok(())
}
