use anyhow::Context;
use clap::Parser;
use othellobot::perft::perft;
use othellobot::{Board, Color};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for OthelloBot")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// 64 cells (".", "B", "W") or "startpos"
    #[arg(long, default_value = "startpos")]
    board: String,
    /// Side to move: "b" or "w"
    #[arg(long, default_value = "b")]
    color: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print every depth from 1 up to DEPTH
    #[arg(long, default_value_t = false)]
    divide_depths: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "startpos" { Board::startpos() } else { args.board.parse::<Board>().context("invalid board")? };
    let color = args.color.parse::<Color>()?;
    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let first = if args.divide_depths { 1 } else { args.depth };
    for depth in first..=args.depth {
        let t0 = Instant::now();
        let nodes = pool.install(|| {
            let root = board.legal_moves(color);
            if args.threads <= 1 || depth <= 1 || root.is_empty() {
                perft(&board, color, depth)
            } else {
                root.par_iter()
                    .map(|&sq| {
                        let child = board.apply_move(sq, color).map(|b| perft(&b, color.opponent(), depth - 1));
                        child.unwrap_or(0)
                    })
                    .sum()
            }
        });
        let dt = t0.elapsed().as_secs_f64();
        let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
        println!("depth: {} nodes: {} elapsed: {:.3}s nps: {:.0}", depth, nodes, dt, nps);
    }
    Ok(())
}
