use anyhow::Result;
use clap::Parser;
use othellobot::board::GameOutcome;
use othellobot::search::greedy::greedy_move;
use othellobot::{Board, Color, Move, SearchParams, Searcher};
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Human,
    Engine,
    Greedy,
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "human" => Ok(Side::Human),
            "e" | "engine" | "ai" => Ok(Side::Engine),
            "g" | "greedy" => Ok(Side::Greedy),
            other => Err(format!("unknown side {other:?}: use human, engine or greedy")),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Othello against the alpha-beta engine", long_about = None)]
struct Args {
    /// Who plays Black: human, engine or greedy
    #[arg(long, default_value = "human")]
    black: Side,

    /// Who plays White: human, engine or greedy
    #[arg(long, default_value = "engine")]
    white: Side,

    /// Search depth limit
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Time budget per engine move in seconds
    #[arg(long, default_value_t = 10.0)]
    time: f64,

    /// JSON search config; overrides --depth and --time
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transposition table size in MB (approximate)
    #[arg(long, default_value_t = 16)]
    hash_mb: usize,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn get_human_move(board: &Board, color: Color) -> Result<Move> {
    let legal = board.legal_moves(color);
    let listed: Vec<String> = legal.iter().map(|sq| sq.to_string()).collect();
    loop {
        print!("Enter your move ({}): ", listed.join(" "));
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { anyhow::bail!("input closed"); }
        match input.trim().parse::<Move>() {
            Ok(Move::Place(sq)) if legal.contains(&sq) => return Ok(Move::Place(sq)),
            Ok(_) => println!("Illegal move!"),
            Err(e) => println!("{e}. Use a column A-H and a row 1-8, e.g. D3"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = match args.config.as_ref() {
        Some(path) => SearchParams::from_json_file(path)?,
        None => SearchParams { depth: args.depth, time_limit_secs: Some(args.time), ..SearchParams::default() },
    };
    let mut searcher = Searcher::default();
    searcher.set_tt_capacity_mb(args.hash_mb);

    let mut board = Board::startpos();
    let mut color = Color::Black;
    while !board.is_terminal() {
        println!("\n{}", board);
        println!("Black {} - White {}", board.count(Color::Black), board.count(Color::White));

        if !board.has_legal_move(color) {
            println!("{} has no legal move and passes.", color);
            board = board.play(Move::Pass, color)?;
            color = color.opponent();
            continue;
        }

        let side = if color == Color::Black { args.black } else { args.white };
        let mv = match side {
            Side::Human => get_human_move(&board, color)?,
            Side::Greedy => greedy_move(&board, color),
            Side::Engine => {
                let res = searcher.search(&board, color, &params);
                if args.verbose {
                    println!(
                        "depth {} score {} nodes {} elapsed {:.2}s{}",
                        res.depth,
                        res.score,
                        res.nodes,
                        res.elapsed.as_secs_f64(),
                        if res.timed_out { " (time limit)" } else { "" }
                    );
                }
                res.best_move
            }
        };
        println!("{} plays {}", color, mv);
        board = board.play(mv, color)?;
        color = color.opponent();
    }

    println!("\n{}", board);
    let (b, w) = (board.count(Color::Black), board.count(Color::White));
    println!("Game over. Black: {}, White: {}", b, w);
    match board.outcome() {
        GameOutcome::Win(c) => println!("{} wins!", c),
        GameOutcome::Draw => println!("It's a draw!"),
    }
    Ok(())
}
