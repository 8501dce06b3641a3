// Bitboard Othello engine: move generation, static evaluation and PVS alpha-beta search
pub mod board;
pub mod perft;
pub mod search;

pub use board::{Board, BoardError, Cell, Color, Move, Square};
pub use search::alphabeta::{SearchParams, SearchResult, Searcher, TtPolicy};
