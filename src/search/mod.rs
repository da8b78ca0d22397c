//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation (exhaustive and active points) and move ordering
//! - One-move threat scans (immediate win, immediate block, line extension)
//! - Alpha-Beta search with iterative deepening

pub mod alphabeta;
pub mod movegen;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, DEFAULT_MAX_DEPTH, DEFAULT_TIME_BUDGET};
pub use movegen::{
    active_points, exhaustive, generate, order_by_evaluation, order_by_proximity, CandidateMode,
    ACTIVE_RADIUS,
};
pub use threat::{
    find_line_extension_block, find_winning_cell, find_winning_cells, OPEN_THREE_BLOCK_LEN,
    PAIR_BLOCK_LEN,
};
