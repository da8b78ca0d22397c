//! Gomoku move-decision engine with free-style rules
//!
//! Two players alternate placing stones on a square board (15x15 by
//! default); the first to line up five or more in a row, column or
//! diagonal wins. No captures, no forbidden moves.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and scoped trial moves
//! - [`rules`]: Win detection
//! - [`eval`]: Line-potential and threat/priority heuristics
//! - [`search`]: Candidate generation, threat scans and alpha-beta search
//! - [`engine`]: The decision pipeline shared by every AI tier
//! - [`player`]: Human and AI players behind one trait, plus the factory
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{create_player, is_winning_move, Board, PlayerKind, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(8, 8), Stone::Black)?;
//!
//! // AI responds as White
//! let mut white = create_player(PlayerKind::Medium, Stone::White)?;
//! let pos = white.get_move(&mut board)?;
//! board.place(pos, Stone::White)?;
//! assert!(!is_winning_move(&board, pos, Stone::White));
//! # Ok::<(), gomoku::GomokuError>(())
//! ```
//!
//! # Strength Tiers
//!
//! Every tier opens at the center and takes an immediate win.
//! 1. Very easy: random empty cell
//! 2. Easy: static score of every empty cell
//! 3. Medium: two-ply search near existing stones, blocks fives
//! 4. Hard: four-ply search with move ordering, blocks fives
//! 5. Very hard: threat-greedy choice, blocks fives and growing threes

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod player;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, TrialMove, DEFAULT_BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult, SearchType, Strategy};
pub use error::{GomokuError, Result};
pub use eval::Evaluator;
pub use player::{
    create_player, create_player_from_selector, create_player_with, AiPlayer, HumanPlayer,
    Player, PlayerKind,
};
pub use rules::{find_five_positions, is_winning_move};
