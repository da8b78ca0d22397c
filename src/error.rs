//! Error type shared by every module of the engine

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GomokuError>;

/// Everything that can go wrong while asking the engine for a move.
///
/// `OutOfRange` and `CellOccupied` guard external input: callers that validate
/// their input never see them. `NoLegalMove` means the board is full and the
/// surrounding loop should have declared a draw instead of asking for a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GomokuError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: i32, col: i32, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("unknown player kind: {0}")]
    UnknownPlayerKind(String),

    #[error("no legal move available")]
    NoLegalMove,

    #[error("board size {0} is not supported (expected 1..=64)")]
    InvalidBoardSize(usize),

    #[error("{0} is not a valid player id")]
    InvalidPlayer(u8),

    #[error("human player has no pending move")]
    NoPendingMove,
}
