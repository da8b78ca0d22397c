//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


use std::fmt;

use crate::error::{GomokuError, Result};

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, TrialMove};

/// Canonical board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Largest supported side length
pub const MAX_BOARD_SIZE: usize = 64;

/// Direction vectors for line checking (4 directions).
/// Scanning both ways along each covers all 8 rays.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Cell state. `Black` and `White` double as the two player ids (1 and 2);
/// id 0 is `Empty` and never names a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Numeric player id (0 for empty cells)
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    /// Player for a numeric id. 0 is reserved for empty cells.
    pub fn from_id(id: u8) -> Result<Stone> {
        match id {
            1 => Ok(Stone::Black),
            2 => Ok(Stone::White),
            other => Err(GomokuError::InvalidPlayer(other)),
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Empty => write!(f, "empty"),
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}

/// Position on the board, 1-indexed on both axes.
///
/// Ordering is row-major, which is also the order every scan of the
/// board visits cells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Storage index for a board of the given side length
    #[inline]
    pub(crate) fn to_index(self, size: usize) -> usize {
        (self.row as usize - 1) * size + (self.col as usize - 1)
    }

    #[inline]
    pub(crate) fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size + 1) as u8,
            col: (idx % size + 1) as u8,
        }
    }

    /// Chebyshev distance
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Squared Euclidean distance
    #[inline]
    pub fn distance_sq(self, other: Pos) -> i32 {
        let dr = i32::from(self.row) - i32::from(other.row);
        let dc = i32::from(self.col) - i32::from(other.col);
        dr * dr + dc * dc
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
