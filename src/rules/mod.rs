//! Game rules for Gomoku
//!
//! Free-style rules: five or more in a row wins, no forbidden moves,
//! no captures.

pub mod win;

// Re-exports for convenient access
pub use win::{
    completes_five, count_direction, find_five_positions, has_five_in_row, is_winning_move,
    line_length_through, WIN_LENGTH,
};
