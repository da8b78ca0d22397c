//! One-move threat scans run before any search
//!
//! - Immediate win: a cell where the mover completes five
//! - Immediate block: the same scan from the opponent's side
//! - Line-extension block: a cell that would let the opponent grow a three
//!   into a four

use crate::board::{Board, Pos, Stone};
use crate::eval::extends_opponent_line;
use crate::rules::is_winning_move;

/// Opponent line length the pre-emptive block guards against
pub const OPEN_THREE_BLOCK_LEN: usize = 4;

/// Line length for the optional pair block and the pair bonus
pub const PAIR_BLOCK_LEN: usize = 3;

/// First empty cell, row-major, where `player` would complete five.
///
/// Each cell is tried with a [`TrialMove`](crate::board::TrialMove), so the
/// check is the same `is_winning_move` the game loop uses. The board is
/// unchanged on return.
pub fn find_winning_cell(board: &mut Board, player: Stone) -> Option<Pos> {
    if !player.is_player() {
        return None;
    }

    let empties: Vec<Pos> = board.empty_cells().collect();
    for pos in empties {
        let Ok(trial) = board.trial(pos, player) else {
            continue;
        };
        if is_winning_move(&trial, pos, player) {
            return Some(pos);
        }
    }
    None
}

/// Every empty cell where `player` would complete five, row-major.
pub fn find_winning_cells(board: &mut Board, player: Stone) -> Vec<Pos> {
    if !player.is_player() {
        return Vec::new();
    }

    let empties: Vec<Pos> = board.empty_cells().collect();
    empties
        .into_iter()
        .filter(|&pos| {
            board
                .trial(pos, player)
                .map(|trial| is_winning_move(&trial, pos, player))
                .unwrap_or(false)
        })
        .collect()
}

/// First of `moves` (in the given order) that joins `len - 1` opponent
/// stones in a row, i.e. the cell the opponent would play to reach `len`.
#[must_use]
pub fn find_line_extension_block(
    board: &Board,
    moves: &[Pos],
    mover: Stone,
    len: usize,
) -> Option<Pos> {
    moves
        .iter()
        .copied()
        .find(|&pos| board.is_empty(pos) && extends_opponent_line(board, pos, mover, len))
}
