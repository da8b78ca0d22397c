//! Win condition checking
//!
//! A game is won by five or more stones of one color in a row along any
//! of the four directions. Both the game loop and the search call
//! [`is_winning_move`], so they can never disagree about a terminal position.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Check whether the stone at `pos` completes five in a row for `player`.
///
/// Scans a 9-cell window (offsets -4..=4) along each direction. Off-board
/// cells and cells not owned by `player` reset the run counter; the scan
/// carries on so a run can form later in the window. Any run of five in
/// that window necessarily covers `pos`.
pub fn is_winning_move(board: &Board, pos: Pos, player: Stone) -> bool {
    if !player.is_player() {
        return false;
    }
    let reach = (WIN_LENGTH - 1) as i32;
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 0;
        for i in -reach..=reach {
            match board.offset(pos, dr * i, dc * i) {
                Some(p) if board.stone(p) == player => {
                    count += 1;
                    if count == WIN_LENGTH {
                        return true;
                    }
                }
                _ => count = 0,
            }
        }
    }
    false
}

/// Consecutive `player` stones starting next to `pos` and walking `(dr, dc)`.
///
/// The cell at `pos` itself is not counted.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> usize {
    let mut count = 0;
    let mut step = 1;
    while let Some(p) = board.offset(pos, dr * step, dc * step) {
        if board.stone(p) != player {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Longest line through `pos` if it held a `player` stone, over all directions.
pub fn line_length_through(board: &Board, pos: Pos, player: Stone) -> usize {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            1 + count_direction(board, pos, dr, dc, player)
                + count_direction(board, pos, -dr, -dc, player)
        })
        .max()
        .unwrap_or(1)
}

/// Whether a `player` stone at `pos` makes five or more in a row.
///
/// Works for empty cells (would this placement win?) as well as owned ones,
/// where it agrees with [`is_winning_move`].
#[inline]
pub fn completes_five(board: &Board, pos: Pos, player: Stone) -> bool {
    player.is_player() && line_length_through(board, pos, player) >= WIN_LENGTH
}

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// Find the positions of a 5-in-a-row if exists
///
/// Returns the whole line (5 or more positions) in scan order.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    for pos in board.stones(stone) {
        for &(dr, dc) in &DIRECTIONS {
            // Only start from the first stone of a line
            if board
                .offset(pos, -dr, -dc)
                .is_some_and(|prev| board.stone(prev) == stone)
            {
                continue;
            }

            let mut line = vec![pos];
            let mut step = 1;
            while let Some(next) = board.offset(pos, dr * step, dc * step) {
                if board.stone(next) != stone {
                    break;
                }
                line.push(next);
                step += 1;
            }

            if line.len() >= WIN_LENGTH {
                return Some(line);
            }
        }
    }
    None
}
