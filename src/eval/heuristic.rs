//! Heuristic evaluation function for Gomoku board positions
//!
//! One [`Evaluator`] type covers every tier. It is called at each leaf of
//! the search, so both heuristics only read the board.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::rules::{completes_five, count_direction, line_length_through};

use super::patterns::{LineWeights, ThreatWeights};

/// How far the threat scan looks along a ray
const THREAT_REACH: i32 = 3;

/// Static position scorer, parameterised by its weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluator {
    /// Sum of run-length scores, own runs minus opponent runs
    LinePotential(LineWeights),
    /// Potential winning rows, threats and blocking priority
    ThreatPriority(ThreatWeights),
}

impl Evaluator {
    /// Line-potential evaluator with the default run table
    pub fn line_potential() -> Self {
        Evaluator::LinePotential(LineWeights::default())
    }

    /// Threat/priority evaluator with the default weights
    pub fn threat_priority() -> Self {
        Evaluator::ThreatPriority(ThreatWeights::default())
    }

    /// Score `board` from `player`'s point of view. Larger is better.
    #[must_use]
    pub fn score(&self, board: &Board, player: Stone) -> i32 {
        match self {
            Evaluator::LinePotential(w) => line_potential(board, player, w),
            Evaluator::ThreatPriority(w) => threat_priority(board, player, w),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::line_potential()
    }
}

/// Net line-potential score for `player`.
pub fn line_potential(board: &Board, player: Stone, weights: &LineWeights) -> i32 {
    let mine = run_score(board, player, weights);
    let theirs = run_score(board, player.opponent(), weights);
    // Large boards push the scaled opponent term past i32
    let net = mine - theirs * i64::from(weights.opponent_percent) / 100;
    net.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// For every stone of `color` and each direction, score the run that
/// starts at that stone and walks forward.
fn run_score(board: &Board, color: Stone, weights: &LineWeights) -> i64 {
    board
        .stones(color)
        .map(|pos| {
            DIRECTIONS
                .iter()
                .map(|&(dr, dc)| {
                    i64::from(weights.run_score(1 + count_direction(board, pos, dr, dc, color)))
                })
                .sum::<i64>()
        })
        .sum()
}

/// Net threat/priority score for `player`.
pub fn threat_priority(board: &Board, player: Stone, weights: &ThreatWeights) -> i32 {
    let opponent = player.opponent();

    let my_rows = count_potential_winning_rows(board, player);
    let opp_rows = count_potential_winning_rows(board, opponent);
    let my_threats = count_threats(board, player);
    let opp_threats = count_threats(board, opponent);

    let blocking = if opp_rows > my_rows {
        weights.blocking_max
    } else {
        weights.blocking_min
    };

    my_rows * weights.winning_row + my_threats * weights.threat + blocking
        - opp_rows * weights.opponent_winning_row
        - opp_threats * weights.opponent_threat
}

/// Empty cells where a `player` stone would complete five in a row.
pub fn count_potential_winning_rows(board: &Board, player: Stone) -> i32 {
    board
        .empty_cells()
        .filter(|&pos| completes_five(board, pos, player))
        .count() as i32
}

/// Count pairs reachable from each `player` stone.
///
/// Along each of the 8 rays the next three cells are scanned; empty cells
/// are skipped, an opponent stone or the edge stops the scan, and seeing
/// two more friendly stones counts as one threat.
pub fn count_threats(board: &Board, player: Stone) -> i32 {
    board
        .stones(player)
        .map(|pos| {
            DIRECTIONS
                .iter()
                .flat_map(|&(dr, dc)| [(dr, dc), (-dr, -dc)])
                .filter(|&(dr, dc)| ray_has_pair(board, pos, dr, dc, player))
                .count() as i32
        })
        .sum()
}

fn ray_has_pair(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> bool {
    let mut count = 0;
    for i in 1..=THREAT_REACH {
        let Some(p) = board.offset(pos, dr * i, dc * i) else {
            return false;
        };
        match board.stone(p) {
            s if s == player => {
                count += 1;
                if count == 2 {
                    return true;
                }
            }
            Stone::Empty => {}
            _ => return false,
        }
    }
    false
}

/// Whether the line through `pos` would hold `len` cells if the opponent
/// played there, i.e. the cell joins `len - 1` opponent stones in a row.
///
/// Used for move bonuses and pre-emptive blocks: with `len == 3` the cell
/// touches an opponent pair, with `len == 4` an opponent three.
pub fn extends_opponent_line(board: &Board, pos: Pos, player: Stone, len: usize) -> bool {
    let opponent = player.opponent();
    opponent.is_player() && line_length_through(board, pos, opponent) >= len
}
