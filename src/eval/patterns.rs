//! Scoring tables for the two evaluation heuristics
//!
//! Each AI tier picks one table; the numbers here are the defaults.

/// Run-length table for the line-potential heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWeights {
    /// Score for a run of `i` stones, `i` in 0..=5 (longer runs are capped at 5)
    pub run: [i32; 6],
    /// Opponent runs subtract at this percentage of their own-side value.
    /// 100 is a symmetric net evaluation.
    pub opponent_percent: i32,
}

impl LineWeights {
    pub const RUN_SCORES: [i32; 6] = [0, 0, 10, 100, 1_000, 10_000];

    #[inline]
    pub fn run_score(&self, len: usize) -> i32 {
        self.run[len.min(5)]
    }
}

impl Default for LineWeights {
    fn default() -> Self {
        Self {
            run: Self::RUN_SCORES,
            opponent_percent: 100,
        }
    }
}

/// Weights for the threat/priority heuristic.
///
/// Defense-biased: the opponent's potential winning rows cost ten times
/// what the player's own rows earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatWeights {
    /// Per empty cell where the player would complete five
    pub winning_row: i32,
    /// Per friendly pair within reach of a stone
    pub threat: i32,
    /// Per empty cell where the opponent would complete five
    pub opponent_winning_row: i32,
    /// Per opponent pair within reach of a stone
    pub opponent_threat: i32,
    /// Blocking priority while the opponent is not ahead on winning rows
    pub blocking_min: i32,
    /// Blocking priority while the opponent has more winning rows
    pub blocking_max: i32,
    /// Move bonus for a cell that sits next to an opponent pair
    pub blocking_bonus: i32,
}

impl Default for ThreatWeights {
    fn default() -> Self {
        Self {
            winning_row: 500,
            threat: 50,
            opponent_winning_row: 5_000,
            opponent_threat: 50,
            blocking_min: 10,
            blocking_max: 100,
            blocking_bonus: 100,
        }
    }
}
