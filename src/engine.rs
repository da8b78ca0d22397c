//! Main AI Engine shared by every automated tier
//!
//! Each tier is the same pipeline with a different [`EngineConfig`]. The
//! pipeline follows a priority system:
//!
//! 1. **Opening**: on an empty board play the center
//! 2. **Immediate win**: any move that completes five
//! 3. **Defense**: block the opponent's immediate win (tiers with blocking)
//! 4. **Strategy**: random choice, alpha-beta search or threat-greedy choice
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::medium().with_seed(7));
//! let mut board = Board::new();
//! board.place(Pos::new(8, 8), Stone::Black)?;
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::White)?;
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! # Ok::<(), gomoku::GomokuError>(())
//! ```

use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::error::{GomokuError, Result};
use crate::eval::{extends_opponent_line, Evaluator};
use crate::player::PlayerKind;
use crate::search::{
    find_line_extension_block, find_winning_cell, generate, order_by_proximity, CandidateMode,
    SearchResult, Searcher, DEFAULT_MAX_DEPTH, DEFAULT_TIME_BUDGET, OPEN_THREE_BLOCK_LEN,
    PAIR_BLOCK_LEN,
};

/// How a tier picks its move once the shortcuts found nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniformly random empty cell
    Random,
    /// Iterative-deepening alpha-beta search
    AlphaBeta,
    /// Best single placement under the threat/priority evaluator
    ThreatGreedy,
}

/// Type of decision that produced the result.
///
/// This indicates which phase of the pipeline found the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Center of an empty board
    Opening,
    /// Move completes five in a row
    ImmediateWin,
    /// Block of the opponent's winning cell or growing three
    Defense,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Random choice
    Random,
    /// Threat-greedy choice
    Greedy,
}

/// Result of a move decision with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move
    pub best_move: Pos,
    /// Score of the move for the mover (0 for shortcuts and random moves)
    pub score: i32,
    /// Phase that chose this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn shortcut(pos: Pos, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Per-tier engine settings.
///
/// Start from a preset ([`EngineConfig::for_kind`] or a named tier) and
/// adjust with the `with_*` setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub strategy: Strategy,
    /// Candidate cells for search and greedy strategies
    pub candidates: CandidateMode,
    pub evaluator: Evaluator,
    /// Plies searched below each root move (0 scores root moves statically)
    pub max_depth: u8,
    /// Checked between completed depths
    pub time_budget: Duration,
    /// Order root candidates by static evaluation
    pub move_ordering: bool,
    /// Alpha-beta cutoffs; off gives plain minimax
    pub pruning: bool,
    /// Block the opponent's immediate win before the strategy runs
    pub block_threats: bool,
    /// Threat-greedy only: block any cell that joins an opponent pair
    /// before scoring candidates
    pub block_pairs: bool,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl EngineConfig {
    fn base(strategy: Strategy) -> Self {
        Self {
            strategy,
            candidates: CandidateMode::localized(),
            evaluator: Evaluator::line_potential(),
            max_depth: DEFAULT_MAX_DEPTH,
            time_budget: DEFAULT_TIME_BUDGET,
            move_ordering: false,
            pruning: true,
            block_threats: true,
            block_pairs: false,
            seed: None,
        }
    }

    /// Random empty cell; only the center and immediate-win shortcuts apply.
    pub fn very_easy() -> Self {
        Self {
            candidates: CandidateMode::Exhaustive,
            max_depth: 0,
            block_threats: false,
            ..Self::base(Strategy::Random)
        }
    }

    /// Static score of every empty cell, no reply searched, no blocking.
    pub fn easy() -> Self {
        Self {
            candidates: CandidateMode::Exhaustive,
            max_depth: 0,
            block_threats: false,
            ..Self::base(Strategy::AlphaBeta)
        }
    }

    /// Active points searched one reply deep.
    pub fn medium() -> Self {
        Self {
            max_depth: 1,
            ..Self::base(Strategy::AlphaBeta)
        }
    }

    /// Evaluation-ordered active points searched three replies deep.
    pub fn hard() -> Self {
        Self {
            move_ordering: true,
            ..Self::base(Strategy::AlphaBeta)
        }
    }

    /// Threat-greedy choice over proximity-ordered active points.
    pub fn very_hard() -> Self {
        Self {
            evaluator: Evaluator::threat_priority(),
            max_depth: 0,
            ..Self::base(Strategy::ThreatGreedy)
        }
    }

    /// Preset for an automated player kind; `None` for humans.
    pub fn for_kind(kind: PlayerKind) -> Option<Self> {
        match kind {
            PlayerKind::Human => None,
            PlayerKind::VeryEasy => Some(Self::very_easy()),
            PlayerKind::Easy => Some(Self::easy()),
            PlayerKind::Medium => Some(Self::medium()),
            PlayerKind::Hard => Some(Self::hard()),
            PlayerKind::VeryHard => Some(Self::very_hard()),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    #[must_use]
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    #[must_use]
    pub fn with_candidates(mut self, mode: CandidateMode) -> Self {
        self.candidates = mode;
        self
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    #[must_use]
    pub fn with_block_threats(mut self, enabled: bool) -> Self {
        self.block_threats = enabled;
        self
    }

    #[must_use]
    pub fn with_block_pairs(mut self, enabled: bool) -> Self {
        self.block_pairs = enabled;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::hard()
    }
}

/// Main AI Engine for Gomoku.
///
/// Holds the tier configuration and the random generator; everything else
/// lives inside one [`get_move_with_stats`](AIEngine::get_move_with_stats)
/// call.
pub struct AIEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl AIEngine {
    /// Create an engine with the Hard preset.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine for `config`, seeding the RNG from `config.seed`.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for `color`.
    ///
    /// Convenience wrapper over [`get_move_with_stats`](Self::get_move_with_stats).
    pub fn get_move(&mut self, board: &mut Board, color: Stone) -> Result<Pos> {
        self.get_move_with_stats(board, color).map(|r| r.best_move)
    }

    /// Choose a move for `color` and report how it was found.
    ///
    /// The board is used as scratch space for trial placements and is
    /// unchanged on return.
    ///
    /// # Errors
    ///
    /// * `InvalidPlayer` if `color` is `Stone::Empty`
    /// * `NoLegalMove` if the board has no empty cell
    pub fn get_move_with_stats(&mut self, board: &mut Board, color: Stone) -> Result<MoveResult> {
        if !color.is_player() {
            return Err(GomokuError::InvalidPlayer(color.id()));
        }
        if board.is_full() {
            return Err(GomokuError::NoLegalMove);
        }

        let start = Instant::now();

        // 1. Opening
        if board.is_board_empty() {
            let center = board.center();
            trace!("{} opens at the center {}", color, center);
            return Ok(MoveResult::shortcut(center, SearchType::Opening, elapsed_ms(start)));
        }

        // 2. Immediate win
        if let Some(pos) = find_winning_cell(board, color) {
            trace!("{} wins at {}", color, pos);
            return Ok(MoveResult::shortcut(pos, SearchType::ImmediateWin, elapsed_ms(start)));
        }

        // 3. Opponent's immediate win must be blocked
        if self.config.block_threats {
            if let Some(pos) = find_winning_cell(board, color.opponent()) {
                trace!("{} blocks a five at {}", color, pos);
                return Ok(MoveResult::shortcut(pos, SearchType::Defense, elapsed_ms(start)));
            }
        }

        // 4. Strategy
        let result = match self.config.strategy {
            Strategy::Random => self.random_move(board, start)?,
            Strategy::AlphaBeta => self.search_move(board, color, start)?,
            Strategy::ThreatGreedy => self.greedy_move(board, color, start)?,
        };

        debug!(
            "{} plays {} via {:?} (score {}, {} nodes, {} ms)",
            color, result.best_move, result.search_type, result.score, result.nodes, result.time_ms
        );
        Ok(result)
    }

    fn random_move(&mut self, board: &Board, start: Instant) -> Result<MoveResult> {
        let empties: Vec<Pos> = board.empty_cells().collect();
        let pos = empties
            .choose(&mut self.rng)
            .copied()
            .ok_or(GomokuError::NoLegalMove)?;
        Ok(MoveResult::shortcut(pos, SearchType::Random, elapsed_ms(start)))
    }

    fn search_move(&mut self, board: &mut Board, color: Stone, start: Instant) -> Result<MoveResult> {
        let candidates = generate(board, self.config.candidates);
        let mut searcher = Searcher::new(self.config.evaluator)
            .with_max_depth(self.config.max_depth)
            .with_time_budget(self.config.time_budget)
            .with_move_ordering(self.config.move_ordering)
            .with_pruning(self.config.pruning);

        let result = searcher.search(board, color, candidates)?;
        Ok(MoveResult::from_alphabeta(result, elapsed_ms(start)))
    }

    /// Pre-emptive block of a growing three (and, with `block_pairs`, of a
    /// pair), otherwise the candidate with the best threat/priority score
    /// after placement.
    fn greedy_move(&mut self, board: &mut Board, color: Stone, start: Instant) -> Result<MoveResult> {
        let opponent = color.opponent();
        let candidates = generate(board, self.config.candidates);
        let ordered = order_by_proximity(board, &candidates, opponent);

        if self.config.block_threats {
            if let Some(pos) = find_line_extension_block(board, &ordered, color, OPEN_THREE_BLOCK_LEN) {
                trace!("{} blocks a growing three at {}", color, pos);
                return Ok(MoveResult::shortcut(pos, SearchType::Defense, elapsed_ms(start)));
            }
        }

        if self.config.block_pairs {
            if let Some(pos) = find_line_extension_block(board, &ordered, color, PAIR_BLOCK_LEN) {
                trace!("{} blocks a pair at {}", color, pos);
                return Ok(MoveResult::shortcut(pos, SearchType::Defense, elapsed_ms(start)));
            }
        }

        let bonus = match self.config.evaluator {
            Evaluator::ThreatPriority(w) => w.blocking_bonus,
            Evaluator::LinePotential(_) => 0,
        };

        let mut best: Option<(Pos, i32)> = None;
        let mut nodes = 0;
        for &pos in &ordered {
            let extends = extends_opponent_line(board, pos, color, PAIR_BLOCK_LEN);
            let Ok(trial) = board.trial(pos, color) else {
                continue;
            };
            nodes += 1;

            let mut score = self.config.evaluator.score(&trial, color);
            if extends {
                score += bonus;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(GomokuError::NoLegalMove)?;
        Ok(MoveResult {
            best_move: pos,
            score,
            search_type: SearchType::Greedy,
            time_ms: elapsed_ms(start),
            nodes,
        })
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place(Pos::new(r, c), stone).unwrap();
        }
    }

    fn all_presets() -> Vec<EngineConfig> {
        vec![
            EngineConfig::very_easy(),
            EngineConfig::easy(),
            EngineConfig::medium(),
            EngineConfig::hard(),
            EngineConfig::very_hard(),
        ]
    }

    #[test]
    fn test_engine_empty_board() {
        for config in all_presets() {
            let mut engine = AIEngine::with_config(config.with_seed(1));
            let mut board = Board::new();
            let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();
            assert_eq!(result.best_move, Pos::new(8, 8));
            assert_eq!(result.search_type, SearchType::Opening);
        }
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        for config in all_presets() {
            let mut board = Board::new();
            place_all(&mut board, &[(9, 1), (9, 2), (9, 3), (9, 4)], Stone::Black);
            place_all(&mut board, &[(10, 1), (10, 2), (10, 3)], Stone::White);

            let mut engine = AIEngine::with_config(config.with_seed(3));
            let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();

            assert_eq!(result.best_move, Pos::new(9, 5));
            assert_eq!(result.search_type, SearchType::ImmediateWin);
        }
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 1), (9, 2), (9, 3), (9, 4)], Stone::White);
        board.place(Pos::new(11, 6), Stone::Black).unwrap();

        for config in [EngineConfig::medium(), EngineConfig::hard(), EngineConfig::very_hard()] {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();
            assert_eq!(result.best_move, Pos::new(9, 5));
            assert_eq!(result.search_type, SearchType::Defense);
        }
    }

    #[test]
    fn test_easy_does_not_block() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 1), (9, 2), (9, 3), (9, 4)], Stone::White);
        board.place(Pos::new(11, 6), Stone::Black).unwrap();

        let mut engine = AIEngine::with_config(EngineConfig::easy());
        let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();
        assert_eq!(result.search_type, SearchType::AlphaBeta);
    }

    #[test]
    fn test_engine_full_board() {
        let mut board = Board::with_size(2).unwrap();
        place_all(&mut board, &[(1, 1), (2, 2)], Stone::Black);
        place_all(&mut board, &[(1, 2), (2, 1)], Stone::White);

        for config in all_presets() {
            let mut engine = AIEngine::with_config(config);
            assert_eq!(
                engine.get_move(&mut board, Stone::Black),
                Err(GomokuError::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_engine_rejects_empty_color() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        assert_eq!(
            engine.get_move(&mut board, Stone::Empty),
            Err(GomokuError::InvalidPlayer(0))
        );
    }

    #[test]
    fn test_engine_leaves_board_unchanged() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 8), (7, 9)], Stone::Black);
        place_all(&mut board, &[(8, 9), (9, 7)], Stone::White);
        let before = board.clone();

        for config in all_presets() {
            let mut engine = AIEngine::with_config(config.with_seed(11));
            let pos = engine.get_move(&mut board, Stone::Black).unwrap();
            assert!(board.is_empty(pos));
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Stone::Black).unwrap();

        let mut a = AIEngine::with_config(EngineConfig::very_easy().with_seed(42));
        let mut b = AIEngine::with_config(EngineConfig::very_easy().with_seed(42));
        for _ in 0..5 {
            let ra = a.get_move_with_stats(&mut board, Stone::White).unwrap();
            let rb = b.get_move_with_stats(&mut board, Stone::White).unwrap();
            assert_eq!(ra.best_move, rb.best_move);
            assert_eq!(ra.search_type, SearchType::Random);
        }
    }

    #[test]
    fn test_very_hard_blocks_growing_three() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 6), (8, 7), (8, 8)], Stone::White);
        board.place(Pos::new(10, 10), Stone::Black).unwrap();

        let mut engine = AIEngine::with_config(EngineConfig::very_hard());
        let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();

        assert!(
            result.best_move == Pos::new(8, 5) || result.best_move == Pos::new(8, 9),
            "expected a block at an end of the three, got {}",
            result.best_move
        );
        assert_eq!(result.search_type, SearchType::Defense);
    }

    #[test]
    fn test_very_hard_pair_block() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 7), (8, 8)], Stone::White);
        board.place(Pos::new(3, 3), Stone::Black).unwrap();

        let mut engine = AIEngine::with_config(EngineConfig::very_hard().with_block_pairs(true));
        let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();
        assert!(
            result.best_move == Pos::new(8, 6) || result.best_move == Pos::new(8, 9),
            "expected a block at an end of the pair, got {}",
            result.best_move
        );
        assert_eq!(result.search_type, SearchType::Defense);

        let mut engine = AIEngine::with_config(EngineConfig::very_hard());
        let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();
        assert_eq!(result.search_type, SearchType::Greedy);
    }

    #[test]
    fn test_very_hard_greedy_choice() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 8), (9, 9)], Stone::Black);
        board.place(Pos::new(3, 3), Stone::White).unwrap();

        let mut engine = AIEngine::with_config(EngineConfig::very_hard());
        let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();
        assert_eq!(result.search_type, SearchType::Greedy);
        assert!(board.is_empty(result.best_move));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_hard_reports_search_stats() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 8), (8, 9)], Stone::Black);
        board.place(Pos::new(9, 8), Stone::White).unwrap();

        let mut engine = AIEngine::with_config(EngineConfig::hard().with_max_depth(1));
        let result = engine.get_move_with_stats(&mut board, Stone::White).unwrap();
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        // Replies below the root moves are counted too
        let candidates = generate(&board, CandidateMode::localized()).len() as u64;
        assert!(result.nodes > candidates, "{} nodes for {} candidates", result.nodes, candidates);
    }

    #[test]
    fn test_config_presets() {
        assert_eq!(EngineConfig::for_kind(PlayerKind::Human), None);
        assert_eq!(EngineConfig::for_kind(PlayerKind::Hard), Some(EngineConfig::hard()));
        assert_eq!(EngineConfig::hard().max_depth, 3);
        assert!(EngineConfig::hard().move_ordering);
        assert_eq!(EngineConfig::medium().max_depth, 1);
        assert_eq!(EngineConfig::easy().max_depth, 0);
        assert!(!EngineConfig::very_hard().block_pairs);
        assert!(!EngineConfig::easy().block_threats);
        assert_eq!(EngineConfig::easy().candidates, CandidateMode::Exhaustive);
        assert_eq!(EngineConfig::very_hard().strategy, Strategy::ThreatGreedy);
    }
}
