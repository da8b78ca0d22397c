//! Alpha-Beta search with iterative deepening and a time budget
//!
//! This module implements the search behind every search-based AI tier.
//! It uses explicit max/min minimax with alpha-beta pruning: the evaluator
//! is not symmetric between the two sides, so every leaf is scored from the
//! root mover's point of view instead of negating scores per ply.
//!
//! # Features
//!
//! - Depth counts the opponent replies searched below each root move
//! - Iterative deepening from depth 1 up to `max_depth`
//! - Time budget checked between completed depths (never mid-ply)
//! - Previous depth's best move is searched first at the next depth
//! - Internal nodes reuse the root's candidate set, skipping occupied cells
//! - Pruning can be switched off for plain minimax with identical scores
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::eval::Evaluator;
//! use gomoku::search::{active_points, Searcher};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(8, 8), Stone::Black)?;
//!
//! let candidates = active_points(&board, 2);
//! let mut searcher = Searcher::new(Evaluator::line_potential()).with_max_depth(1);
//! let result = searcher.search(&mut board, Stone::White, candidates)?;
//! println!("Best move: {} at depth {}", result.best_move, result.depth);
//! # Ok::<(), gomoku::GomokuError>(())
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::{GomokuError, Result};
use crate::eval::Evaluator;
use crate::rules::is_winning_move;

use super::movegen::order_by_evaluation;

/// Bound for the alpha-beta window; larger than any evaluator score
const INF: i32 = i32::MAX / 2;

/// Default search depth: plies searched below the root move
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// Default wall-clock budget for one decision
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(15_000);

/// Result of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move of the last completed depth
    pub best_move: Pos,
    /// Score of that move from the mover's point of view
    pub score: i32,
    /// Last depth completed in iterative deepening
    pub depth: u8,
    /// Total nodes visited across all depths
    pub nodes: u64,
}

/// Iterative-deepening alpha-beta searcher.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    max_depth: u8,
    time_budget: Duration,
    move_ordering: bool,
    pruning: bool,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher scoring leaves with `evaluator`.
    ///
    /// Defaults: depth 3, 15 second budget, no move ordering, pruning on.
    #[must_use]
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            max_depth: DEFAULT_MAX_DEPTH,
            time_budget: DEFAULT_TIME_BUDGET,
            move_ordering: false,
            pruning: true,
            nodes: 0,
        }
    }

    /// Set the deepest iteration. Depth `d` searches `d` plies below each
    /// root move; 0 scores the root moves statically.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Order root candidates by static evaluation before the first depth.
    #[must_use]
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    /// Disable to get plain minimax over the same tree.
    #[must_use]
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search for `mover`'s best move among `candidates`.
    ///
    /// Runs depth 1, 2, ... up to `max_depth` (just depth 0 when that is 0),
    /// stopping early once the time budget is spent after a completed depth.
    /// The board is unchanged on return.
    ///
    /// # Errors
    /// `NoLegalMove` when no candidate is an empty cell.
    pub fn search(
        &mut self,
        board: &mut Board,
        mover: Stone,
        candidates: Vec<Pos>,
    ) -> Result<SearchResult> {
        self.nodes = 0;

        let mut candidates: Vec<Pos> = candidates
            .into_iter()
            .filter(|&pos| board.get(pos) == Ok(Stone::Empty))
            .collect();
        if candidates.is_empty() {
            return Err(GomokuError::NoLegalMove);
        }
        if self.move_ordering {
            candidates = order_by_evaluation(board, &candidates, mover, &self.evaluator);
        }

        let start = Instant::now();
        let mut best: Option<SearchResult> = None;

        let first_depth = self.max_depth.min(1);
        for depth in first_depth..=self.max_depth {
            let depth_start = Instant::now();
            let Some((pos, score)) = self.search_depth(board, mover, &candidates, depth) else {
                break;
            };

            best = Some(SearchResult {
                best_move: pos,
                score,
                depth,
                nodes: self.nodes,
            });
            debug!(
                "depth {} completed in {} ms: best {} score {} ({} nodes)",
                depth,
                depth_start.elapsed().as_millis(),
                pos,
                score,
                self.nodes
            );

            // Search the current best first at the next depth
            if let Some(i) = candidates.iter().position(|&p| p == pos) {
                candidates[..=i].rotate_right(1);
            }

            if depth < self.max_depth && start.elapsed() >= self.time_budget {
                debug!(
                    "time budget of {} ms spent after depth {}",
                    self.time_budget.as_millis(),
                    depth
                );
                break;
            }
        }

        best.ok_or(GomokuError::NoLegalMove)
    }

    /// One full-window iteration: every root move followed by `depth`
    /// plies. Returns the first candidate holding the maximum score.
    fn search_depth(
        &mut self,
        board: &mut Board,
        mover: Stone,
        candidates: &[Pos],
        depth: u8,
    ) -> Option<(Pos, i32)> {
        let mut alpha = -INF;
        let mut best: Option<(Pos, i32)> = None;

        for &pos in candidates {
            let Ok(mut trial) = board.trial(pos, mover) else {
                continue;
            };
            self.nodes += 1;

            let score =
                self.alpha_beta(&mut trial, mover, candidates, pos, depth, false, alpha, INF);

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
            if self.pruning {
                alpha = alpha.max(score);
            }
        }

        best
    }

    /// Minimax with alpha-beta below the root.
    ///
    /// `last` is the move that led here; if it won, the node is terminal.
    /// Scores are always from `root`'s point of view.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        root: Stone,
        candidates: &[Pos],
        last: Pos,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let last_player = if maximizing { root.opponent() } else { root };
        if depth == 0 || is_winning_move(board, last, last_player) {
            return self.evaluator.score(board, root);
        }

        let side = if maximizing { root } else { root.opponent() };
        let mut best: Option<i32> = None;

        for &pos in candidates {
            let Ok(mut trial) = board.trial(pos, side) else {
                continue;
            };
            self.nodes += 1;

            let score = self.alpha_beta(
                &mut trial,
                root,
                candidates,
                pos,
                depth - 1,
                !maximizing,
                alpha,
                beta,
            );

            if maximizing {
                best = Some(best.map_or(score, |b| b.max(score)));
                alpha = alpha.max(score);
                if self.pruning && beta <= alpha {
                    break;
                }
            } else {
                best = Some(best.map_or(score, |b| b.min(score)));
                beta = beta.min(score);
                if self.pruning && alpha >= beta {
                    break;
                }
            }
        }

        // No empty candidate left
        best.unwrap_or_else(|| self.evaluator.score(board, root))
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Evaluator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::movegen::{active_points, exhaustive};

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place(Pos::new(r, c), stone).unwrap();
        }
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 4), (8, 5), (8, 6), (8, 7)], Stone::Black);
        place_all(&mut board, &[(9, 4), (9, 5), (9, 6)], Stone::White);

        let mut searcher = Searcher::default().with_max_depth(1);
        let moves = active_points(&board, 2);
        let result = searcher.search(&mut board, Stone::Black, moves).unwrap();

        assert!(
            result.best_move == Pos::new(8, 3) || result.best_move == Pos::new(8, 8),
            "expected a winning cell, got {}",
            result.best_move
        );
        assert!(result.score >= 10_000);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 4), (8, 5), (8, 6), (8, 7)], Stone::White);
        place_all(&mut board, &[(8, 3), (10, 10)], Stone::Black);

        // One reply ply is enough to see White completing five
        let mut searcher = Searcher::default().with_max_depth(1);
        let moves = active_points(&board, 2);
        let result = searcher.search(&mut board, Stone::Black, moves).unwrap();

        assert_eq!(result.best_move, Pos::new(8, 8));
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 8), (9, 9)], Stone::Black);
        place_all(&mut board, &[(8, 9), (7, 7)], Stone::White);
        let before = board.clone();

        let mut searcher = Searcher::default();
        let moves = active_points(&board, 2);
        searcher.search(&mut board, Stone::Black, moves).unwrap();

        assert_eq!(board, before);
        assert!(searcher.nodes() > 0);
    }

    #[test]
    fn test_pruning_preserves_score() {
        let mut board = Board::with_size(9).unwrap();
        place_all(&mut board, &[(5, 5), (4, 6), (6, 3)], Stone::Black);
        place_all(&mut board, &[(5, 6), (4, 4), (6, 6)], Stone::White);
        let moves = active_points(&board, 1);

        let mut pruned = Searcher::default().with_max_depth(2);
        let mut plain = Searcher::default().with_max_depth(2).with_pruning(false);
        let a = pruned.search(&mut board, Stone::White, moves.clone()).unwrap();
        let b = plain.search(&mut board, Stone::White, moves).unwrap();

        assert_eq!(a.score, b.score);
        assert_eq!(a.best_move, b.best_move);
        assert!(a.nodes < b.nodes, "pruning should cut nodes: {} vs {}", a.nodes, b.nodes);
    }

    #[test]
    fn test_search_no_candidates() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Stone::Black).unwrap();

        let mut searcher = Searcher::default();
        assert_eq!(
            searcher.search(&mut board, Stone::White, Vec::new()),
            Err(GomokuError::NoLegalMove)
        );
        // Occupied candidates are discarded
        assert_eq!(
            searcher.search(&mut board, Stone::White, vec![Pos::new(8, 8)]),
            Err(GomokuError::NoLegalMove)
        );
    }

    #[test]
    fn test_depth_one_searches_reply() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Stone::Black).unwrap();
        let moves = active_points(&board, 2);
        assert_eq!(moves.len(), 24);

        let mut plain = Searcher::default().with_max_depth(1).with_pruning(false);
        let result = plain.search(&mut board, Stone::White, moves.clone()).unwrap();
        // Every root move plus each of the 23 replies below it
        assert_eq!(result.nodes, 24 + 24 * 23);

        let mut shallow = Searcher::default().with_max_depth(0);
        let result = shallow.search(&mut board, Stone::White, moves).unwrap();
        assert_eq!(result.depth, 0);
        assert_eq!(result.nodes, 24);
    }

    #[test]
    fn test_time_budget_stops_after_first_depth() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Stone::Black).unwrap();

        let mut searcher = Searcher::default().with_time_budget(Duration::ZERO);
        let moves = active_points(&board, 2);
        let result = searcher.search(&mut board, Stone::White, moves).unwrap();
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_move_ordering_keeps_result_legal() {
        let mut board = Board::with_size(7).unwrap();
        place_all(&mut board, &[(4, 4), (4, 5)], Stone::Black);
        board.place(Pos::new(3, 3), Stone::White).unwrap();
        let before = board.clone();

        let mut searcher = Searcher::default()
            .with_max_depth(1)
            .with_move_ordering(true);
        let moves = exhaustive(&board);
        let result = searcher.search(&mut board, Stone::White, moves).unwrap();

        assert!(board.is_empty(result.best_move));
        assert_eq!(board, before);
    }
}
