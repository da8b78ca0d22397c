//! Candidate move generation and ordering
//!
//! Full-board search branches N² ways per ply, which stops being
//! affordable after a couple of plies on 15x15. Localized generation keeps
//! only empty cells near existing stones (the "active points").

use crate::board::{Board, Pos, Stone};
use crate::eval::Evaluator;

/// Chebyshev radius of the active point set
pub const ACTIVE_RADIUS: u8 = 2;

/// Which empty cells a search considers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateMode {
    /// Every empty cell
    Exhaustive,
    /// Empty cells within `radius` of any stone; the center on an empty board
    Localized { radius: u8 },
}

impl CandidateMode {
    pub fn localized() -> Self {
        CandidateMode::Localized {
            radius: ACTIVE_RADIUS,
        }
    }
}

impl Default for CandidateMode {
    fn default() -> Self {
        Self::localized()
    }
}

/// Candidates for `mode`, row-major.
#[must_use]
pub fn generate(board: &Board, mode: CandidateMode) -> Vec<Pos> {
    match mode {
        CandidateMode::Exhaustive => exhaustive(board),
        CandidateMode::Localized { .. } if board.is_board_empty() => vec![board.center()],
        CandidateMode::Localized { radius } => active_points(board, radius),
    }
}

/// Every empty cell, row-major
#[must_use]
pub fn exhaustive(board: &Board) -> Vec<Pos> {
    board.empty_cells().collect()
}

/// Empty cells within Chebyshev `radius` of any stone, row-major, no duplicates.
#[must_use]
pub fn active_points(board: &Board, radius: u8) -> Vec<Pos> {
    let size = board.size();
    let mut near = vec![false; size * size];
    let radius = i32::from(radius);

    for pos in board.occupied() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(p) = board.offset(pos, dr, dc) {
                    near[p.to_index(size)] = true;
                }
            }
        }
    }

    board
        .empty_cells()
        .filter(|p| near[p.to_index(size)])
        .collect()
}

/// Squared distance to the geometric center, in half-cell units so it stays integral.
#[inline]
fn center_distance(size: usize, pos: Pos) -> i32 {
    let mid = size as i32 + 1;
    let dr = 2 * i32::from(pos.row) - mid;
    let dc = 2 * i32::from(pos.col) - mid;
    dr * dr + dc * dc
}

/// Order moves best-first by the static score after placing `mover`'s stone.
///
/// Ties go to the cell closer to the center. The board is unchanged on return.
pub fn order_by_evaluation(
    board: &mut Board,
    moves: &[Pos],
    mover: Stone,
    evaluator: &Evaluator,
) -> Vec<Pos> {
    let size = board.size();
    let mut scored = Vec::with_capacity(moves.len());

    for &pos in moves {
        let Ok(trial) = board.trial(pos, mover) else {
            continue;
        };
        let score = evaluator.score(&trial, mover);
        scored.push((pos, score, center_distance(size, pos)));
    }

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    scored.into_iter().map(|(pos, _, _)| pos).collect()
}

/// Order moves by distance to the nearest `opponent` stone, closest first.
///
/// Ties (and boards without opponent stones) fall back to center distance.
#[must_use]
pub fn order_by_proximity(board: &Board, moves: &[Pos], opponent: Stone) -> Vec<Pos> {
    let size = board.size();
    let targets: Vec<Pos> = board.stones(opponent).collect();

    let mut ordered = moves.to_vec();
    ordered.sort_by_key(|&pos| {
        let nearest = targets
            .iter()
            .map(|&t| pos.distance_sq(t))
            .min()
            .unwrap_or(i32::MAX);
        (nearest, center_distance(size, pos))
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustive_row_major() {
        let mut board = Board::with_size(3).unwrap();
        board.place(Pos::new(1, 2), Stone::Black).unwrap();
        let moves = exhaustive(&board);
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[0], Pos::new(1, 1));
        assert_eq!(moves[1], Pos::new(1, 3));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_localized_empty_board_is_center() {
        let board = Board::new();
        assert_eq!(generate(&board, CandidateMode::localized()), vec![Pos::new(8, 8)]);
        assert_eq!(generate(&board, CandidateMode::Exhaustive).len(), 225);
    }

    #[test]
    fn test_active_points_radius() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Stone::Black).unwrap();

        let moves = active_points(&board, 2);
        // 5x5 square minus the occupied center
        assert_eq!(moves.len(), 24);
        assert!(moves.iter().all(|&p| p.chebyshev(Pos::new(8, 8)) <= 2));
        assert!(!moves.contains(&Pos::new(8, 8)));
    }

    #[test]
    fn test_active_points_clipped_at_corner() {
        let mut board = Board::new();
        board.place(Pos::new(1, 1), Stone::White).unwrap();
        assert_eq!(active_points(&board, 2).len(), 8);
    }

    #[test]
    fn test_active_points_no_duplicates() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Stone::Black).unwrap();
        board.place(Pos::new(8, 9), Stone::White).unwrap();
        let moves = active_points(&board, 2);
        // 5x6 rectangle minus two stones
        assert_eq!(moves.len(), 28);
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_order_by_evaluation_prefers_extension() {
        let mut board = Board::new();
        board.place(Pos::new(8, 7), Stone::Black).unwrap();
        board.place(Pos::new(8, 8), Stone::Black).unwrap();
        let before = board.clone();

        let moves = active_points(&board, 1);
        let ordered = order_by_evaluation(&mut board, &moves, Stone::Black, &Evaluator::line_potential());

        assert_eq!(board, before);
        assert_eq!(ordered.len(), moves.len());
        // Both ends make a three; (8,9) is nearer the center
        assert_eq!(ordered[0], Pos::new(8, 9));
        assert_eq!(ordered[1], Pos::new(8, 6));
    }

    #[test]
    fn test_order_ties_break_toward_center() {
        let mut board = Board::new();
        let moves = vec![Pos::new(1, 1), Pos::new(8, 8), Pos::new(15, 15)];
        let ordered = order_by_evaluation(&mut board, &moves, Stone::Black, &Evaluator::line_potential());
        assert_eq!(ordered[0], Pos::new(8, 8));
    }

    #[test]
    fn test_order_by_proximity() {
        let mut board = Board::new();
        board.place(Pos::new(3, 3), Stone::White).unwrap();
        let moves = vec![Pos::new(10, 10), Pos::new(4, 4), Pos::new(3, 5)];
        let ordered = order_by_proximity(&board, &moves, Stone::White);
        assert_eq!(ordered, vec![Pos::new(4, 4), Pos::new(3, 5), Pos::new(10, 10)]);
    }
}
