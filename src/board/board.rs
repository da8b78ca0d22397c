//! Board structure and scoped trial moves

use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::{GomokuError, Result};

/// Square game board, one bitboard per color.
///
/// The side length is fixed at construction. Coordinates are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty 15x15 board
    pub fn new() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty board with side length `size` (1..=64)
    pub fn with_size(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GomokuError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            black: Bitboard::new(size * size),
            white: Bitboard::new(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether signed 1-indexed coordinates fall on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 1 && row <= n && col >= 1 && col <= n
    }

    /// Position `(dr, dc)` away from `pos`, if it is on the board
    #[inline]
    pub fn offset(&self, pos: Pos, dr: i32, dc: i32) -> Option<Pos> {
        let r = i32::from(pos.row) + dr;
        let c = i32::from(pos.col) + dc;
        if self.contains(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    fn check(&self, pos: Pos) -> Result<()> {
        if self.contains(i32::from(pos.row), i32::from(pos.col)) {
            Ok(())
        } else {
            Err(GomokuError::OutOfRange {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
                size: self.size,
            })
        }
    }

    /// Stone at an already validated position
    #[inline]
    pub fn stone(&self, pos: Pos) -> Stone {
        debug_assert!(self.contains(i32::from(pos.row), i32::from(pos.col)));
        let idx = pos.to_index(self.size);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Get stone at position
    pub fn get(&self, pos: Pos) -> Result<Stone> {
        self.check(pos)?;
        Ok(self.stone(pos))
    }

    /// Overwrite a cell with any state, including `Empty`
    pub fn set(&mut self, pos: Pos, state: Stone) -> Result<()> {
        self.check(pos)?;
        let idx = pos.to_index(self.size);
        self.black.clear(idx);
        self.white.clear(idx);
        match state {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
        Ok(())
    }

    /// Place a player's stone on an empty cell
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<()> {
        if !stone.is_player() {
            return Err(GomokuError::InvalidPlayer(stone.id()));
        }
        if self.get(pos)? != Stone::Empty {
            return Err(GomokuError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.set(pos, stone)
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The cell goes back to `Empty` when the guard is dropped, whichever
    /// way the caller leaves its scope.
    pub fn trial(&mut self, pos: Pos, stone: Stone) -> Result<TrialMove<'_>> {
        self.place(pos, stone)?;
        Ok(TrialMove { board: self, pos })
    }

    #[inline]
    fn clear_cell(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.black.clear(idx);
        self.white.clear(idx);
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.stone(pos) == Stone::Empty
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Center cell (ceil(N/2), ceil(N/2))
    #[inline]
    pub fn center(&self) -> Pos {
        let c = self.size.div_ceil(2) as u8;
        Pos::new(c, c)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let n = self.size as u8;
        (1..=n).flat_map(move |r| (1..=n).map(move |c| Pos::new(r, c)))
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells().filter(|&pos| self.is_empty(pos))
    }

    /// Stones of one color in row-major order (nothing for `Empty`)
    pub fn stones(&self, color: Stone) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        let bitboard = match color {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        };
        bitboard
            .into_iter()
            .flat_map(Bitboard::iter_ones)
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// All stones of both colors
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        self.stones(Stone::Black).chain(self.stones(Stone::White))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A stone placed by [`Board::trial`]; removed again on drop.
///
/// Derefs to the board so nested trials and read access work through it.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl TrialMove<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear_cell(self.pos);
    }
}
