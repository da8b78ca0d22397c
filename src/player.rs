//! Players: one trait for humans and every AI tier
//!
//! The game loop owns a `Box<dyn Player>` per side and never inspects the
//! concrete type; [`Player::is_automated`] tells it whether to wait for
//! input.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, EngineConfig, MoveResult};
use crate::error::{GomokuError, Result};

/// Every kind of player the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 6] = [
        PlayerKind::Human,
        PlayerKind::VeryEasy,
        PlayerKind::Easy,
        PlayerKind::Medium,
        PlayerKind::Hard,
        PlayerKind::VeryHard,
    ];

    /// Selector name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::VeryEasy => "very-easy",
            PlayerKind::Easy => "easy",
            PlayerKind::Medium => "medium",
            PlayerKind::Hard => "hard",
            PlayerKind::VeryHard => "very-hard",
        }
    }

    /// Numeric menu code, 1 through 6
    pub fn code(self) -> u8 {
        match self {
            PlayerKind::Human => 1,
            PlayerKind::VeryEasy => 2,
            PlayerKind::Easy => 3,
            PlayerKind::Medium => 4,
            PlayerKind::Hard => 5,
            PlayerKind::VeryHard => 6,
        }
    }

    #[inline]
    pub fn is_automated(self) -> bool {
        self != PlayerKind::Human
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PlayerKind {
    type Error = GomokuError;

    fn try_from(code: u8) -> Result<Self> {
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| GomokuError::UnknownPlayerKind(code.to_string()))
    }
}

impl FromStr for PlayerKind {
    type Err = GomokuError;

    /// Accepts a name (case-insensitive, `_` or `-` separated) or a numeric code.
    fn from_str(s: &str) -> Result<Self> {
        let selector = s.trim();
        if let Ok(code) = selector.parse::<u8>() {
            return PlayerKind::try_from(code);
        }

        let normalized = selector.to_ascii_lowercase().replace('_', "-");
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| GomokuError::UnknownPlayerKind(s.to_string()))
    }
}

/// A participant that can be asked for moves.
pub trait Player {
    /// Colour this player places
    fn stone(&self) -> Stone;

    fn kind(&self) -> PlayerKind;

    /// Whether moves come from the engine rather than outside input
    fn is_automated(&self) -> bool {
        self.kind().is_automated()
    }

    /// Choose the next move. The board is unchanged on return.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` when the board is full, plus whatever the concrete
    /// player reports for invalid input.
    fn get_move(&mut self, board: &mut Board) -> Result<Pos>;
}

/// Human player; moves arrive through [`HumanPlayer::submit_move`].
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    stone: Stone,
    pending: Option<Pos>,
}

impl HumanPlayer {
    pub fn new(stone: Stone) -> Self {
        Self {
            stone,
            pending: None,
        }
    }

    /// Queue the move returned by the next `get_move`.
    pub fn submit_move(&mut self, pos: Pos) {
        self.pending = Some(pos);
    }

    pub fn pending(&self) -> Option<Pos> {
        self.pending
    }
}

impl Player for HumanPlayer {
    fn stone(&self) -> Stone {
        self.stone
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn get_move(&mut self, board: &mut Board) -> Result<Pos> {
        let pos = self.pending.ok_or(GomokuError::NoPendingMove)?;
        if board.get(pos)? != Stone::Empty {
            return Err(GomokuError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.pending = None;
        Ok(pos)
    }
}

/// Automated player backed by an [`AIEngine`].
pub struct AiPlayer {
    stone: Stone,
    kind: PlayerKind,
    engine: AIEngine,
    last: Option<MoveResult>,
}

impl AiPlayer {
    /// Build the tier preset for `kind`.
    ///
    /// # Errors
    /// `UnknownPlayerKind` for `PlayerKind::Human`.
    pub fn new(kind: PlayerKind, stone: Stone) -> Result<Self> {
        let config = EngineConfig::for_kind(kind)
            .ok_or_else(|| GomokuError::UnknownPlayerKind(kind.to_string()))?;
        Ok(Self::with_config(kind, stone, config))
    }

    pub fn with_config(kind: PlayerKind, stone: Stone, config: EngineConfig) -> Self {
        Self {
            stone,
            kind,
            engine: AIEngine::with_config(config),
            last: None,
        }
    }

    /// Statistics of the last decision
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last.as_ref()
    }
}

impl fmt::Debug for AiPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiPlayer")
            .field("stone", &self.stone)
            .field("kind", &self.kind)
            .field("config", self.engine.config())
            .finish()
    }
}

impl Player for AiPlayer {
    fn stone(&self) -> Stone {
        self.stone
    }

    fn kind(&self) -> PlayerKind {
        self.kind
    }

    fn get_move(&mut self, board: &mut Board) -> Result<Pos> {
        let result = self.engine.get_move_with_stats(board, self.stone)?;
        self.last = Some(result);
        Ok(result.best_move)
    }
}

/// Build a player of `kind` placing `stone`.
///
/// # Errors
/// `InvalidPlayer` if `stone` is `Stone::Empty`.
pub fn create_player(kind: PlayerKind, stone: Stone) -> Result<Box<dyn Player>> {
    create_player_with(kind, stone, |config| config)
}

/// Like [`create_player`], letting the caller adjust the tier preset
/// (seed, time budget) before the engine is built.
pub fn create_player_with<F>(kind: PlayerKind, stone: Stone, adjust: F) -> Result<Box<dyn Player>>
where
    F: FnOnce(EngineConfig) -> EngineConfig,
{
    if !stone.is_player() {
        return Err(GomokuError::InvalidPlayer(stone.id()));
    }

    match EngineConfig::for_kind(kind) {
        None => Ok(Box::new(HumanPlayer::new(stone))),
        Some(config) => Ok(Box::new(AiPlayer::with_config(kind, stone, adjust(config)))),
    }
}

/// Build a player from a selector name or numeric code.
///
/// # Errors
/// `UnknownPlayerKind` for an unrecognised selector; nothing is built.
pub fn create_player_from_selector(selector: &str, stone: Stone) -> Result<Box<dyn Player>> {
    create_player(selector.parse()?, stone)
}
