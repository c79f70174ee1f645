//! Common types for Minesweeper: cell visibility, game status, command
//! outcomes and board errors.

use crate::grid::GridError;
use thiserror::Error;

/// What the player can see of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Hidden and unmarked.
    #[default]
    FogOfWar,
    /// Hidden, marked as a suspected mine.
    Flagged,
    /// Revealed. Never goes back to hidden.
    Opened,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a command left the board untouched without being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The game already ended.
    GameOver,
    /// The command carries no board action (`Unknown` or `Exit`).
    NoAction,
    /// Row or column lies outside the grid.
    OutOfBounds,
}

/// Result of applying a command to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A cell changed visibility.
    Changed,
    /// The command was valid but the cell was already in the target state.
    NoChange,
    /// The command was not applied at all.
    Ignored(IgnoreReason),
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Errors returned by Board operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Mine count is zero or leaves no safe cell.
    #[error("invalid configuration: {mines} mines do not fit a {size}x{size} board")]
    InvalidConfig { size: usize, mines: usize },
    /// A coordinate lies outside the board.
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}
