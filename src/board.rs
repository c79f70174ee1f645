//! Game board state: mine layout, per-cell visibility and win/loss rules.

use crate::command::Command;
use crate::common::{BoardError, GameStatus, IgnoreReason, Outcome, Visibility};
use crate::config::GameConfig;
use crate::grid::Grid;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

/// What a single cell looks like to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Opened cell holding a mine.
    Mine,
    /// Opened safe cell with no mined neighbours.
    Blank,
    /// Opened safe cell with 1..=8 mined neighbours.
    Count(u8),
    /// Flagged cell.
    Flag,
    /// Untouched cell.
    Fog,
}

/// Player-facing view of the whole board.
pub type Snapshot = Grid<Cell>;

/// Main board state: mines are fixed at construction, visibility changes
/// with every applied command.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    mines: Grid<bool>,
    visibility: Grid<Visibility>,
    mine_count: usize,
}

impl Board {
    /// Create a board for `config`, placing mines with `rng`.
    ///
    /// Positions are drawn uniformly and already-mined cells are skipped until
    /// exactly `config.mines` mines are down. Validation guarantees at least
    /// one safe cell, so the loop terminates.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let config = config.validate()?;
        let mut mines = Grid::<bool>::new(config.size);
        let mut placed = 0;
        let mut draws = 0usize;
        while placed < config.mines {
            draws += 1;
            let row = rng.random_range(0..config.size);
            let col = rng.random_range(0..config.size);
            let cell = mines.get_mut(row, col)?;
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }
        log::debug!(
            "placed {} mines on a {}x{} board in {} draws",
            placed,
            config.size,
            config.size,
            draws
        );
        Ok(Self::with_mines(mines))
    }

    /// Create a board with mines at the given positions. Duplicates count once.
    pub fn from_mines<I>(size: usize, positions: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let positions: Vec<_> = positions.into_iter().collect();
        if size.checked_mul(size).is_none() {
            return Err(BoardError::InvalidConfig {
                size,
                mines: positions.len(),
            });
        }
        let mut mines = Grid::<bool>::new(size);
        for (row, col) in positions {
            mines.set(row, col, true)?;
        }
        GameConfig::new(size, mines.count_set()).validate()?;
        Ok(Self::with_mines(mines))
    }

    fn with_mines(mines: Grid<bool>) -> Self {
        let visibility = Grid::new(mines.size());
        let mine_count = mines.count_set();
        Board {
            mines,
            visibility,
            mine_count,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.mines.size()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Number of cells currently flagged, mined or not.
    pub fn flag_count(&self) -> usize {
        self.visibility
            .iter()
            .filter(|&&v| v == Visibility::Flagged)
            .count()
    }

    /// Visibility of (row, col), or `None` when out of bounds.
    pub fn visibility(&self, row: usize, col: usize) -> Option<Visibility> {
        self.visibility.get(row, col).ok().copied()
    }

    /// Whether (row, col) holds a mine, or `None` when out of bounds.
    pub fn is_mine(&self, row: usize, col: usize) -> Option<bool> {
        self.mines.get(row, col).ok().copied()
    }

    /// Positions of all mines in row-major order.
    pub fn mine_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mines.iter_set()
    }

    /// Apply a player command.
    ///
    /// Nothing changes once the game is over, for `Unknown`/`Exit`, or when
    /// the target lies outside the board.
    pub fn apply(&mut self, command: Command) -> Outcome {
        if self.is_game_over() {
            log::debug!("ignoring {:?}: game is over", command);
            return Outcome::Ignored(IgnoreReason::GameOver);
        }
        let Some((row, col)) = command.position() else {
            return Outcome::Ignored(IgnoreReason::NoAction);
        };
        let size = self.size();
        let Ok(state) = self.visibility.get_mut(row, col) else {
            log::debug!("ignoring {:?}: outside {}x{} board", command, size, size);
            return Outcome::Ignored(IgnoreReason::OutOfBounds);
        };

        let next = match (command, *state) {
            (Command::Open { .. }, Visibility::Opened) => return Outcome::NoChange,
            (Command::Open { .. }, _) => Visibility::Opened,
            (Command::ToggleFlag { .. }, Visibility::FogOfWar) => Visibility::Flagged,
            (Command::ToggleFlag { .. }, Visibility::Flagged) => Visibility::FogOfWar,
            (Command::ToggleFlag { .. }, Visibility::Opened) => return Outcome::NoChange,
            (Command::Exit | Command::Unknown, _) => {
                return Outcome::Ignored(IgnoreReason::NoAction)
            }
        };
        *state = next;

        match self.status() {
            GameStatus::Won => log::info!("all {} mines flagged", self.mine_count),
            GameStatus::Lost => log::info!("mine opened at ({}, {})", row, col),
            GameStatus::InProgress => {}
        }
        Outcome::Changed
    }

    /// Number of mines among the up-to-eight neighbours of (row, col).
    pub fn adjacent_mine_count(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        self.mines.get(row, col)?;
        Ok(self.count_adjacent(row, col))
    }

    fn count_adjacent(&self, row: usize, col: usize) -> u8 {
        let count = self
            .mines
            .neighbors(row, col)
            .filter(|&(r, c)| self.mines.get(r, c).is_ok_and(|&m| m))
            .count();
        // at most eight neighbours
        count as u8
    }

    /// `true` when every mined cell is flagged. Flags on safe cells and
    /// unopened safe cells do not matter.
    pub fn is_win(&self) -> bool {
        self.mines
            .iter()
            .zip(self.visibility.iter())
            .filter(|&(&mine, _)| mine)
            .all(|(_, &v)| v == Visibility::Flagged)
    }

    /// `true` when any mined cell has been opened.
    pub fn is_loss(&self) -> bool {
        self.mines
            .iter()
            .zip(self.visibility.iter())
            .any(|(&mine, &v)| mine && v == Visibility::Opened)
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    /// Evaluate the current game status. A win is reported ahead of a loss.
    pub fn status(&self) -> GameStatus {
        if self.is_win() {
            GameStatus::Won
        } else if self.is_loss() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// What the player sees at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let visibility = *self.visibility.get(row, col)?;
        let mine = *self.mines.get(row, col)?;
        Ok(self.classify((row, col), visibility, mine))
    }

    /// Player-facing view of every cell.
    pub fn snapshot(&self) -> Snapshot {
        self.visibility
            .zip_map(&self.mines, |pos, &visibility, &mine| {
                self.classify(pos, visibility, mine)
            })
    }

    fn classify(&self, (row, col): (usize, usize), visibility: Visibility, mine: bool) -> Cell {
        match visibility {
            Visibility::Opened if mine => Cell::Mine,
            Visibility::Opened => match self.count_adjacent(row, col) {
                0 => Cell::Blank,
                n => Cell::Count(n),
            },
            Visibility::Flagged => Cell::Flag,
            Visibility::FogOfWar => Cell::Fog,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  mines:\n{},\n  visibility: {:?},\n  status: {:?}\n}}",
            self.mines,
            self.visibility,
            self.status()
        )
    }
}
