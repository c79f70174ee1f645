use crate::common::BoardError;

pub const DEFAULT_BOARD_SIZE: usize = 6;
pub const DEFAULT_MINE_COUNT: usize = 6;

/// Dimensions of a game: an `size×size` grid holding `mines` mines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub mines: usize,
}

impl GameConfig {
    pub const fn new(size: usize, mines: usize) -> Self {
        Self { size, mines }
    }

    /// Number of cells on the board, or `None` when `size*size` overflows.
    pub const fn total_cells(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }

    /// Checks `0 < mines < size*size`, the only layouts mine placement can
    /// satisfy while leaving at least one safe cell. A board whose cell count
    /// does not fit in `usize` is rejected too.
    pub fn validate(&self) -> Result<Self, BoardError> {
        match self.total_cells() {
            Some(cells) if self.mines > 0 && self.mines < cells => Ok(*self),
            _ => Err(BoardError::InvalidConfig {
                size: self.size,
                mines: self.mines,
            }),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_MINE_COUNT)
    }
}
