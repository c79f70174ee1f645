#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::string::String;

use crate::board::{Board, Cell, Snapshot};
use crate::common::GameStatus;

pub const MINE_SYMBOL: &str = " * ";
pub const BLANK_SYMBOL: &str = "   ";
pub const FLAG_SYMBOL: &str = " F ";
pub const FOG_SYMBOL: &str = "\u{2592}\u{2592}\u{2592}";

/// Three-column text for a single cell.
pub fn cell_symbol(cell: Cell) -> String {
    match cell {
        Cell::Mine => MINE_SYMBOL.into(),
        Cell::Blank => BLANK_SYMBOL.into(),
        Cell::Count(n) => std::format!(" {} ", n),
        Cell::Flag => FLAG_SYMBOL.into(),
        Cell::Fog => FOG_SYMBOL.into(),
    }
}

/// Render a snapshot with a header row and header column of 0-based indices.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..snapshot.size() {
        let _ = write!(out, "{:^3}", c);
    }
    out.push('\n');
    for (r, row) in snapshot.rows().enumerate() {
        let _ = write!(out, "{:^3}", r);
        for &cell in row {
            out.push_str(&cell_symbol(cell));
        }
        out.push('\n');
    }
    out
}

/// Render the current state of `board`.
pub fn render_board(board: &Board) -> String {
    render_snapshot(&board.snapshot())
}

/// Status block shown under the grid: the command list while playing, the
/// result once the game is over.
pub fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => {
            "\nMake a choice:\n\
             type 'exit' to exit\n\
             type 'o ROW COL' to open a cell\n\
             type 'f ROW COL' to flag a cell\n"
        }
        GameStatus::Won => "\n   YOU WIN\n\ntype 'exit' to exit\n",
        GameStatus::Lost => "\n   YOU LOSE\n\ntype 'exit' to exit\n",
    }
}
