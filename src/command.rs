//! Text commands typed by the player.
//!
//! Grammar: `exit` | `o ROW COL` | `f ROW COL`. Anything else parses to
//! [`Command::Unknown`], so parsing never fails.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

const EXIT: &str = "exit";
const OPEN_PREFIX: &str = "o ";
const FLAG_PREFIX: &str = "f ";

/// A single player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Reveal the cell at (row, col).
    Open { row: usize, col: usize },
    /// Flag or unflag the cell at (row, col).
    ToggleFlag { row: usize, col: usize },
    /// Leave the game.
    Exit,
    /// Input that did not match any command.
    Unknown,
}

impl Command {
    /// Parse one line of input. Total: unparseable text yields `Unknown`.
    pub fn parse(line: &str) -> Command {
        if line == EXIT {
            Command::Exit
        } else if line.starts_with(OPEN_PREFIX) {
            parse_coords(line).map_or(Command::Unknown, |(row, col)| Command::Open { row, col })
        } else if line.starts_with(FLAG_PREFIX) {
            parse_coords(line).map_or(Command::Unknown, |(row, col)| {
                Command::ToggleFlag { row, col }
            })
        } else {
            Command::Unknown
        }
    }

    /// Target cell of the command, if it has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            Command::Open { row, col } | Command::ToggleFlag { row, col } => Some((row, col)),
            Command::Exit | Command::Unknown => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

/// Reads tokens 1 and 2 of a space-separated line as row and column.
/// Tokens past the second coordinate are ignored.
fn parse_coords(line: &str) -> Option<(usize, usize)> {
    let mut pieces = line.split(' ').skip(1);
    let row = pieces.next()?.parse().ok()?;
    let col = pieces.next()?.parse().ok()?;
    Some((row, col))
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Command::parse(s))
    }
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        Command::parse(line)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Open { row, col } => write!(f, "o {} {}", row, col),
            Command::ToggleFlag { row, col } => write!(f, "f {} {}", row, col),
            Command::Exit => f.write_str(EXIT),
            Command::Unknown => f.write_str("?"),
        }
    }
}
