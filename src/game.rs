#![cfg(feature = "std")]

//! Interactive driver: draws the board, reads one command per line and
//! applies it until the player exits or input runs out.

use std::io::{BufRead, Write};
use std::string::String;

use anyhow::{Context, Result};
use crossterm::{cursor, terminal, QueueableCommand};

use crate::{
    board::Board,
    command::Command,
    common::GameStatus,
    ui::{render_board, status_text},
};

/// One game session bound to an input and an output stream.
pub struct GameSession<R, W> {
    board: Board,
    input: R,
    output: W,
    clear_screen: bool,
    commands_read: usize,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Create a session that clears the screen before every redraw.
    pub fn new(board: Board, input: R, output: W) -> Self {
        Self {
            board,
            input,
            output,
            clear_screen: true,
            commands_read: 0,
        }
    }

    /// Enable or disable clearing the terminal before each redraw.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of lines read so far.
    pub fn commands_read(&self) -> usize {
        self.commands_read
    }

    /// Consume the session, returning the board and output stream.
    pub fn into_parts(self) -> (Board, W) {
        (self.board, self.output)
    }

    /// Clear the screen (if enabled), then print the grid and status block.
    pub fn draw(&mut self) -> Result<()> {
        if self.clear_screen {
            self.output
                .queue(terminal::Clear(terminal::ClearType::All))?
                .queue(cursor::MoveTo(0, 0))?;
        }
        self.output.write_all(render_board(&self.board).as_bytes())?;
        self.output
            .write_all(status_text(self.board.status()).as_bytes())?;
        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Read and parse the next line. End of input counts as `exit`.
    pub fn read_command(&mut self) -> Result<Command> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read command")?;
        if read == 0 {
            log::debug!("input closed, exiting");
            return Ok(Command::Exit);
        }
        self.commands_read += 1;
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Command::parse(line))
    }

    /// Draw, read one command and apply it to the board.
    pub fn step(&mut self) -> Result<Command> {
        self.draw()?;
        let command = self.read_command()?;
        if !command.is_exit() {
            let outcome = self.board.apply(command);
            if !outcome.has_update() {
                log::debug!("{} -> {:?}", command, outcome);
            }
        }
        Ok(command)
    }

    /// Run until the player types `exit` or input ends. Returns the final status.
    pub fn run(&mut self) -> Result<GameStatus> {
        while !self.step()?.is_exit() {}
        let status = self.board.status();
        log::info!(
            "session ended after {} commands: {:?}",
            self.commands_read,
            status
        );
        Ok(status)
    }
}
