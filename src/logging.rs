#![cfg(feature = "std")]

//! Stderr logger for the game. Stdout belongs to the board display, so every
//! record goes to stderr, tagged with the game module that emitted it.

use std::env;
use std::io::Write;
use std::string::String;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error`..`trace`, `off`).
pub const LOG_ENV: &str = "MINESWEEPER_LOG";

/// Module-path prefix of records emitted by this crate.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with(CRATE_TARGET)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: GameLogger = GameLogger;

/// `LEVEL [module] message`, with the crate prefix dropped from the module
/// path (`minesweeper::board` becomes `board`).
pub fn format_record(record: &Record) -> String {
    let module = record
        .target()
        .strip_prefix(CRATE_TARGET)
        .map(|rest| rest.trim_start_matches("::"))
        .filter(|rest| !rest.is_empty())
        .unwrap_or("game");
    std::format!("{:<5} [{}] {}", record.level(), module, record.args())
}

/// Parse a level name, falling back to `warn` for missing or invalid values.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the game logger at the level named by `MINESWEEPER_LOG`.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
