#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use minesweeper::{
    init_logging, Board, GameConfig, GameSession, DEFAULT_BOARD_SIZE,
    DEFAULT_MINE_COUNT,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Play Minesweeper in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Side length of the square board.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Number of mines to place.
    #[arg(long, default_value_t = DEFAULT_MINE_COUNT)]
    mines: usize,
    #[arg(long, help = "Fix RNG seed for a reproducible layout (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Do not clear the terminal between moves.
    #[arg(long)]
    no_clear: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = GameConfig::new(cli.size, cli.mines);
    let board = Board::new(config, &mut rng)
        .with_context(|| format!("cannot start a game with {:?}", config))?;

    let stdin = std::io::stdin();
    let mut session =
        GameSession::new(board, stdin.lock(), std::io::stdout()).with_clear_screen(!cli.no_clear);
    session.run()?;
    Ok(())
}
