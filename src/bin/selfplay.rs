//! Headless self-play between two opponents.
//!
//! ```text
//! four_row_selfplay --x hard --o medium --games 20 --seed 7
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use four_row::config::AppConfig;
use four_row::{AIEngine, Difficulty, GameState, GameStatus, Player};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "four_row_selfplay", about = "Play the computer opponents against each other")]
struct Args {
    /// Difficulty playing X (easy, medium, hard)
    #[arg(long, default_value = "hard")]
    x: Difficulty,

    /// Difficulty playing O (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    o: Difficulty,

    /// Number of games; the starting side alternates between games
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Seed for reproducible Easy/Medium play
    #[arg(long)]
    seed: Option<u64>,

    /// Override the Hard search depth
    #[arg(long)]
    depth: Option<u8>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print only the final tally
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Default)]
struct Tally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.engine.search_depth = depth;
    }
    config.validate().context("invalid settings")?;
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut engine = match args.seed {
        Some(seed) => AIEngine::with_seed(seed, config.engine.clone()),
        None => AIEngine::with_config(config.engine.clone()),
    };

    let start = Instant::now();
    let mut tally = Tally::default();
    let mut state = GameState::new(config.game.starting_player);

    for game in 1..=args.games {
        while !state.is_over() {
            let player = state.current_player();
            let difficulty = match player {
                Player::X => args.x,
                Player::O => args.o,
            };
            let pos = engine
                .get_move(state.board(), player, difficulty)
                .with_context(|| format!("game {game}, move {}", state.move_count() + 1))?;
            state = state.apply_move(pos.row as i32, pos.col as i32);
        }

        let result = match state.status() {
            GameStatus::Won(Player::X) => {
                tally.x_wins += 1;
                "X wins".to_string()
            }
            GameStatus::Won(Player::O) => {
                tally.o_wins += 1;
                "O wins".to_string()
            }
            GameStatus::Draw => {
                tally.draws += 1;
                "draw".to_string()
            }
            GameStatus::InProgress => bail!("game {game} stopped before it finished"),
        };
        info!(game, moves = state.move_count(), %result, "game finished");
        if !args.quiet {
            println!(
                "Game {game}: {} started, {result} after {} moves",
                state.starting_player(),
                state.move_count()
            );
            println!("{}", state.board());
        }

        state = state.rematch();
    }

    println!(
        "X ({}) {} - O ({}) {} - draws {} in {:.2}s",
        args.x,
        tally.x_wins,
        args.o,
        tally.o_wins,
        tally.draws,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
