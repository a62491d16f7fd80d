use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_sim::config::AppConfig;
use connect_four_sim::console::{ConsoleOutput, Output};
use connect_four_sim::game::ConnectFourGame;

/// Watch two random players play Connect Four.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play a game of Connect Four between two random agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override pause between turns, in milliseconds
    #[arg(long)]
    turn_delay_ms: Option<u64>,

    /// Seed the random agents for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        ConsoleOutput.error(&format!("Error: {err:#}\n"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    if let Some(delay) = cli.turn_delay_ms {
        app_config.game.turn_delay_ms = delay;
    }
    if cli.seed.is_some() {
        app_config.game.seed = cli.seed;
    }
    app_config.validate().context("invalid command line overrides")?;

    let mut game = ConnectFourGame::from_config(&app_config.game);
    game.start().context("game aborted")?;
    Ok(())
}
