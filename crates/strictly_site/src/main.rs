//! Strictly Site - Unified CLI
//!
//! Contact form and memory game in the terminal.

#![warn(missing_docs)]

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use strictly_contact::ContactForm;
use strictly_memory::{BestScores, Difficulty, MemoryGame};
use strictly_site::{
    ActiveScreen, Cli, Command, FormScreen, KvRepository, MemoryScreen, SiteConfig, SiteController,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,strictly_site=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = SiteConfig::load_or_default(&cli.config)?;
    if let Some(db_path) = cli.db_path {
        config = config.with_db_path(db_path);
    }

    match cli.command {
        Command::Form => run_tui(config, ActiveScreen::Form, None).await,
        Command::Memory { difficulty } => {
            run_tui(config, ActiveScreen::Memory, difficulty).await
        }
        Command::Scores => print_scores(&config),
        Command::ResetScores => reset_scores(&config),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to stderr for one-shot commands.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn open_repository(config: &SiteConfig) -> Result<KvRepository> {
    let repo = KvRepository::open(config.db_path().to_string_lossy())?;
    Ok(repo)
}

/// Run the terminal UI starting on the given screen
#[instrument(skip(config))]
async fn run_tui(
    config: SiteConfig,
    start: ActiveScreen,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    init_file_tracing(config.log_path())?;
    info!("Starting Strictly Site TUI");

    let repo = open_repository(&config)?;
    let difficulty = difficulty.unwrap_or(*config.game().default_difficulty());
    let game = MemoryGame::new(repo, config.game().timings(), difficulty);
    let form = ContactForm::new(config.form().phone_format(), config.form().timings());

    let mut controller =
        SiteController::new(FormScreen::new(form), MemoryScreen::new(game), start);
    strictly_site::run_terminal(&mut controller).await
}

/// Print the best score of each tier
#[instrument(skip(config))]
fn print_scores(config: &SiteConfig) -> Result<()> {
    init_stderr_tracing();
    let scores = BestScores::new(open_repository(config)?);
    for difficulty in [Difficulty::Easy, Difficulty::Hard] {
        println!("{:<5} {}", difficulty, scores.display(difficulty));
    }
    Ok(())
}

/// Forget every best score
#[instrument(skip(config))]
fn reset_scores(config: &SiteConfig) -> Result<()> {
    init_stderr_tracing();
    let mut scores = BestScores::new(open_repository(config)?);
    scores.clear()?;
    info!("Best scores reset");
    println!("Best scores cleared");
    Ok(())
}
