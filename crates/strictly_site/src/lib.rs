//! Strictly Site - terminal host for the contact form and the memory game.
//!
//! # Architecture
//!
//! - **Config**: [`SiteConfig`] read from an optional TOML file
//! - **Persistence**: [`KvRepository`], a SQLite key-value table that stores
//!   best scores through the game's [`strictly_memory::ScoreStore`] seam
//! - **TUI**: [`SiteController`] switches between a [`FormScreen`] and a
//!   [`MemoryScreen`], advancing both screens' timer queues by real time
//!
//! # Example
//!
//! ```no_run
//! use strictly_site::{KvRepository, SiteConfig};
//! use strictly_memory::{BestScores, Difficulty};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = SiteConfig::load_or_default("strictly_site.toml")?;
//! let repo = KvRepository::open(config.db_path().to_string_lossy())?;
//! let scores = BestScores::new(repo);
//! println!("easy: {}", scores.display(Difficulty::Easy));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod db;
mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, FormConfig, GameConfig, SiteConfig};
pub use db::{DbError, KvEntry, KvRepository, NewKvEntry};
pub use tui::{
    ActiveScreen, FormScreen, MemoryScreen, Screen, ScreenTransition, SiteController,
    cycle_focus, move_cursor, run_terminal,
};
