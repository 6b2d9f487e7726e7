//! Command-line interface for strictly_site.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strictly_memory::Difficulty;

use crate::config::DEFAULT_CONFIG_PATH;

/// Strictly Site - contact form and memory game in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_site")]
#[command(about = "Contact form and memory game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the database path from the config
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open the contact form
    Form,

    /// Play the memory game
    Memory {
        /// Board size (easy or hard); defaults to the config value
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Print the best score of each tier
    Scores,

    /// Forget every best score
    ResetScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_with_difficulty() {
        let cli = Cli::try_parse_from(["strictly_site", "memory", "--difficulty", "HARD"])
            .expect("valid arguments");
        assert_eq!(
            cli.command,
            Command::Memory {
                difficulty: Some(Difficulty::Hard)
            }
        );
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_global_db_path_after_subcommand() {
        let cli = Cli::try_parse_from(["strictly_site", "scores", "--db-path", "/tmp/x.db"])
            .expect("valid arguments");
        assert_eq!(cli.command, Command::Scores);
        assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/x.db")));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!(Cli::try_parse_from(["strictly_site", "memory", "-d", "medium"]).is_err());
    }
}
