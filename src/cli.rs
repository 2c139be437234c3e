//! Command-line interface for cyber_burst.

use clap::{Parser, Subcommand};
use cyber_burst_rules::RulesetKind;

/// CyberBurst - real-time word-chain elimination game
#[derive(Parser, Debug)]
#[command(name = "cyber_burst")]
#[command(about = "Word-chain elimination game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the game server
    Serve {
        /// Path to the TOML config file (defaults are used if missing)
        #[arg(short, long, default_value = "cyber_burst.toml")]
        config: std::path::PathBuf,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Ruleset to play by: latin or kana (overrides config)
        #[arg(short, long)]
        ruleset: Option<RulesetKind>,
    },

    /// Judge a word offline without starting a server
    Check {
        /// Ruleset to judge by: latin or kana
        #[arg(short, long, default_value = "latin")]
        ruleset: RulesetKind,

        /// Character the word must start with (defaults to the ruleset's opening target)
        #[arg(short, long)]
        target: Option<char>,

        /// The word to judge
        word: String,
    },
}
