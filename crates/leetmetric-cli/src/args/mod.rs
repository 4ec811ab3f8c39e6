mod common;
mod enums;

pub use common::*;
pub use enums::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "leetmetric")]
#[command(about = "Look up LeetCode solved-problem statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory for config and logs [default: $LEETMETRIC_PATH or ~/.leetmetric]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Statistics API base URL (overrides config)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request deadline in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one or more usernames and print their statistics
    Lookup {
        /// Usernames, submitted in order within one session
        #[arg(required = true)]
        usernames: Vec<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Interactive lookup widget
    Tui {
        /// Username to submit on start
        username: Option<String>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml into the data directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
