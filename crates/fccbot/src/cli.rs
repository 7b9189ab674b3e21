//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the bot.
#[derive(Parser, Debug)]
#[command(name = "fccbot")]
#[command(about = "Discord moderation and utility bot")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FCCBOT_CONFIG", default_value = "fccbot.toml")]
    pub config: PathBuf,

    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub discord_token: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Validate configuration and print the command table without connecting
    #[arg(long)]
    pub dry_run: bool,
}
