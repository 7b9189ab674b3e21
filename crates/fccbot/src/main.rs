//! fccbot binary.

use clap::Parser;
use fccbot::{BotConfig, Cli, command_table, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!(config_file = ?cli.config, "Loading configuration");
    let config = BotConfig::from_file(&cli.config)?;
    info!(guild_id = %config.guild_id(), "Configuration loaded");

    if cli.dry_run {
        info!("DRY RUN MODE - not connecting to Discord");
        println!("{}", command_table()?);
        return Ok(());
    }

    let token = cli.discord_token.ok_or("DISCORD_TOKEN not provided")?;
    run(config, &token).await?;
    Ok(())
}
