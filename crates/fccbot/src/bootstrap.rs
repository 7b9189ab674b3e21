//! Wiring: build the collaborators and run the gateway client.

use crate::config::{BotConfig, snowflake};
use crate::shutdown::{ShutdownListener, flush_audit};
use fccbot_core::CommandSpec;
use fccbot_error::{DiscordError, FccbotResult};
use fccbot_security::RoleAdminOracle;
use fccbot_social::commands::{standard_registry, standard_specs};
use fccbot_social::{ChannelAuditSink, FccbotHandler, InteractionDispatcher, SerenityClient};
use serde::Serialize;
use serenity::all::{ApplicationId, Client, GatewayIntents, Http};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// How long shutdown waits for queued audit entries.
const AUDIT_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
struct CommandTable {
    commands: Vec<CommandRow>,
}

#[derive(Serialize)]
struct CommandRow {
    tier: String,
    #[serde(flatten)]
    spec: CommandSpec,
}

/// The command table as TOML, for `--dry-run`.
pub fn command_table() -> FccbotResult<String> {
    let table = CommandTable {
        commands: standard_specs()
            .into_iter()
            .map(|(tier, spec)| CommandRow {
                tier: tier.to_string(),
                spec,
            })
            .collect(),
    };
    toml::to_string_pretty(&table).map_err(|e| {
        fccbot_error::ConfigError::new(format!("Failed to render command table: {}", e)).into()
    })
}

/// Connect to Discord and handle events until the gateway stops.
#[instrument(skip_all, fields(guild_id = %config.guild_id()))]
pub async fn run(config: BotConfig, token: &str) -> FccbotResult<()> {
    let application_id = ApplicationId::new(snowflake("application_id", config.application_id())?);
    let guild_id = snowflake("guild_id", config.guild_id())?;

    let http = Arc::new(Http::new(token));
    http.set_application_id(application_id);
    let client = Arc::new(SerenityClient::new(http, guild_id));

    let (audit, audit_task) = ChannelAuditSink::spawn(client.clone(), config.log_channel_id());
    let audit = Arc::new(audit);

    let registry = Arc::new(standard_registry(
        client.clone(),
        audit.clone(),
        config.learning_resources_channel_id(),
    ));
    let oracle = Arc::new(RoleAdminOracle::new(config.admin().clone(), client.clone()));
    let dispatcher = InteractionDispatcher::new(registry, oracle, audit.clone());
    let handler = FccbotHandler::new(dispatcher, client, audit.clone());

    let mut gateway = Client::builder(token, GatewayIntents::GUILDS)
        .application_id(application_id)
        .event_handler(handler)
        .await
        .map_err(DiscordError::from)?;

    let shard_manager = gateway.shard_manager.clone();
    let listener = ShutdownListener::spawn(async move {
        shard_manager.shutdown_all().await;
    });

    info!("Starting Discord gateway client");
    let result = gateway.start().await.map_err(DiscordError::from);

    // The listener holds the shard manager, which holds the handler's audit senders
    listener.cancel().await;
    drop(gateway);
    drop(audit);
    if !flush_audit(audit_task, AUDIT_FLUSH_TIMEOUT).await {
        warn!("Audit log did not flush before shutdown");
    }

    result?;
    Ok(())
}
