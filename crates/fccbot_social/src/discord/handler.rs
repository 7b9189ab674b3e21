//! Serenity event handler wiring gateway events to the dispatcher.

use crate::discord::conversions::interaction_event;
use crate::{AuditSink, CommandInstaller, InteractionDispatcher, PlatformClient};
use async_trait::async_trait;
use fccbot_core::{AuditEntry, InteractionKind};
use serenity::all::{Context, EventHandler, Interaction, Ready};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Gateway event handler.
///
/// Installs the command registry on the first `ready` only.
pub struct FccbotHandler {
    dispatcher: InteractionDispatcher,
    installer: CommandInstaller,
    audit: Arc<dyn AuditSink>,
}

impl FccbotHandler {
    /// Create a handler around a dispatcher.
    pub fn new(
        dispatcher: InteractionDispatcher,
        client: Arc<dyn PlatformClient>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        let installer = CommandInstaller::new(dispatcher.registry().clone(), client, audit.clone());
        Self {
            dispatcher,
            installer,
            audit,
        }
    }
}

#[async_trait]
impl EventHandler for FccbotHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Connected to Discord gateway"
        );

        if let Some(report) = self.installer.install_once().await {
            info!(
                installed = report.installed().len(),
                failed = report.failed().len(),
                "Command installation finished"
            );
        }
    }

    async fn interaction_create(&self, _ctx: Context, interaction: Interaction) {
        let (command, kind) = match &interaction {
            Interaction::Command(command) => (command, InteractionKind::ChatCommand),
            Interaction::Autocomplete(command) => (command, InteractionKind::Autocomplete),
            _ => {
                debug!(kind = ?interaction.kind(), "Ignoring non-command interaction");
                return;
            }
        };

        match interaction_event(command, kind) {
            Ok(event) => {
                self.dispatcher.dispatch(&event).await;
            }
            Err(e) => {
                warn!(error = %e, "Could not convert interaction");
                self.audit.send(AuditEntry::error(format!(
                    "Whilst reading interaction {}: {}",
                    command.id, e.kind
                )));
            }
        }
    }
}
