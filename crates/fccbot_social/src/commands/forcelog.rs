//! `/forcelog`: write an arbitrary line to the audit channel.

use crate::{AuditSink, CommandHandler, CommandOutcome, PlatformClient};
use async_trait::async_trait;
use fccbot_core::{
    AuditCategory, AuditEntry, CommandSpec, InteractionEvent, InteractionReply, OptionKind,
    OptionSpec,
};
use std::sync::Arc;
use tracing::instrument;

/// Command name.
pub const FORCELOG: &str = "forcelog";

/// Option holding the text to log.
pub const MESSAGE_OPTION: &str = "message";

/// Handler for `/forcelog`.
#[derive(derive_new::new)]
pub struct ForceLogCommand {
    client: Arc<dyn PlatformClient>,
    audit: Arc<dyn AuditSink>,
}

/// Schema of `/forcelog`.
pub fn forcelog_spec() -> CommandSpec {
    CommandSpec::chat(FORCELOG, "Force Bot to Log Something").with_option(
        OptionSpec::new(MESSAGE_OPTION, OptionKind::String, "Specify log message").required(),
    )
}

#[async_trait]
impl CommandHandler for ForceLogCommand {
    fn spec(&self) -> CommandSpec {
        forcelog_spec()
    }

    #[instrument(skip_all)]
    async fn handle(&self, event: &InteractionEvent) -> CommandOutcome {
        let Some(message) = event.string_option(MESSAGE_OPTION) else {
            self.audit.send(AuditEntry::error(format!(
                "Whilst responding to command forcelog: missing option {}",
                MESSAGE_OPTION
            )));
            return CommandOutcome::Aborted;
        };

        let ack = InteractionReply::ephemeral("Log made in log channel");
        if let Err(e) = self.client.respond(event, &ack).await {
            self.audit.send(AuditEntry::error(format!(
                "Whilst responding to command forcelog: {}",
                e.kind
            )));
            return CommandOutcome::Aborted;
        }

        self.audit.send(AuditEntry::new(
            AuditCategory::CommandForceLog,
            format!("By User {}: {}", event.member().username(), message),
        ));
        CommandOutcome::Completed
    }
}
