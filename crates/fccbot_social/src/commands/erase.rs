//! `/erase`: delete a run of recent messages ending at the trigger message.

use crate::{AuditSink, CommandHandler, CommandOutcome, PlatformClient};
use async_trait::async_trait;
use fccbot_core::{
    AuditCategory, AuditEntry, CommandSpec, InteractionEvent, InteractionReply, OptionKind,
    OptionSpec,
};
use fccbot_error::DiscordResult;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Command name.
pub const ERASE: &str = "erase";

/// Option holding the number of earlier messages to erase.
pub const MULTIPLE_OPTION: &str = "multiple";

/// Largest accepted `multiple`. One more id (the trigger) must still fit in a
/// bulk delete of at most 100 messages.
pub const MAX_ERASE: i64 = 99;

/// Handler for `/erase`.
#[derive(derive_new::new)]
pub struct EraseCommand {
    client: Arc<dyn PlatformClient>,
    audit: Arc<dyn AuditSink>,
}

impl EraseCommand {
    /// Fetch up to `count` messages before `before_id` and bulk-delete them
    /// together with `before_id` itself. Returns the number of ids deleted.
    #[instrument(skip(self))]
    pub async fn delete_messages(
        &self,
        count: u8,
        channel_id: &str,
        before_id: &str,
    ) -> DiscordResult<usize> {
        let mut message_ids = if count == 0 {
            Vec::new()
        } else {
            self.client
                .fetch_messages(channel_id, count, before_id)
                .await?
        };
        message_ids.push(before_id.to_string());
        debug!(deleting = message_ids.len(), "Bulk deleting messages");

        self.client.bulk_delete(channel_id, &message_ids).await?;
        Ok(message_ids.len())
    }

    /// Channel name for log lines, falling back to the id.
    async fn channel_label(&self, channel_id: &str) -> String {
        match self.client.channel_name(channel_id).await {
            Ok(name) => name,
            Err(e) => {
                warn!(channel_id, error = %e, "Channel name lookup failed, logging id");
                channel_id.to_string()
            }
        }
    }
}

/// Schema of `/erase`.
pub fn erase_spec() -> CommandSpec {
    CommandSpec::chat(ERASE, "Erase messages in a channel").with_option(
        OptionSpec::new(MULTIPLE_OPTION, OptionKind::Integer, "Specify amount to erase")
            .with_range(0, MAX_ERASE),
    )
}

#[async_trait]
impl CommandHandler for EraseCommand {
    fn spec(&self) -> CommandSpec {
        erase_spec()
    }

    #[instrument(skip_all, fields(count, multi))]
    async fn handle(&self, event: &InteractionEvent) -> CommandOutcome {
        let username = event.member().username();

        // No option means the single-message path.
        let (requested, multi) = match event.option(MULTIPLE_OPTION) {
            None => (1, false),
            Some(value) => match value.as_i64() {
                Some(amount) => (amount, true),
                None => {
                    self.audit.send(AuditEntry::error(format!(
                        "Whilst responding to command erase: option {} is not an integer",
                        MULTIPLE_OPTION
                    )));
                    return CommandOutcome::Aborted;
                }
            },
        };
        tracing::Span::current().record("count", requested);
        tracing::Span::current().record("multi", multi);

        let count = match u8::try_from(requested) {
            Ok(count) if i64::from(count) <= MAX_ERASE => count,
            _ => {
                info!(requested, "Erase amount out of range");
                let reply = InteractionReply::ephemeral(format!(
                    "Erase amount must be between 0 and {}",
                    MAX_ERASE
                ));
                if let Err(e) = self.client.respond(event, &reply).await {
                    self.audit.send(AuditEntry::error(format!(
                        "Whilst responding to command erase: {}",
                        e.kind
                    )));
                }
                return CommandOutcome::InvalidInput;
            }
        };

        let path = if multi { "multi" } else { "single" };
        let ack = InteractionReply::ephemeral("Messages Erased");
        if let Err(e) = self.client.respond(event, &ack).await {
            self.audit.send(AuditEntry::error(format!(
                "Whilst responding to command erase ({}): {}",
                path, e.kind
            )));
            return CommandOutcome::Aborted;
        }

        let channel = self.channel_label(event.channel_id()).await;
        let mut details = format!("User {} | channel {}", username, channel);
        if multi {
            details.push_str(&format!(" | amount {}", count));
        }

        match self
            .delete_messages(count, event.channel_id(), event.trigger_message_id())
            .await
        {
            Ok(deleted) => {
                info!(deleted, "Messages erased");
                self.audit
                    .send(AuditEntry::new(AuditCategory::CommandErase, details));
                CommandOutcome::Completed
            }
            Err(e) => {
                self.audit.send(AuditEntry::error(format!(
                    "Whilst attempting to delete: {} | {}",
                    details, e.kind
                )));
                CommandOutcome::Aborted
            }
        }
    }
}
