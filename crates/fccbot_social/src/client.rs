//! Remote platform operations the bot depends on.

use async_trait::async_trait;
use fccbot_core::{CommandSpec, InteractionEvent, InteractionReply};
use fccbot_error::DiscordResult;

/// The subset of the chat platform's REST API the bot uses.
///
/// Every call is awaited to completion before the caller moves on. Ids are
/// Discord snowflakes in their decimal string form.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Create (or overwrite) a guild application command.
    async fn create_command(&self, spec: &CommandSpec) -> DiscordResult<()>;

    /// Send the direct response to an interaction.
    async fn respond(&self, event: &InteractionEvent, reply: &InteractionReply)
    -> DiscordResult<()>;

    /// Ids of up to `limit` messages immediately preceding `before`, newest first.
    async fn fetch_messages(
        &self,
        channel_id: &str,
        limit: u8,
        before: &str,
    ) -> DiscordResult<Vec<String>>;

    /// Delete the given messages in a single request.
    async fn bulk_delete(&self, channel_id: &str, message_ids: &[String]) -> DiscordResult<()>;

    /// Post a plain text message to a channel.
    async fn send_message(&self, channel_id: &str, content: &str) -> DiscordResult<()>;

    /// Display name of a guild channel.
    async fn channel_name(&self, channel_id: &str) -> DiscordResult<String>;
}
