//! [`PlatformClient`] backed by serenity's HTTP client.

use crate::PlatformClient;
use crate::discord::conversions::create_command;
use async_trait::async_trait;
use fccbot_core::{CommandSpec, InteractionEvent, InteractionReply};
use fccbot_error::{DiscordError, DiscordErrorKind, DiscordResult};
use fccbot_security::MemberRoleLookup;
use serenity::all::{
    ChannelId, CreateInteractionResponse, CreateInteractionResponseMessage, GetMessages, GuildId,
    Http, InteractionId, MessageId, UserId,
};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Parse a decimal snowflake.
pub fn parse_snowflake(raw: &str) -> DiscordResult<u64> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| DiscordError::new(DiscordErrorKind::InvalidId(raw.to_string())))
}

/// Serenity-backed platform client scoped to one guild.
#[derive(Clone)]
pub struct SerenityClient {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityClient {
    /// Create a client for `guild_id`.
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }

    fn channel(raw: &str) -> DiscordResult<ChannelId> {
        Ok(ChannelId::new(parse_snowflake(raw)?))
    }
}

#[async_trait]
impl PlatformClient for SerenityClient {
    #[instrument(skip(self, spec), fields(command = %spec.name(), guild_id = %self.guild_id))]
    async fn create_command(&self, spec: &CommandSpec) -> DiscordResult<()> {
        let command = self
            .guild_id
            .create_command(&self.http, create_command(spec))
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::CommandRegistrationFailed {
                    command: spec.name().clone(),
                    reason: e.to_string(),
                })
            })?;
        debug!(command_id = %command.id, "Guild command created");
        Ok(())
    }

    #[instrument(skip(self, event, reply), fields(interaction_id = %event.id()))]
    async fn respond(
        &self,
        event: &InteractionEvent,
        reply: &InteractionReply,
    ) -> DiscordResult<()> {
        let interaction_id = InteractionId::new(parse_snowflake(event.id())?);
        let message = CreateInteractionResponseMessage::new()
            .content(reply.content())
            .ephemeral(*reply.is_ephemeral());
        let response = CreateInteractionResponse::Message(message);

        self.http
            .create_interaction_response(interaction_id, event.token(), &response, Vec::new())
            .await
            .map_err(|e| {
                error!(error = %e, "Interaction response failed");
                DiscordError::new(DiscordErrorKind::InteractionFailed(e.to_string()))
            })
    }

    #[instrument(skip(self))]
    async fn fetch_messages(
        &self,
        channel_id: &str,
        limit: u8,
        before: &str,
    ) -> DiscordResult<Vec<String>> {
        let channel = Self::channel(channel_id)?;
        let before = MessageId::new(parse_snowflake(before)?);
        let http: &Http = &self.http;

        let messages = channel
            .messages(http, GetMessages::new().before(before).limit(limit))
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::MessageFetchFailed(e.to_string()))
            })?;

        debug!(fetched = messages.len(), "Fetched channel messages");
        Ok(messages.into_iter().map(|m| m.id.to_string()).collect())
    }

    #[instrument(skip(self, message_ids), fields(count = message_ids.len()))]
    async fn bulk_delete(&self, channel_id: &str, message_ids: &[String]) -> DiscordResult<()> {
        let channel = Self::channel(channel_id)?;
        let ids = message_ids
            .iter()
            .map(|id| parse_snowflake(id).map(MessageId::new))
            .collect::<DiscordResult<Vec<_>>>()?;

        // Serenity falls back to a single delete for one id.
        channel
            .delete_messages(&self.http, ids.iter())
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::MessageDeleteFailed(e.to_string())))
    }

    #[instrument(skip(self, content), fields(length = content.len()))]
    async fn send_message(&self, channel_id: &str, content: &str) -> DiscordResult<()> {
        let channel = Self::channel(channel_id)?;
        channel
            .say(&self.http, content)
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::MessageSendFailed(e.to_string())))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn channel_name(&self, channel_id: &str) -> DiscordResult<String> {
        let channel = Self::channel(channel_id)?;
        let http: &Http = &self.http;
        channel
            .to_channel(http)
            .await?
            .guild()
            .map(|guild_channel| guild_channel.name)
            .ok_or_else(|| DiscordError::new(DiscordErrorKind::ChannelNotFound(channel_id.to_string())))
    }
}

#[async_trait]
impl MemberRoleLookup for SerenityClient {
    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn member_roles(&self, user_id: &str) -> DiscordResult<Vec<String>> {
        let user = UserId::new(parse_snowflake(user_id)?);
        let http: &Http = &self.http;
        let member = self.guild_id.member(http, user).await?;
        Ok(member.roles.iter().map(|role| role.to_string()).collect())
    }
}
