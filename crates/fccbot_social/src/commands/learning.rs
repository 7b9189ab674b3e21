//! `/learning-resource`: share a link in the learning resources channel.

use crate::{AuditSink, CommandHandler, CommandOutcome, PlatformClient};
use async_trait::async_trait;
use fccbot_core::{
    AuditCategory, AuditEntry, CommandSpec, InteractionEvent, InteractionReply, OptionKind,
    OptionSpec,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use url::Url;

/// Command name.
pub const LEARNING_RESOURCE: &str = "learning-resource";

/// Option holding the resource link.
pub const URL_OPTION: &str = "resource-url";

/// Option holding the resource description.
pub const DESCRIPTION_OPTION: &str = "resource-description";

/// Handler for `/learning-resource`.
#[derive(derive_new::new)]
pub struct LearningResourceCommand {
    client: Arc<dyn PlatformClient>,
    audit: Arc<dyn AuditSink>,
    #[new(into)]
    resources_channel_id: String,
}

/// Whether `raw`, ignoring surrounding whitespace, is an absolute URI.
pub fn is_valid_resource_url(raw: &str) -> bool {
    Url::parse(raw.trim()).is_ok()
}

/// Text posted to the resources channel.
pub fn submission_message(mention: &str, url: &str, description: &str) -> String {
    format!(
        "Thanks, {}, who posted this resource:\n{}\nDescription: {}",
        mention, url, description
    )
}

impl LearningResourceCommand {
    async fn reply(&self, event: &InteractionEvent, content: &str) -> CommandOutcome {
        match self
            .client
            .respond(event, &InteractionReply::ephemeral(content))
            .await
        {
            Ok(()) => CommandOutcome::Completed,
            Err(e) => {
                self.audit.send(AuditEntry::error(format!(
                    "Whilst responding to command learning-resource: {}",
                    e.kind
                )));
                CommandOutcome::Aborted
            }
        }
    }
}

/// Schema of `/learning-resource`.
pub fn learning_resource_spec() -> CommandSpec {
    CommandSpec::chat(LEARNING_RESOURCE, "Submit a useful learning resource")
        .with_option(OptionSpec::new(URL_OPTION, OptionKind::String, "A valid url").required())
        .with_option(
            OptionSpec::new(
                DESCRIPTION_OPTION,
                OptionKind::String,
                "A description of the resource. What language is it for? What can we learn from it?",
            )
            .required(),
        )
}

#[async_trait]
impl CommandHandler for LearningResourceCommand {
    fn spec(&self) -> CommandSpec {
        learning_resource_spec()
    }

    #[instrument(skip_all, fields(resources_channel_id = %self.resources_channel_id))]
    async fn handle(&self, event: &InteractionEvent) -> CommandOutcome {
        let (Some(url), Some(description)) = (
            event.string_option(URL_OPTION),
            event.string_option(DESCRIPTION_OPTION),
        ) else {
            self.audit.send(AuditEntry::error(format!(
                "Whilst responding to command learning-resource: missing option {} or {}",
                URL_OPTION, DESCRIPTION_OPTION
            )));
            return CommandOutcome::Aborted;
        };

        let url = url.trim();
        if !is_valid_resource_url(url) {
            debug!(url, "Rejected invalid resource url");
            return match self
                .reply(event, "Whoops! It looks like your URL was invalid")
                .await
            {
                CommandOutcome::Completed => CommandOutcome::InvalidInput,
                other => other,
            };
        }

        let member = event.member();
        let post = submission_message(&member.mention(), url, description);
        if let Err(e) = self
            .client
            .send_message(&self.resources_channel_id, &post)
            .await
        {
            self.audit.send(AuditEntry::error(format!(
                "Whilst posting learning resource for {}: {}",
                member.username(),
                e.kind
            )));
            return match self
                .reply(event, "Sorry, your learning resource could not be posted")
                .await
            {
                CommandOutcome::Completed => CommandOutcome::Aborted,
                other => other,
            };
        }
        info!(user = %member.username(), "Learning resource posted");

        self.audit.send(AuditEntry::new(
            AuditCategory::LearningSubmission,
            format!("{} submitted a Learning Resource via the bot", member.username()),
        ));

        self.reply(event, "Thanks for posting a learning resource!")
            .await
    }
}
