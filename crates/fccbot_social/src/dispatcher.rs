//! Interaction dispatcher: privilege check, then route by command name.

use crate::{AuditSink, CommandOutcome, CommandRegistry};
use fccbot_core::{AuditEntry, InteractionEvent, PrivilegeTier};
use fccbot_security::PermissionOracle;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// What the dispatcher did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchOutcome {
    /// Not a slash command invocation.
    Ignored,
    /// No command registered under that name.
    UnknownCommand,
    /// The privilege lookup failed.
    LookupFailed,
    /// The member lacks the required tier.
    Denied,
    /// The command handler ran.
    Handled(CommandOutcome),
}

/// Routes interaction events to registered command handlers.
///
/// Admin-tier commands are only handed over after the permission oracle
/// confirms the invoking member. Denied or unresolved members get no
/// response at all.
#[derive(derive_new::new, derive_getters::Getters)]
pub struct InteractionDispatcher {
    registry: Arc<CommandRegistry>,
    oracle: Arc<dyn PermissionOracle>,
    audit: Arc<dyn AuditSink>,
}

impl InteractionDispatcher {
    /// Handle one inbound event to completion.
    #[instrument(
        skip_all,
        fields(
            interaction_id = %event.id(),
            command = %event.command_name(),
            user_id = %event.member().user_id(),
            channel_id = %event.channel_id(),
        )
    )]
    pub async fn dispatch(&self, event: &InteractionEvent) -> DispatchOutcome {
        if !event.is_chat_command() {
            debug!(kind = %event.kind(), "Ignoring non-command interaction");
            return DispatchOutcome::Ignored;
        }

        let Some(command) = self.registry.get(event.command_name()) else {
            debug!("No handler registered for command");
            return DispatchOutcome::UnknownCommand;
        };

        if *command.tier() == PrivilegeTier::Admin {
            let user_id = event.member().user_id();
            match self.oracle.is_admin(user_id).await {
                Ok(true) => debug!("Admin privileges confirmed"),
                Ok(false) => {
                    warn!("Non-admin member invoked an admin command");
                    self.audit.send(AuditEntry::error(format!(
                        "admin commands were exposed to {}",
                        user_id
                    )));
                    return DispatchOutcome::Denied;
                }
                Err(e) => {
                    warn!(error = %e, "Could not evaluate admin privileges");
                    self.audit.send(AuditEntry::error(format!(
                        "Whilst evaluating admin privileges: {}",
                        e.kind
                    )));
                    return DispatchOutcome::LookupFailed;
                }
            }
        }

        let outcome = command.handler().handle(event).await;
        info!(%outcome, "Command handled");
        DispatchOutcome::Handled(outcome)
    }
}
