//! The bot's slash commands.
//!
//! | command | tier |
//! |---|---|
//! | `/erase [multiple]` | admin |
//! | `/forcelog message` | admin |
//! | `/learning-resource resource-url resource-description` | regular |

mod erase;
mod forcelog;
mod learning;

pub use erase::{ERASE, EraseCommand, MAX_ERASE, MULTIPLE_OPTION, erase_spec};
pub use forcelog::{FORCELOG, ForceLogCommand, MESSAGE_OPTION, forcelog_spec};
pub use learning::{
    DESCRIPTION_OPTION, LEARNING_RESOURCE, LearningResourceCommand, URL_OPTION,
    is_valid_resource_url, learning_resource_spec, submission_message,
};

use crate::{AuditSink, CommandRegistry, PlatformClient};
use fccbot_core::{CommandSpec, PrivilegeTier};
use std::sync::Arc;

/// Every command schema with its tier, without building handlers.
pub fn standard_specs() -> Vec<(PrivilegeTier, CommandSpec)> {
    vec![
        (PrivilegeTier::Admin, erase_spec()),
        (PrivilegeTier::Admin, forcelog_spec()),
        (PrivilegeTier::Regular, learning_resource_spec()),
    ]
}

/// Registry holding every command with its privilege tier.
pub fn standard_registry(
    client: Arc<dyn PlatformClient>,
    audit: Arc<dyn AuditSink>,
    resources_channel_id: impl Into<String>,
) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry
        .register(
            PrivilegeTier::Admin,
            Arc::new(EraseCommand::new(client.clone(), audit.clone())),
        )
        .register(
            PrivilegeTier::Admin,
            Arc::new(ForceLogCommand::new(client.clone(), audit.clone())),
        )
        .register(
            PrivilegeTier::Regular,
            Arc::new(LearningResourceCommand::new(
                client,
                audit,
                resources_channel_id,
            )),
        );
    registry
}
