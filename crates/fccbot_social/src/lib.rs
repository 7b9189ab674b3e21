//! Command registry, interaction dispatch and Discord integration for fccbot.
//!
//! # Flow
//!
//! A gateway event is converted into an [`fccbot_core::InteractionEvent`] and
//! handed to the [`InteractionDispatcher`]. The dispatcher looks the command
//! up in the [`CommandRegistry`], checks the member against the
//! [`fccbot_security::PermissionOracle`] for admin-tier commands, and runs the
//! command's [`CommandHandler`]. Handlers talk to the platform only through
//! [`PlatformClient`] and record what happened on an [`AuditSink`].
//!
//! # Platform Support
//!
//! - `discord` - serenity-backed client and gateway handler (requires `discord` feature)

#![warn(missing_docs)]

mod audit;
mod client;
mod dispatcher;
mod registry;

pub mod commands;

#[cfg(feature = "discord")]
mod discord;

pub use audit::{AuditSink, ChannelAuditSink};
pub use client::PlatformClient;
pub use dispatcher::{DispatchOutcome, InteractionDispatcher};
pub use registry::{
    CommandHandler, CommandInstaller, CommandOutcome, CommandRegistry, InstallReport, RegisteredCommand,
};

#[cfg(feature = "discord")]
pub use discord::{
    FccbotHandler, SerenityClient, create_command, interaction_event, parse_snowflake,
};
