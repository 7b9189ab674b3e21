//! fccbot: a Discord moderation and utility bot.
//!
//! Registers `/erase`, `/forcelog` and `/learning-resource` in one guild and
//! answers them. See [`fccbot_social`] for dispatch and the handlers.

#![warn(missing_docs)]

mod bootstrap;
mod cli;
mod config;
mod shutdown;

pub use bootstrap::{command_table, run};
pub use cli::Cli;
pub use config::{BotConfig, snowflake};
pub use shutdown::{ShutdownListener, flush_audit};
