//! Core data types for fccbot.
//!
//! Platform-independent values shared by the dispatcher, the handlers and
//! the Discord adapter: command schemas, interaction events, replies and
//! audit entries.

#![warn(missing_docs)]

mod audit;
mod command;
mod interaction;

pub use audit::{AuditCategory, AuditEntry};
pub use command::{CommandKind, CommandSpec, OptionKind, OptionSpec, PrivilegeTier};
pub use interaction::{
    CommandOption, EPHEMERAL_FLAG, InteractionEvent, InteractionEventBuilder,
    InteractionEventBuilderError, InteractionKind, InteractionReply, MemberRef, OptionValue,
};
