//! Discord integration built on serenity.

mod client;
mod conversions;
mod handler;

pub use client::{SerenityClient, parse_snowflake};
pub use conversions::{create_command, interaction_event};
pub use handler::FccbotHandler;
