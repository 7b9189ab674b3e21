//! Discord-specific error types.
//!
//! Covers failures of the remote platform calls the bot makes: command
//! registration, interaction responses, message fetch/delete/send and the
//! lookups used to render log lines and resolve member roles.

use std::fmt;

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiscordErrorKind {
    /// Serenity API error (HTTP error, gateway error, rate limit).
    SerenityError(String),

    /// A string could not be parsed as a Discord snowflake.
    InvalidId(String),

    /// Channel not found, or not a guild channel.
    ChannelNotFound(String),

    /// Member not found in the configured guild.
    MemberNotFound(String),

    /// Creating an application command failed.
    CommandRegistrationFailed {
        /// Command name
        command: String,
        /// Underlying error text
        reason: String,
    },

    /// Responding to an interaction failed.
    InteractionFailed(String),

    /// Fetching channel history failed.
    MessageFetchFailed(String),

    /// Deleting channel messages failed.
    MessageDeleteFailed(String),

    /// Message failed to send.
    MessageSendFailed(String),
}

impl fmt::Display for DiscordErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SerenityError(msg) => write!(f, "Serenity API error: {msg}"),
            Self::InvalidId(msg) => write!(f, "Invalid ID: {msg}"),
            Self::ChannelNotFound(id) => write!(f, "Channel not found: {id}"),
            Self::MemberNotFound(id) => write!(f, "Member not found: {id}"),
            Self::CommandRegistrationFailed { command, reason } => {
                write!(f, "Failed to register command '{command}': {reason}")
            }
            Self::InteractionFailed(msg) => write!(f, "Interaction failed: {msg}"),
            Self::MessageFetchFailed(msg) => write!(f, "Message fetch failed: {msg}"),
            Self::MessageDeleteFailed(msg) => write!(f, "Message delete failed: {msg}"),
            Self::MessageSendFailed(msg) => write!(f, "Message send failed: {msg}"),
        }
    }
}

/// Discord error with source location tracking.
#[derive(Debug, Clone)]
pub struct DiscordError {
    /// The specific error condition
    pub kind: DiscordErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use fccbot_error::{DiscordError, DiscordErrorKind};
    ///
    /// let err = DiscordError::new(DiscordErrorKind::InvalidId("abc".to_string()));
    /// assert!(err.to_string().contains("Invalid ID: abc"));
    /// ```
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for DiscordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discord Error: {} at line {} in {}", self.kind, self.line, self.file)
    }
}

impl std::error::Error for DiscordError {}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;

#[cfg(feature = "discord")]
impl From<serenity::Error> for DiscordError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        DiscordError::new(DiscordErrorKind::SerenityError(err.to_string()))
    }
}
