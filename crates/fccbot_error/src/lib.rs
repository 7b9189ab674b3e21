//! Error types for fccbot.
//!
//! Each domain has a `Kind` enum describing the failure and a wrapper struct
//! that records where the error was raised. [`FccbotError`] unifies them for
//! the binary.

#![warn(missing_docs)]

mod config;
mod discord;
mod security;

pub use config::{ConfigError, ConfigResult};
pub use discord::{DiscordError, DiscordErrorKind, DiscordResult};
pub use security::{SecurityError, SecurityErrorKind, SecurityResult};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum FccbotErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Discord platform error
    Discord(DiscordError),
    /// Permission lookup error
    Security(SecurityError),
}

impl std::fmt::Display for FccbotErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FccbotErrorKind::Config(e) => write!(f, "{}", e),
            FccbotErrorKind::Discord(e) => write!(f, "{}", e),
            FccbotErrorKind::Security(e) => write!(f, "{}", e),
        }
    }
}

/// Fccbot error with kind discrimination.
#[derive(Debug)]
pub struct FccbotError(Box<FccbotErrorKind>);

impl FccbotError {
    /// Create a new error from a kind.
    pub fn new(kind: FccbotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FccbotErrorKind {
        &self.0
    }
}

impl std::fmt::Display for FccbotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fccbot Error: {}", self.0)
    }
}

impl std::error::Error for FccbotError {}

impl<T> From<T> for FccbotError
where
    T: Into<FccbotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for fccbot operations.
pub type FccbotResult<T> = std::result::Result<T, FccbotError>;
