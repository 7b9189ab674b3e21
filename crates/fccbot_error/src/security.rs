//! Security error types.

use crate::DiscordError;

/// Security error variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SecurityErrorKind {
    /// The privilege lookup for a member could not be completed.
    LookupFailed {
        /// Member being checked
        user_id: String,
        /// Underlying error text
        reason: String,
    },
}

impl std::fmt::Display for SecurityErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityErrorKind::LookupFailed { user_id, reason } => write!(
                f,
                "Failed to resolve privileges for user {}: {}",
                user_id, reason
            ),
        }
    }
}

/// Security error with source location.
#[derive(Debug, Clone)]
pub struct SecurityError {
    /// The specific error condition
    pub kind: SecurityErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SecurityError {
    /// Create a new SecurityError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SecurityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Wrap a platform failure that happened while looking up `user_id`.
    #[track_caller]
    pub fn lookup_failed(user_id: impl Into<String>, source: &DiscordError) -> Self {
        Self::new(SecurityErrorKind::LookupFailed {
            user_id: user_id.into(),
            reason: source.kind.to_string(),
        })
    }
}

impl std::fmt::Display for SecurityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Security Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for SecurityError {}

/// Result type for security checks.
pub type SecurityResult<T> = Result<T, SecurityError>;
