//! Audit log entries.

use serde::{Deserialize, Serialize};

/// Category an audit entry is filed under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum AuditCategory {
    /// Something failed
    #[strum(serialize = "ERROR")]
    Error,
    /// Startup finished
    #[strum(serialize = "READY")]
    Ready,
    /// Messages were erased
    #[strum(serialize = "ERASE")]
    CommandErase,
    /// An admin wrote to the log on purpose
    #[strum(serialize = "FORCE LOG")]
    CommandForceLog,
    /// A learning resource was submitted
    #[strum(serialize = "LEARNING")]
    LearningSubmission,
}

/// A write-once record for the audit channel.
///
/// # Examples
///
/// ```
/// use fccbot_core::{AuditCategory, AuditEntry};
///
/// let entry = AuditEntry::new(AuditCategory::CommandErase, "User nelly | channel general");
/// assert_eq!(entry.render(), "**ERASE** | User nelly | channel general");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct AuditEntry {
    /// Category
    category: AuditCategory,
    /// Free text
    #[new(into)]
    text: String,
}

impl AuditEntry {
    /// Shorthand for an error entry.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(AuditCategory::Error, text)
    }

    /// Text posted to the audit channel.
    pub fn render(&self) -> String {
        format!("**{}** | {}", self.category, self.text)
    }
}
