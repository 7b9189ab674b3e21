//! Declarative slash command schemas.

use serde::{Deserialize, Serialize};

/// Kind of application command.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CommandKind {
    /// Slash command typed into the chat input.
    #[default]
    Chat,
}

/// Value type of a command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OptionKind {
    /// Whole number
    Integer,
    /// Free text
    String,
    /// True/false flag
    Boolean,
}

/// Which members may invoke a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PrivilegeTier {
    /// Only members the permission oracle reports as admins.
    Admin,
    /// Any guild member.
    Regular,
}

/// Schema of a single command option.
///
/// # Examples
///
/// ```
/// use fccbot_core::{OptionKind, OptionSpec};
///
/// let option = OptionSpec::new("message", OptionKind::String, "Specify log message")
///     .required();
/// assert!(*option.is_required());
/// assert_eq!(*option.kind(), OptionKind::String);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct OptionSpec {
    /// Option name as typed by users
    name: String,
    /// Value type
    kind: OptionKind,
    /// Help text shown by the client
    description: String,
    /// Whether the platform forces users to supply it
    #[getter(rename = "is_required")]
    required: bool,
    /// Smallest accepted integer value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_value: Option<i64>,
    /// Largest accepted integer value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_value: Option<i64>,
}

impl OptionSpec {
    /// Create an optional option without bounds.
    pub fn new(name: impl Into<String>, kind: OptionKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required: false,
            min_value: None,
            max_value: None,
        }
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict an integer option to `min..=max`.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }
}

/// Schema of an application command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CommandSpec {
    /// Command name, unique within the guild
    name: String,
    /// Command kind
    kind: CommandKind,
    /// Help text shown by the client
    description: String,
    /// Options in declaration order
    #[serde(default)]
    options: Vec<OptionSpec>,
}

impl CommandSpec {
    /// Create a chat command with no options.
    pub fn chat(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CommandKind::Chat,
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Append an option.
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Names of the options users must supply.
    pub fn required_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|option| option.required)
            .map(|option| option.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_options_in_declaration_order() {
        let spec = CommandSpec::chat("learning-resource", "Submit a resource")
            .with_option(OptionSpec::new("resource-url", OptionKind::String, "A valid url").required())
            .with_option(OptionSpec::new("note", OptionKind::String, "Optional note"))
            .with_option(
                OptionSpec::new("resource-description", OptionKind::String, "Description")
                    .required(),
            );

        let required: Vec<&str> = spec.required_options().collect();
        assert_eq!(required, vec!["resource-url", "resource-description"]);
    }

    #[test]
    fn test_with_range_sets_bounds() {
        let option = OptionSpec::new("multiple", OptionKind::Integer, "Amount").with_range(0, 99);
        assert_eq!(*option.min_value(), Some(0));
        assert_eq!(*option.max_value(), Some(99));
        assert!(!option.is_required());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(PrivilegeTier::Admin.to_string(), "admin");
        assert_eq!(OptionKind::Integer.to_string(), "integer");
    }
}
