//! Inbound interaction events and the replies sent back for them.

use serde::{Deserialize, Serialize};

/// Message flag the platform reserves for "visible only to the invoker".
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

/// Kind of inbound interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum InteractionKind {
    /// A slash command invocation.
    ChatCommand,
    /// Autocomplete request while the user is still typing.
    Autocomplete,
    /// Button or select menu interaction.
    Component,
    /// Modal form submission.
    ModalSubmit,
    /// Anything else the platform may add.
    Other,
}

/// The member who triggered an interaction.
///
/// # Examples
///
/// ```
/// use fccbot_core::MemberRef;
///
/// let member = MemberRef::new("80351110224678912", "nelly");
/// assert_eq!(member.mention(), "<@80351110224678912>");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct MemberRef {
    /// Snowflake of the user
    user_id: String,
    /// Account name
    username: String,
}

impl MemberRef {
    /// Create a member reference.
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }

    /// Mention markup that pings the user.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}

/// Value supplied for a command option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
pub enum OptionValue {
    /// Integer value
    Integer(i64),
    /// String value
    String(String),
    /// Boolean value
    Boolean(bool),
}

impl OptionValue {
    /// The integer, if this is an integer option.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The text, if this is a string option.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

/// A (name, value) pair supplied with a command.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct CommandOption {
    /// Option name
    #[new(into)]
    name: String,
    /// Supplied value
    #[new(into)]
    value: OptionValue,
}

/// A single inbound interaction, discarded once handled.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct InteractionEvent {
    /// Interaction snowflake
    id: String,
    /// Continuation token used to answer the interaction
    token: String,
    /// Interaction kind
    kind: InteractionKind,
    /// Invoking member
    member: MemberRef,
    /// Channel the command was invoked in
    channel_id: String,
    /// Invoked command name
    command_name: String,
    /// Supplied options in the order the platform sent them
    #[builder(default)]
    options: Vec<CommandOption>,
}

impl InteractionEvent {
    /// Returns a builder for constructing an InteractionEvent.
    pub fn builder() -> InteractionEventBuilder {
        InteractionEventBuilder::default()
    }

    /// Whether this is a slash command invocation.
    pub fn is_chat_command(&self) -> bool {
        self.kind == InteractionKind::ChatCommand
    }

    /// Look up a supplied option by name.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    /// A supplied string option.
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.option(name).and_then(OptionValue::as_str)
    }

    /// A supplied integer option.
    pub fn integer_option(&self, name: &str) -> Option<i64> {
        self.option(name).and_then(OptionValue::as_i64)
    }

    /// Message that triggered the interaction. Always part of an erase.
    pub fn trigger_message_id(&self) -> &str {
        &self.id
    }
}

/// Direct response to an interaction.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct InteractionReply {
    /// Message text
    content: String,
    /// Only the invoker can see it
    #[getter(rename = "is_ephemeral")]
    ephemeral: bool,
}

impl InteractionReply {
    /// A reply only the invoking member can see.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }

    /// Message flags for the platform payload.
    pub fn flags(&self) -> u64 {
        if self.ephemeral { EPHEMERAL_FLAG } else { 0 }
    }
}
