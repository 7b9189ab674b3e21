//! Conversions between serenity types and fccbot's platform-independent ones.

use fccbot_core::{
    CommandOption, CommandSpec, InteractionEvent, InteractionKind, MemberRef, OptionKind,
    OptionSpec, OptionValue,
};
use fccbot_error::{DiscordError, DiscordErrorKind, DiscordResult};
use serenity::all::{
    CommandDataOptionValue, CommandInteraction, CommandOptionType, CommandType, CreateCommand,
    CreateCommandOption,
};

/// Build the serenity command builder for a spec.
pub fn create_command(spec: &CommandSpec) -> CreateCommand {
    spec.options().iter().fold(
        CreateCommand::new(spec.name())
            .kind(CommandType::ChatInput)
            .description(spec.description()),
        |command, option| command.add_option(create_option(option)),
    )
}

fn create_option(option: &OptionSpec) -> CreateCommandOption {
    let kind = match option.kind() {
        OptionKind::Integer => CommandOptionType::Integer,
        OptionKind::String => CommandOptionType::String,
        OptionKind::Boolean => CommandOptionType::Boolean,
    };

    let mut builder = CreateCommandOption::new(kind, option.name(), option.description())
        .required(*option.is_required());
    if let Some(min) = (*option.min_value()).and_then(|v| u64::try_from(v).ok()) {
        builder = builder.min_int_value(min);
    }
    if let Some(max) = (*option.max_value()).and_then(|v| u64::try_from(v).ok()) {
        builder = builder.max_int_value(max);
    }
    builder
}

fn option_value(value: &CommandDataOptionValue) -> Option<OptionValue> {
    match value {
        CommandDataOptionValue::Integer(v) => Some(OptionValue::Integer(*v)),
        CommandDataOptionValue::String(v) => Some(OptionValue::String(v.clone())),
        CommandDataOptionValue::Boolean(v) => Some(OptionValue::Boolean(*v)),
        _ => None,
    }
}

/// Convert a command (or autocomplete) interaction into an [`InteractionEvent`].
///
/// Context-menu commands map to [`InteractionKind::Other`]. Options of types
/// the bot never declares are dropped.
pub fn interaction_event(
    interaction: &CommandInteraction,
    kind: InteractionKind,
) -> DiscordResult<InteractionEvent> {
    let kind = match (kind, interaction.data.kind) {
        (InteractionKind::ChatCommand, CommandType::ChatInput) => InteractionKind::ChatCommand,
        (InteractionKind::ChatCommand, _) => InteractionKind::Other,
        (other, _) => other,
    };

    let user = interaction
        .member
        .as_ref()
        .map(|member| &member.user)
        .unwrap_or(&interaction.user);

    let options = interaction
        .data
        .options
        .iter()
        .filter_map(|option| {
            option_value(&option.value).map(|value| CommandOption::new(option.name.clone(), value))
        })
        .collect::<Vec<_>>();

    InteractionEvent::builder()
        .id(interaction.id.to_string())
        .token(interaction.token.clone())
        .kind(kind)
        .member(MemberRef::new(user.id.to_string(), user.name.clone()))
        .channel_id(interaction.channel_id.to_string())
        .command_name(interaction.data.name.clone())
        .options(options)
        .build()
        .map_err(|e| DiscordError::new(DiscordErrorKind::InteractionFailed(e.to_string())))
}
