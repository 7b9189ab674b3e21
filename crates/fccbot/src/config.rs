//! Bot configuration loaded from TOML.

use derive_getters::Getters;
use fccbot_error::{ConfigError, ConfigResult};
use fccbot_security::AdminPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{instrument, warn};

/// Static configuration, loaded once before the bot connects.
///
/// Discord ids are kept as strings, the way Discord serializes snowflakes,
/// and checked when the file is loaded.
///
/// ```toml
/// application_id = "1100000000000000001"
/// guild_id = "1100000000000000002"
/// log_channel_id = "1100000000000000003"
/// learning_resources_channel_id = "1100000000000000004"
///
/// [admin]
/// role_ids = ["1100000000000000005"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct BotConfig {
    /// Bot application id
    application_id: String,
    /// Guild the commands are installed in
    guild_id: String,
    /// Channel receiving audit entries
    log_channel_id: String,
    /// Channel receiving learning resource submissions
    learning_resources_channel_id: String,
    /// Who counts as an admin
    #[serde(default)]
    admin: AdminPolicy,
}

/// Parse a decimal snowflake for a named config field.
pub fn snowflake(field: &str, value: &str) -> ConfigResult<u64> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::invalid_id(field, value)),
    }
}

impl BotConfig {
    /// Load and validate configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::unreadable(path.as_ref(), e))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::malformed(e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every id is a snowflake.
    pub fn validate(&self) -> ConfigResult<()> {
        snowflake("application_id", &self.application_id)?;
        snowflake("guild_id", &self.guild_id)?;
        snowflake("log_channel_id", &self.log_channel_id)?;
        snowflake(
            "learning_resources_channel_id",
            &self.learning_resources_channel_id,
        )?;
        for role in self.admin.role_ids() {
            snowflake("admin.role_ids", role)?;
        }
        for user in self.admin.user_ids() {
            snowflake("admin.user_ids", user)?;
        }

        if self.admin.is_empty() {
            warn!("No admin roles or users configured; admin commands will always be denied");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake() {
        assert_eq!(snowflake("guild_id", "1100000000000000002").unwrap(), 1100000000000000002);
        assert!(snowflake("guild_id", "").is_err());
        assert!(snowflake("guild_id", "0").is_err());
        let err = snowflake("guild_id", "general").unwrap_err();
        assert!(err.message.contains("guild_id"));
    }
}
