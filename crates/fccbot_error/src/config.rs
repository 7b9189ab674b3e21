//! Configuration error types.

/// Problem with the bot's configuration file, with source location.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fccbot_error::ConfigError;
    ///
    /// let err = ConfigError::new("guild_id is not a valid snowflake");
    /// assert!(err.message.contains("snowflake"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl ConfigError {
    /// A configured id is not a Discord snowflake.
    ///
    /// ```
    /// use fccbot_error::ConfigError;
    ///
    /// let err = ConfigError::invalid_id("guild_id", "general");
    /// assert_eq!(err.message, "guild_id is not a valid Discord id: 'general'");
    /// ```
    #[track_caller]
    pub fn invalid_id(field: &str, value: &str) -> Self {
        Self::new(format!("{} is not a valid Discord id: '{}'", field, value))
    }

    /// The config file could not be read.
    #[track_caller]
    pub fn unreadable(path: &std::path::Path, source: impl std::fmt::Display) -> Self {
        Self::new(format!(
            "Failed to read config file {}: {}",
            path.display(),
            source
        ))
    }

    /// The config text is not valid TOML for the expected shape.
    #[track_caller]
    pub fn malformed(source: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to parse config: {}", source))
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}

/// Result type for configuration loading and id validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
