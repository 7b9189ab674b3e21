//! Configuration loading and validation.

use fccbot::{BotConfig, command_table};
use std::io::Write;

const VALID: &str = r#"
application_id = "1100000000000000001"
guild_id = "1100000000000000002"
log_channel_id = "1100000000000000003"
learning_resources_channel_id = "1100000000000000004"

[admin]
role_ids = ["1100000000000000005"]
user_ids = ["1100000000000000006"]
"#;

#[test]
fn test_valid_config_loads() {
    let config = BotConfig::from_toml_str(VALID).expect("valid config");
    assert_eq!(config.guild_id(), "1100000000000000002");
    assert_eq!(config.learning_resources_channel_id(), "1100000000000000004");
    assert!(config.admin().role_ids().contains("1100000000000000005"));
    assert!(config.admin().is_admin_user("1100000000000000006"));
}

#[test]
fn test_admin_section_is_optional() {
    let content = VALID.split("[admin]").next().unwrap();
    let config = BotConfig::from_toml_str(content).expect("valid config");
    assert!(config.admin().is_empty());
}

#[test]
fn test_invalid_snowflake_is_rejected() {
    let content = VALID.replace("\"1100000000000000003\"", "\"bot-logs\"");
    let err = BotConfig::from_toml_str(&content).unwrap_err();
    assert!(err.message.contains("log_channel_id"));
}

#[test]
fn test_invalid_admin_role_is_rejected() {
    let content = VALID.replace("\"1100000000000000005\"", "\"moderators\"");
    let err = BotConfig::from_toml_str(&content).unwrap_err();
    assert!(err.message.contains("admin.role_ids"));
}

#[test]
fn test_missing_field_is_a_parse_error() {
    let content = VALID.replace("guild_id = \"1100000000000000002\"", "");
    let err = BotConfig::from_toml_str(&content).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID.as_bytes()).unwrap();

    let config = BotConfig::from_file(file.path()).expect("valid config file");
    assert_eq!(config.application_id(), "1100000000000000001");
}

#[test]
fn test_missing_file() {
    let err = BotConfig::from_file("/nonexistent/fccbot.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_command_table_lists_every_command() {
    let table = command_table().expect("table renders");
    assert!(table.contains("erase"));
    assert!(table.contains("forcelog"));
    assert!(table.contains("learning-resource"));
    assert!(table.contains("admin"));
    assert!(table.contains("regular"));
}
