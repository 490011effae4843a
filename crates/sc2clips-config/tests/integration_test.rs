//! Integration tests for sc2clips-config crate.

use sc2clips_common::ChannelId;
use sc2clips_config::{Config, ConfigError, ConfigLoader, DEFAULT_COOLDOWN_DAYS};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

fn valid_config() -> Config {
    let mut config = Config::default();
    config.discord.token = "test.token.value".to_string();
    config.discord.clips_channel_id = ChannelId(123456789012345678);
    config
}

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();

    // Default config should fail validation due to missing token and channel
    assert!(config.validate().is_err());

    config.discord.token = "test_token".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("CLIPS_CHANNEL_ID"));

    config.discord.clips_channel_id = ChannelId(1);
    assert!(config.validate().is_ok());
}

#[test]
fn test_defaults_match_upload_rules() {
    let config = Config::default();
    assert_eq!(config.gating.replay_extension, ".SC2Replay");
    assert_eq!(config.gating.cooldown_days, DEFAULT_COOLDOWN_DAYS);
    assert_eq!(config.gating.cooldown_days, 30);
    assert_eq!(config.gating.store_path, PathBuf::from("user_clips.json"));
    assert_eq!(config.gating.notice_ttl(), Duration::from_secs(10));
    assert_eq!(config.discord.command_prefix, "!");
    assert_eq!(config.discord.activity, "!rules for help");
}

#[test]
fn test_rejects_bad_gating_values() {
    let mut config = valid_config();
    config.gating.replay_extension = "SC2Replay".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = valid_config();
    config.gating.cooldown_days = 0;
    assert!(config.validate().is_err());

    let mut config = valid_config();
    config.gating.notice_ttl_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let yaml = r#"
discord:
  token: "yaml.token.value"
  clips_channel_id: 998877665544332211
gating:
  cooldown_days: 14
logging:
  level: debug
"#;

    let config = ConfigLoader::from_yaml_str(yaml).unwrap();

    assert_eq!(config.discord.token, "yaml.token.value");
    assert_eq!(config.discord.clips_channel_id, ChannelId(998877665544332211));
    assert_eq!(config.discord.command_prefix, "!");
    assert_eq!(config.gating.cooldown_days, 14);
    assert_eq!(config.gating.replay_extension, ".SC2Replay");
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "discord:\n  token: \"file.token.value\"\n  clips_channel_id: 42\ngating:\n  store_path: data/clips.json"
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(file.path()).unwrap();
    assert_eq!(config.discord.clips_channel_id, ChannelId(42));
    assert_eq!(config.gating.store_path, PathBuf::from("data/clips.json"));
}

#[test]
fn test_load_from_missing_file() {
    let err = ConfigLoader::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = ConfigLoader::from_yaml_str("discord: [unclosed").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_overrides_win_over_file_values() {
    let mut config = ConfigLoader::from_yaml_str("gating:\n  cooldown_days: 14\n").unwrap();

    ConfigLoader::apply_overrides(&mut config, |name| match name {
        "COOLDOWN_DAYS" => Some("7".to_string()),
        "REPLAY_EXTENSION" => Some(".rep".to_string()),
        "LOG_DIRECTORY" => Some("logs".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.gating.cooldown_days, 7);
    assert_eq!(config.gating.replay_extension, ".rep");
    assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
}

#[test]
fn test_debug_output_hides_token() {
    let config = valid_config();
    let rendered = format!("{config:?}");

    assert!(!rendered.contains("test.token.value"));
    assert!(rendered.contains("<redacted>"));
    assert!(rendered.contains("123456789012345678"));

    let unset = format!("{:?}", Config::default().discord);
    assert!(unset.contains("<unset>"));
}
