//! Integration tests for sc2clips-bot crate.
//!
//! These tests verify configuration loading and bot construction without
//! connecting to Discord.

use poise::serenity_prelude as serenity;
use sc2clips_bot::{intents, load_config, BotError, ClipsBot};
use sc2clips_common::test_utils::{create_temp_dir, init_test_logging};
use sc2clips_config::ConfigError;
use std::fs;

const CONFIG: &str = r#"
discord:
  token: "test-token"
  clips_channel_id: 123456789012345678
gating:
  cooldown_days: 30
  store_path: "data/user_clips.json"
"#;

#[test]
fn test_cli_log_level_overrides_config() {
    init_test_logging();
    let dir = create_temp_dir();
    let path = dir.path().join("config.yaml");
    fs::write(&path, CONFIG).unwrap();

    let config = load_config(Some(&path), Some("sc2clips_gate=trace")).unwrap();

    assert_eq!(config.logging.level, "sc2clips_gate=trace");
    assert!(!config.discord.token.is_empty());
}

#[test]
fn test_missing_file_is_a_config_error() {
    let dir = create_temp_dir();
    let result = load_config(Some(&dir.path().join("absent.yaml")), None);

    assert!(matches!(
        result,
        Err(BotError::Config(ConfigError::Io { .. }))
    ));
}

#[test]
fn test_bot_keeps_configuration() {
    let dir = create_temp_dir();
    let path = dir.path().join("config.yaml");
    fs::write(&path, CONFIG).unwrap();
    let config = load_config(Some(&path), None).unwrap();

    let bot = ClipsBot::new(config.clone());

    assert_eq!(bot.config(), &config);
    assert!(intents().contains(serenity::GatewayIntents::GUILD_MESSAGES));
}
