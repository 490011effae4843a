//! Configuration schema definitions using serde.

use crate::loader::ConfigError;
use sc2clips_common::{ChannelId, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for the SC2 Clips Bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Upload gating configuration.
    pub gating: GatingConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Channel in which replay uploads are gated.
    pub clips_channel_id: ChannelId,
    /// Prefix for text commands.
    pub command_prefix: String,
    /// Text shown as the bot's "Playing" activity.
    pub activity: String,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("DiscordConfig")
            .field("token", &token)
            .field("clips_channel_id", &self.clips_channel_id)
            .field("command_prefix", &self.command_prefix)
            .field("activity", &self.activity)
            .finish()
    }
}

/// Upload gating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatingConfig {
    /// Accepted attachment extension, including the leading dot.
    pub replay_extension: String,
    /// Length of the cooldown window in whole days.
    pub cooldown_days: u32,
    /// Path of the JSON file holding cooldown records.
    pub store_path: PathBuf,
    /// Lifetime of channel notices used when a DM cannot be delivered.
    pub notice_ttl_seconds: u64,
}

impl GatingConfig {
    /// Lifetime of fallback channel notices.
    pub const fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_seconds)
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discord.token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Discord token cannot be empty (set DISCORD_TOKEN)".to_string(),
            ));
        }

        if self.discord.clips_channel_id.0 == 0 {
            return Err(ConfigError::Invalid(
                "clips channel id is required (set CLIPS_CHANNEL_ID)".to_string(),
            ));
        }

        if self.discord.command_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "command prefix cannot be empty".to_string(),
            ));
        }

        let extension = &self.gating.replay_extension;
        if extension.len() < 2 || !extension.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "replay extension '{extension}' must start with '.'"
            )));
        }

        if self.gating.cooldown_days == 0 {
            return Err(ConfigError::Invalid(
                "cooldown must be at least one day".to_string(),
            ));
        }

        if self.gating.notice_ttl_seconds == 0 {
            return Err(ConfigError::Invalid(
                "notice TTL must be at least one second".to_string(),
            ));
        }

        if self.gating.store_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "store path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
