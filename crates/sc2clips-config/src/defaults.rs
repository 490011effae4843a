//! Default values for every configuration section.

use crate::schema::{Config, DiscordConfig, GatingConfig};
use sc2clips_common::{ChannelId, LoggingConfig};
use std::path::PathBuf;

/// Default text command prefix.
pub const DEFAULT_COMMAND_PREFIX: &str = "!";
/// Default accepted attachment extension.
pub const DEFAULT_REPLAY_EXTENSION: &str = ".SC2Replay";
/// Default cooldown window in days.
pub const DEFAULT_COOLDOWN_DAYS: u32 = 30;
/// Default cooldown store location.
pub const DEFAULT_STORE_PATH: &str = "user_clips.json";
/// Default lifetime of fallback channel notices.
pub const DEFAULT_NOTICE_TTL_SECONDS: u64 = 10;

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            gating: GatingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            clips_channel_id: ChannelId(0),
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            activity: format!("{DEFAULT_COMMAND_PREFIX}rules for help"),
        }
    }
}

impl Default for GatingConfig {
    fn default() -> Self {
        Self {
            replay_extension: DEFAULT_REPLAY_EXTENSION.to_string(),
            cooldown_days: DEFAULT_COOLDOWN_DAYS,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            notice_ttl_seconds: DEFAULT_NOTICE_TTL_SECONDS,
        }
    }
}
