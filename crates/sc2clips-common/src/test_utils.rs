//! Test utilities and shared test helpers for the SC2 Clips Bot.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Test fixture for creating a mock timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Discord-related test utilities.
pub mod discord_fixtures {
    use crate::{ChannelId, MessageId, UserId};

    /// Create the channel ID used as the clips channel in tests.
    pub fn test_channel_id() -> ChannelId {
        ChannelId(123456789012345678)
    }

    /// Create a channel ID that is not the clips channel.
    pub fn other_channel_id() -> ChannelId {
        ChannelId(223456789012345678)
    }

    /// Create a test user ID.
    pub fn test_user_id() -> UserId {
        UserId(987654321098765432)
    }

    /// Create a test message ID.
    pub fn test_message_id() -> MessageId {
        MessageId(555555555555555555)
    }

    /// Create multiple test user IDs.
    pub fn test_user_ids(count: usize) -> Vec<UserId> {
        (0..count)
            .map(|i| UserId(100000000000000000 + i as u64))
            .collect()
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::UserId;
    use proptest::prelude::*;

    /// Strategy for generating valid Discord user IDs.
    pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
        (100000000000000000u64..=999999999999999999u64).prop_map(UserId)
    }

    /// Strategy for replay file names with arbitrary extension casing.
    pub fn replay_name_strategy() -> impl Strategy<Value = String> {
        (r"[a-zA-Z0-9_ -]{1,24}", r"\.[sS][cC]2[rR][eE][pP][lL][aA][yY]")
            .prop_map(|(stem, extension)| format!("{stem}{extension}"))
    }

    /// Strategy for file names that are never replays.
    pub fn non_replay_name_strategy() -> impl Strategy<Value = String> {
        (
            r"[a-zA-Z0-9_ -]{1,24}",
            prop::sample::select(vec![".png", ".mp4", ".zip", ".SC2Map", ".txt", ""]),
        )
            .prop_map(|(stem, extension)| format!("{stem}{extension}"))
    }
}
