//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;
use sc2clips_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
