//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use poise::serenity_prelude as serenity;
use sc2clips_commands::{create_framework, Data};
use sc2clips_config::{Config, ConfigLoader};
use sc2clips_gate::CooldownStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Gateway intents the bot needs: guild messages with their content for
/// gating, and direct messages for private replies.
pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::DIRECT_MESSAGES
}

/// Loads and validates the configuration, then applies command line overrides.
pub fn load_config(path: Option<&Path>, log_level: Option<&str>) -> BotResult<Config> {
    let mut config = ConfigLoader::load(path)?;
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
    Ok(config)
}

/// Main bot structure.
pub struct ClipsBot {
    config: Arc<Config>,
}

impl ClipsBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration the bot runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Connects to Discord and runs until the gateway closes or Ctrl-C.
    pub async fn start(&self) -> BotResult<()> {
        let store = Arc::new(CooldownStore::load(&self.config.gating.store_path));

        let config = Arc::clone(&self.config);
        let data_store = Arc::clone(&store);
        let framework = create_framework(&self.config)
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!(user = %ready.user.name, id = %ready.user.id, guilds = ready.guilds.len(), "Bot connected");

                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Slash commands registered globally");

                    ctx.set_activity(Some(serenity::ActivityData::playing(
                        config.discord.activity.clone(),
                    )));

                    Ok(Data::new(config, data_store))
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, intents())
            .framework(framework)
            .await?;

        let shard_manager = Arc::clone(&client.shard_manager);
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
                return;
            }
            info!("Received shutdown signal, starting graceful shutdown");
            shard_manager.shutdown_all().await;
        });

        info!(
            channel = %self.config.discord.clips_channel_id,
            extension = %self.config.gating.replay_extension,
            cooldown_days = self.config.gating.cooldown_days,
            "Starting SC2 Clips Bot"
        );
        client.start().await?;

        if let Err(e) = store.save() {
            warn!(error = %e, "Final cooldown store write failed");
        }
        info!(records = store.len(), "SC2 Clips Bot has shut down");
        Ok(())
    }
}
