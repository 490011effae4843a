//! Poise framework setup, error handling and event dispatch.

use crate::events::on_message;
use crate::reply::private_reply;
use poise::serenity_prelude as serenity;
use sc2clips_config::Config;
use sc2clips_gate::{CooldownPolicy, CooldownStore, Notice, UploadGate};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Gate for the clips channel.
    pub gate: UploadGate,
    /// Persisted cooldown records.
    pub store: Arc<CooldownStore>,
}

impl Data {
    /// Builds the shared data from a validated configuration and a loaded store.
    pub fn new(config: Arc<Config>, store: Arc<CooldownStore>) -> Self {
        let gate = UploadGate::new(
            config.discord.clips_channel_id,
            config.gating.replay_extension.clone(),
            CooldownPolicy::new(config.gating.cooldown_days),
        );
        Self {
            config,
            gate,
            store,
        }
    }
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("config", &"<Config>")
            .field("gate", &self.gate)
            .field("store", &self.store.path())
            .finish()
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// All commands, in registration order.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::rules::rules(),
        crate::my_status::my_status(),
        crate::reset_user::reset_user(),
    ]
}

/// Framework options for the given text command prefix.
pub fn framework_options(prefix: &str) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(event_handler(ctx, event, framework, data))
        },
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(prefix.to_string()),
            case_insensitive_commands: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates a new Poise framework builder.
pub fn create_framework(config: &Config) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options(&config.discord.command_prefix))
}

/// Global error handler for the framework.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::UnknownCommand { msg_content, .. } => {
            debug!(content = %msg_content, "Ignoring unknown command");
        }
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            debug!(
                command = %ctx.command().qualified_name,
                user = %ctx.author().id,
                "Command refused, missing administrator permission"
            );
            let notice = Notice::missing_permission(&ctx.command().qualified_name);
            if let Err(e) = private_reply(ctx, notice).await {
                error!(error = %e, "Failed to send permission notice");
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                command = %ctx.command().qualified_name,
                user = %ctx.author().id,
                error = %error,
                "Command failed"
            );
            if let Err(e) = private_reply(ctx, Notice::failure()).await {
                error!(error = %e, "Failed to send failure notice");
            }
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!(
                event = event.snake_case_name(),
                error = %error,
                "Event handler failed"
            );
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!(error = %e, "Error while handling framework error");
            }
        }
    }
}

/// Central event handler for Discord events.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Message { new_message } => {
            on_message(ctx, data, new_message).await;
        }
        serenity::FullEvent::GuildCreate { guild, .. } => {
            info!(guild = %guild.id, name = %guild.name, "Guild available");
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc2clips_common::test_utils::{create_temp_dir, discord_fixtures};
    use sc2clips_common::ChannelId;

    #[test]
    fn test_commands_are_registered() {
        let names: Vec<_> = commands().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["rules", "my_status", "reset_user"]);
    }

    #[test]
    fn test_prefix_comes_from_config() {
        let options = framework_options("?");
        assert_eq!(options.prefix_options.prefix.as_deref(), Some("?"));
        assert!(options.prefix_options.case_insensitive_commands);
    }

    #[test]
    fn test_data_builds_gate_from_config() {
        let dir = create_temp_dir();
        let mut config = Config::default();
        config.discord.clips_channel_id = discord_fixtures::test_channel_id();
        config.gating.cooldown_days = 14;
        let store = Arc::new(CooldownStore::load(dir.path().join("clips.json")));

        let data = Data::new(Arc::new(config), store);

        assert_eq!(data.gate.channel(), ChannelId(123456789012345678));
        assert_eq!(data.gate.extension(), ".SC2Replay");
        assert_eq!(data.gate.policy().window_days(), 14);
    }
}
