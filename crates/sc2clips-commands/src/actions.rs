//! Serenity implementation of the gate's chat actions.

use crate::reply::notice_embed;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use sc2clips_common::{ChannelId, MessageId, UserId};
use sc2clips_gate::{ActionError, ChatActions, Notice};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Chat actions performed through the Discord HTTP API.
#[derive(Clone)]
pub struct SerenityActions {
    http: Arc<serenity::Http>,
}

impl SerenityActions {
    /// Creates actions sharing the client's HTTP handle.
    pub const fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }

    fn http(&self) -> &serenity::Http {
        &self.http
    }
}

impl std::fmt::Debug for SerenityActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerenityActions").finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatActions for SerenityActions {
    async fn delete_message(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<(), ActionError> {
        to_serenity_channel(channel)
            .delete_message(self.http(), serenity::MessageId::new(message.0))
            .await
            .map_err(action_error)
    }

    async fn send_direct(&self, user: UserId, notice: &Notice) -> Result<(), ActionError> {
        let dm = serenity::UserId::new(user.0)
            .create_dm_channel(self.http())
            .await
            .map_err(action_error)?;
        dm.send_message(
            self.http(),
            serenity::CreateMessage::new().embed(notice_embed(notice)),
        )
        .await
        .map_err(action_error)?;
        Ok(())
    }

    async fn send_channel_ephemeral(
        &self,
        channel: ChannelId,
        notice: &Notice,
        ttl: Duration,
    ) -> Result<(), ActionError> {
        let sent = to_serenity_channel(channel)
            .send_message(
                self.http(),
                serenity::CreateMessage::new().embed(notice_embed(notice)),
            )
            .await
            .map_err(action_error)?;

        let http = Arc::clone(&self.http);
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Err(e) = sent.delete(&*http).await {
                debug!(message = %sent.id, error = %e, "Failed to expire channel notice");
            }
        });

        Ok(())
    }
}

/// Maps a Serenity error onto the gate's failure kinds.
pub fn action_error(error: serenity::Error) -> ActionError {
    let status = match &error {
        serenity::Error::Http(http) => http.status_code().map(|s| s.as_u16()),
        _ => None,
    };
    match status {
        Some(403) => ActionError::Forbidden,
        Some(404) => ActionError::NotFound,
        _ => ActionError::Other(error.to_string()),
    }
}

/// Converts a gate channel id into a Serenity one.
pub fn to_serenity_channel(channel: ChannelId) -> serenity::ChannelId {
    serenity::ChannelId::new(channel.0)
}

/// Converts a Serenity channel id into a gate one.
pub const fn channel_id(channel: serenity::ChannelId) -> ChannelId {
    ChannelId(channel.get())
}

/// Converts a Serenity user id into a gate one.
pub const fn user_id(user: serenity::UserId) -> UserId {
    UserId(user.get())
}

/// Converts a Serenity message id into a gate one.
pub const fn message_id(message: serenity::MessageId) -> MessageId {
    MessageId(message.get())
}
