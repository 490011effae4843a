//! Platform side effects of gate verdicts.
//!
//! [`ChatActions`] is the seam to the chat platform. The helpers here own the
//! fallback rules: a notice that cannot be sent as a direct message is posted
//! in the channel and removed after a short delay, and a message that cannot
//! be deleted is logged and left alone.

use crate::gate::{Candidate, UploadGate, Verdict};
use crate::notice::Notice;
use async_trait::async_trait;
use sc2clips_common::{ChannelId, MessageId, UserId};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Failure of a single platform call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The bot lacks the permission, or the user blocks direct messages.
    #[error("forbidden")]
    Forbidden,
    /// The target no longer exists.
    #[error("not found")]
    NotFound,
    /// Any other platform failure.
    #[error("{0}")]
    Other(String),
}

/// Platform calls needed by the gate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatActions: Send + Sync {
    /// Deletes `message` from `channel`.
    async fn delete_message(&self, channel: ChannelId, message: MessageId)
        -> Result<(), ActionError>;

    /// Sends `notice` to `user` as a direct message.
    async fn send_direct(&self, user: UserId, notice: &Notice) -> Result<(), ActionError>;

    /// Posts `notice` in `channel` and removes it after `ttl`.
    async fn send_channel_ephemeral(
        &self,
        channel: ChannelId,
        notice: &Notice,
        ttl: Duration,
    ) -> Result<(), ActionError>;
}

/// How a notice reached its recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Direct message.
    Direct,
    /// Time-limited channel message.
    ChannelFallback,
    /// Neither path worked.
    Undelivered,
}

/// Side effects performed for one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictOutcome {
    /// The original message was deleted.
    pub deleted: bool,
    /// Delivery of the feedback notice, if one was due.
    pub delivery: Option<Delivery>,
}

/// Sends `notice` to `user`, falling back to a channel notice.
pub async fn deliver_notice<A>(
    actions: &A,
    user: UserId,
    fallback_channel: ChannelId,
    notice: &Notice,
    ttl: Duration,
) -> Delivery
where
    A: ChatActions + ?Sized,
{
    let direct_error = match actions.send_direct(user, notice).await {
        Ok(()) => {
            debug!(user = %user, title = %notice.title, "Notice sent by direct message");
            return Delivery::Direct;
        }
        Err(e) => e,
    };

    warn!(
        user = %user,
        channel = %fallback_channel,
        error = %direct_error,
        "Direct message failed, posting notice in channel"
    );

    match actions
        .send_channel_ephemeral(fallback_channel, notice, ttl)
        .await
    {
        Ok(()) => Delivery::ChannelFallback,
        Err(e) => {
            error!(
                user = %user,
                channel = %fallback_channel,
                error = %e,
                "Notice could not be delivered"
            );
            Delivery::Undelivered
        }
    }
}

/// Deletes a message, logging why it could not be deleted.
pub async fn remove_message<A>(actions: &A, channel: ChannelId, message: MessageId) -> bool
where
    A: ChatActions + ?Sized,
{
    match actions.delete_message(channel, message).await {
        Ok(()) => true,
        Err(ActionError::Forbidden) => {
            warn!(channel = %channel, message = %message, "Missing permission to delete message");
            false
        }
        Err(ActionError::NotFound) => {
            info!(channel = %channel, message = %message, "Message was already deleted");
            false
        }
        Err(ActionError::Other(e)) => {
            error!(channel = %channel, message = %message, error = %e, "Failed to delete message");
            false
        }
    }
}

/// Performs the side effects of `verdict` for `candidate`.
///
/// Rejections delete the original message before the author is told why.
/// Accepted uploads stay in the channel.
pub async fn execute_verdict<A>(
    actions: &A,
    gate: &UploadGate,
    candidate: &Candidate,
    verdict: &Verdict,
    ttl: Duration,
) -> VerdictOutcome
where
    A: ChatActions + ?Sized,
{
    let Some(notice) = gate.notice_for(verdict) else {
        return VerdictOutcome {
            deleted: false,
            delivery: None,
        };
    };

    let deleted = if verdict.deletes_message() {
        remove_message(actions, candidate.channel, candidate.message).await
    } else {
        false
    };

    let delivery = deliver_notice(actions, candidate.author, candidate.channel, &notice, ttl).await;

    VerdictOutcome {
        deleted,
        delivery: Some(delivery),
    }
}
