//! Gating of messages posted in the clips channel.

use crate::actions::{channel_id, message_id, user_id, SerenityActions};
use crate::framework::Data;
use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;
use sc2clips_gate::{execute_verdict, Candidate, Verdict};
use std::sync::Arc;
use tracing::debug;

/// Whether a message takes part in gating at all.
///
/// Bot messages and text command invocations without attachments are left to
/// the framework. A message carrying files is always gated, prefix or not.
pub fn is_gated_message(
    from_bot: bool,
    content: &str,
    prefix: &str,
    has_attachments: bool,
) -> bool {
    !from_bot && (has_attachments || !content.starts_with(prefix))
}

/// Builds the gate's view of `message` as evaluated at `at`.
pub fn candidate_from(message: &serenity::Message, at: DateTime<Utc>) -> Candidate {
    Candidate {
        channel: channel_id(message.channel_id),
        author: user_id(message.author.id),
        message: message_id(message.id),
        attachments: message
            .attachments
            .iter()
            .map(|attachment| attachment.filename.clone())
            .collect(),
        at,
    }
}

/// Evaluates a newly created message and carries out the verdict.
pub async fn on_message(ctx: &serenity::Context, data: &Data, message: &serenity::Message) {
    if !is_gated_message(
        message.author.bot,
        &message.content,
        &data.config.discord.command_prefix,
        !message.attachments.is_empty(),
    ) {
        return;
    }

    let candidate = candidate_from(message, Utc::now());
    let verdict = data.gate.evaluate(&data.store, &candidate);
    if verdict == Verdict::Ignore {
        return;
    }

    let actions = SerenityActions::new(Arc::clone(&ctx.http));
    let outcome = execute_verdict(
        &actions,
        &data.gate,
        &candidate,
        &verdict,
        data.config.gating.notice_ttl(),
    )
    .await;

    debug!(
        user = %candidate.author,
        verdict = verdict.label(),
        deleted = outcome.deleted,
        delivery = ?outcome.delivery,
        "Verdict carried out"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_messages_are_not_gated() {
        assert!(!is_gated_message(true, "", "!", false));
        assert!(!is_gated_message(true, "look at this", "!", true));
    }

    #[test]
    fn test_command_invocations_are_not_gated() {
        assert!(!is_gated_message(false, "!rules", "!", false));
        assert!(!is_gated_message(false, "?mi_estado", "?", false));
    }

    #[test]
    fn test_prefixed_message_with_files_is_gated() {
        assert!(is_gated_message(false, "!gg", "!", true));
        assert!(is_gated_message(false, "!rules", "!", true));
    }

    #[test]
    fn test_user_uploads_are_gated() {
        assert!(is_gated_message(false, "", "!", true));
        assert!(is_gated_message(false, "gg wp", "!", false));
        assert!(is_gated_message(false, "!rules", "?", false));
    }
}
