//! Private replies to command invocations.

use crate::actions::{channel_id, message_id, user_id, SerenityActions};
use crate::framework::{Context, Error};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use sc2clips_gate::{deliver_notice, remove_message, Notice, NOTICE_FOOTER};
use std::sync::Arc;

/// Renders a notice as an embed.
pub fn notice_embed(notice: &Notice) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(notice.title.as_str())
        .description(notice.body.as_str())
        .colour(notice.severity.colour())
        .footer(serenity::CreateEmbedFooter::new(NOTICE_FOOTER))
        .timestamp(serenity::Timestamp::now())
}

/// Answers the invoker without leaving a public reply.
///
/// Slash commands get an ephemeral response. For text commands the invoking
/// message is deleted and the notice goes out by direct message, or as a
/// short-lived channel message when direct messages are closed.
pub async fn private_reply(ctx: Context<'_>, notice: Notice) -> Result<(), Error> {
    match ctx {
        poise::Context::Application(_) => {
            ctx.send(
                CreateReply::default()
                    .embed(notice_embed(&notice))
                    .ephemeral(true),
            )
            .await?;
        }
        poise::Context::Prefix(prefix) => {
            let actions = SerenityActions::new(Arc::clone(&ctx.serenity_context().http));
            let channel = channel_id(prefix.msg.channel_id);

            remove_message(&actions, channel, message_id(prefix.msg.id)).await;
            deliver_notice(
                &actions,
                user_id(ctx.author().id),
                channel,
                &notice,
                ctx.data().config.gating.notice_ttl(),
            )
            .await;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc2clips_gate::Severity;

    #[test]
    fn test_embed_carries_notice() {
        let embed = notice_embed(&Notice::invalid_file(".SC2Replay"));
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["title"], "❌ Invalid file");
        assert_eq!(json["color"], Severity::Rejected.colour());
        assert_eq!(json["footer"]["text"], NOTICE_FOOTER);
        assert!(json["description"]
            .as_str()
            .unwrap()
            .contains(".SC2Replay"));
    }
}
