//! Administrator command clearing a user's cooldown.

use crate::actions::user_id;
use crate::framework::{Context, Error};
use crate::reply::private_reply;
use poise::serenity_prelude as serenity;
use sc2clips_gate::Notice;
use tracing::info;

/// Resets a user's replay counter so they can submit again.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn reset_user(
    ctx: Context<'_>,
    #[description = "User whose counter is reset"] user: serenity::User,
) -> Result<(), Error> {
    let data = ctx.data();
    let outcome = data.gate.reset(&data.store, user_id(user.id));

    info!(
        admin = %ctx.author().id,
        target = %user.id,
        outcome = ?outcome,
        "Reset requested"
    );

    let display_name = user.global_name.as_deref().unwrap_or(&user.name);
    private_reply(ctx, Notice::reset(&outcome, display_name)).await
}
