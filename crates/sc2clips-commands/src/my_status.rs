//! Status command reporting the invoker's own cooldown.

use crate::actions::user_id;
use crate::framework::{Context, Error};
use crate::reply::private_reply;
use chrono::Utc;
use sc2clips_gate::Notice;
use tracing::debug;

/// Shows when you can submit your next replay.
#[poise::command(prefix_command, slash_command, aliases("mi_estado"))]
pub async fn my_status(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let user = user_id(ctx.author().id);
    let status = data.gate.status(&data.store, user, Utc::now());

    debug!(user = %user, status = ?status, "Status requested");

    private_reply(ctx, Notice::status(&status)).await
}
