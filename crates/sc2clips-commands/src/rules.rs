//! Rules command.

use crate::framework::{Context, Error};
use crate::reply::private_reply;

/// Shows the replay submission rules.
#[poise::command(prefix_command, slash_command, aliases("reglas", "help"))]
pub async fn rules(ctx: Context<'_>) -> Result<(), Error> {
    let notice = ctx.data().gate.rules_notice();
    private_reply(ctx, notice).await
}
