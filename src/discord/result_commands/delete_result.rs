use tracing::info;

use crate::discord::discord_helper::{get_command_ctx, CmdCtx, Ephemeral};
use crate::store::StoreError;
use crate::tournament::RoomCode;
use crate::{fmt, Context, Error};

/// Delete the registered result for a room (staff only)
#[poise::command(slash_command, guild_only)]
pub async fn delete_result(
    ctx: Context<'_>,
    #[description = "Room code to clear (e.g. A-1)"] room: String,
) -> Result<(), Error> {
    let cmd_ctx = get_command_ctx(ctx).await?;
    delete_result_command(&cmd_ctx, room).await?;
    Ok(())
}

async fn delete_result_command(ctx: &CmdCtx<'_>, room: String) -> Result<(), Error> {
    let room = match RoomCode::parse(&room) {
        Ok(room) => room,
        Err(err) => {
            ctx.reply(
                Ephemeral::Private,
                fmt!("{err}. Valid codes are A-1 through H-15."),
            )
            .await?;
            return Ok(());
        }
    };

    match ctx.store.remove(&room) {
        Ok(()) => {}
        Err(StoreError::NotFound(room)) => {
            ctx.reply(
                Ephemeral::Private,
                fmt!("No result is registered for room {room}."),
            )
            .await?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    info!(room = %room, "Match result deleted");

    ctx.reply(
        Ephemeral::Private,
        fmt!("Deleted the result for room {room}."),
    )
    .await?;
    Ok(())
}
