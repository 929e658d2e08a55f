use poise::serenity_prelude::Mentionable;
use tracing::info;

use crate::discord::discord_helper::{get_command_ctx, CmdCtx, Ephemeral};
use crate::store::StoreError;
use crate::tournament::{self, MatchResult, RoomCode};
use crate::{fmt, Context, Error};

/// Register the result of a finished match (reported by the winner)
#[poise::command(slash_command, guild_only, rename = "result")]
#[tracing::instrument(level = "trace", skip(ctx))]
pub async fn register_result(
    ctx: Context<'_>,
    #[description = "Room code (e.g. A-1)"] room: String,
    #[description = "Umamusume you raced with"] uma: String,
    #[description = "Opponent names, comma separated"] opponent: String,
) -> Result<(), Error> {
    let cmd_ctx = get_command_ctx(ctx).await?;
    register_result_command(&cmd_ctx, room, uma, opponent).await?;
    Ok(())
}

async fn register_result_command(
    ctx: &CmdCtx<'_>,
    room: String,
    uma: String,
    opponent: String,
) -> Result<(), Error> {
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

    let opponents = tournament::parse_opponents(&opponent);
    if opponents.is_empty() {
        ctx.reply(
            Ephemeral::Private,
            "At least one opponent name is required.",
        )
        .await?;
        return Ok(());
    }

    let result = MatchResult {
        room: room.clone(),
        winner: ctx.author_name.clone(),
        opponents: opponents.clone(),
        uma: uma.clone(),
    };

    match ctx.store.add(result) {
        Ok(()) => {}
        Err(StoreError::DuplicateRoom(room)) => {
            ctx.reply(
                Ephemeral::Private,
                fmt!("A result is already registered for room {room}."),
            )
            .await?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    info!(room = %room, uma = uma.as_str(), "Match result registered");

    let mention = ctx.discord_ctx.author().mention();
    ctx.reply(
        Ephemeral::Public,
        fmt!(
            "Result registered.\nRoom: {room}\nWinner: {mention}\nUmamusume: {uma}\nOpponents: {}",
            opponents.join(", ")
        ),
    )
    .await?;
    Ok(())
}
