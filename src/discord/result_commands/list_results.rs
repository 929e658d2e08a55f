use crate::discord::discord_helper::{clamp_message, get_command_ctx, CmdCtx, Ephemeral};
use crate::markdown::{TableBuilder, Text};
use crate::tournament::MatchResult;
use crate::{fmt, Context, Error};

/// List all registered match results (staff only)
#[poise::command(slash_command, guild_only, rename = "results")]
pub async fn list_results(ctx: Context<'_>) -> Result<(), Error> {
    let cmd_ctx = get_command_ctx(ctx).await?;
    list_results_command(&cmd_ctx).await?;
    Ok(())
}

async fn list_results_command(ctx: &CmdCtx<'_>) -> Result<(), Error> {
    let results = ctx.store.list()?;

    if results.is_empty() {
        ctx.reply(
            Ephemeral::Private,
            "No match results have been registered yet.",
        )
        .await?;
        return Ok(());
    }

    let content = clamp_message(format_results(&results), ctx.app_cfg.max_message_length);
    ctx.reply(Ephemeral::Public, content).await?;
    Ok(())
}

fn format_results(results: &[MatchResult]) -> String {
    let title = fmt!("{} match result(s) registered:", results.len());

    let rooms = results.iter().map(|r| r.room.as_str().to_string()).collect();
    let winners = results.iter().map(|r| r.winner.clone()).collect();
    let umas = results.iter().map(|r| r.uma.clone()).collect();
    let opponents = results.iter().map(|r| r.opponents.join(", ")).collect();

    TableBuilder::new(title)
        .add_column(Text::new("Room", rooms))
        .add_column(Text::new("Winner", winners))
        .add_column(Text::new("Umamusume", umas))
        .add_column(Text::new("Opponents", opponents))
        .build()
        .render()
}
