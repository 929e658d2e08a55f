use poise::{CreateReply, ReplyHandle};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::store::ResultStore;
use crate::{Context, Error};

pub(crate) enum Ephemeral {
    Public,
    Private,
}

pub(crate) struct CmdCtx<'a> {
    pub discord_ctx: Context<'a>,
    pub app_cfg: &'a AppConfig,
    pub store: &'a ResultStore,
    pub author_name: String,
}

pub(crate) async fn get_command_ctx(ctx: Context<'_>) -> Result<CmdCtx<'_>, Error> {
    let author = ctx.author();
    let author_name = author
        .global_name
        .as_ref()
        .map(|n| n.to_string())
        .unwrap_or_else(|| author.name.to_string());

    info!(
        command_name = ctx.invoked_command_name(),
        command_text = %ctx.invocation_string(),
        user_id = author.id.get(),
        user = author_name.as_str(),
        "Command Invoked"
    );

    let data = ctx.data();
    Ok(CmdCtx {
        app_cfg: &data.config,
        store: data.store.as_ref(),
        author_name,
        discord_ctx: ctx,
    })
}

impl<'a> CmdCtx<'a> {
    pub(crate) async fn reply(
        &self,
        visibility: Ephemeral,
        content: impl Into<String>,
    ) -> Result<ReplyHandle<'a>, Error> {
        let content = content.into();
        let ephemeral = matches!(visibility, Ephemeral::Private);
        debug!(content = content.as_str(), ephemeral, "Sending reply");

        Ok(self
            .discord_ctx
            .send(CreateReply::default().content(content).ephemeral(ephemeral))
            .await?)
    }
}

/// Cut a message down to the configured Discord limit on a char boundary.
pub(crate) fn clamp_message(mut content: String, max_len: usize) -> String {
    if content.len() <= max_len {
        return content;
    }

    let mut cut = max_len;
    while !content.is_char_boundary(cut) {
        cut -= 1;
    }
    content.truncate(cut);
    content.push_str("\n(truncated)");
    content
}
