mod config;
mod discord;
mod logging;
mod markdown;
mod scheduler;
mod store;
mod tournament;
mod util;

use std::sync::Arc;

use poise::serenity_prelude::{self as serenity};
use tracing::info;

use crate::store::{JsonFileBackend, ResultStore};

#[derive(Debug)]
pub struct Data {
    pub config: config::AppConfig,
    pub store: Arc<ResultStore>,
}

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

type Context<'a> = poise::Context<'a, Data, Error>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    if std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    let cfg = config::load_config().expect("Could not load config");

    logging::init(&cfg)?;
    info!("Logging Initialised. Initialising Umacord application");

    let store = Arc::new(ResultStore::new(JsonFileBackend::new(
        cfg.results_path.clone(),
    )));
    store.initialize()?;

    let token = std::env::var(&cfg.token_var)
        .map_err(|e| format!("Failed to read bot token from env var {}: {e}", cfg.token_var))?;

    let commands = discord::commands();

    let cfg_for_scheduler = cfg.clone();
    let store_for_scheduler = store.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands,
            on_error: |error| {
                Box::pin(async move {
                    tracing::error!("Poise error: {:?}", error);
                    if let Err(e) = poise::builtins::on_error(error).await {
                        tracing::error!("Error while handling error: {:?}", e);
                    }
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                if cfg.clear_commands_on_startup {
                    clear_commands_from_server(ctx, &cfg).await?;
                }

                info!("Registering application commands");
                if let Some(guild_id) = cfg.test_guild {
                    let guild = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild)
                        .await?;
                } else {
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                }

                Ok(Data { config: cfg, store })
            })
        })
        .build();

    let mut client =
        serenity::ClientBuilder::new(&token, serenity::GatewayIntents::non_privileged())
            .framework(framework)
            .await?;

    scheduler::spawn_scheduler(cfg_for_scheduler, store_for_scheduler);

    info!("Setup complete. Starting client listener");

    client.start().await?;
    Ok(())
}

async fn clear_commands_from_server(
    ctx: &serenity::Context,
    cfg: &config::AppConfig,
) -> Result<(), Error> {
    info!("Clearing global commands...");
    serenity::Command::set_global_commands(ctx, Vec::new()).await?;
    info!("Cleared global application commands");

    if let Some(guild_id) = cfg.test_guild {
        info!("Clearing guild commands for {}...", guild_id);
        let guild = serenity::GuildId::new(guild_id);
        guild.set_commands(ctx, Vec::new()).await?;
        info!("Cleared guild application commands for guild {}", guild_id);
    }

    Ok(())
}
