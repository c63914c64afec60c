use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{command::CommandRouter, handler::Handler},
    config::Config,
    error::AppError,
};

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `config` - Application configuration providing the token and guilds
/// - `router` - Commands to register and dispatch
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(config: &Config, router: CommandRouter) -> Result<Client, AppError> {
    // Default intents plus MESSAGE_CONTENT (privileged)
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(Arc::new(router), config.guild_ids.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot, blocking until the connection shuts down.
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if connecting to the gateway fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
