//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. Slash
//! commands are registered per guild here so they only appear in the guilds the
//! bot is configured for, and so changes show up without Discord's global
//! command propagation delay.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};

use crate::bot::command::CommandRouter;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the router's command definitions in every configured guild. A
/// failure in one guild is logged and does not prevent registration in the rest.
///
/// # Arguments
/// - `router` - Router providing the command definitions
/// - `guild_ids` - Guilds to register the commands in
/// - `ctx` - Discord context for API requests
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    router: &CommandRouter,
    guild_ids: &[GuildId],
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is ready and online!", ready.user.name);

    for guild_id in guild_ids {
        match guild_id.set_commands(&ctx.http, router.definitions()).await {
            Ok(commands) => tracing::info!(
                "Registered {} commands in guild {}",
                commands.len(),
                guild_id
            ),
            Err(e) => tracing::error!("Failed to register commands in guild {}: {}", guild_id, e),
        }
    }
}
