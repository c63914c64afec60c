use std::sync::Arc;

use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

use crate::bot::command::CommandRouter;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub router: Arc<CommandRouter>,
    pub guild_ids: Vec<GuildId>,
}

impl Handler {
    pub fn new(router: Arc<CommandRouter>, guild_ids: Vec<GuildId>) -> Self {
        Self { router, guild_ids }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.router, &self.guild_ids, ctx, ready).await;
    }

    /// Called for every interaction, including slash command invocations
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.router, ctx, interaction).await;
    }
}
