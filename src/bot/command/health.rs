//! `/health`: a liveness probe available in dev mode.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::async_trait;

use crate::{bot::command::SlashCommand, error::AppError};

pub const HEALTH_RESPONSE: &str = "200 more like 💯 mirite";

/// Replies immediately with a fixed string. Never touches the backend.
pub struct HealthCommand;

impl HealthCommand {
    /// The reply sent for every invocation.
    pub fn response() -> CreateInteractionResponse {
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content(HEALTH_RESPONSE),
        )
    }
}

#[async_trait]
impl SlashCommand for HealthCommand {
    fn name(&self) -> &'static str {
        "health"
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Supports a Discord bot version of a liveness probe.")
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        tracing::debug!("Health check from {}", command.user.id);

        command.create_response(ctx, Self::response()).await?;

        Ok(())
    }
}
