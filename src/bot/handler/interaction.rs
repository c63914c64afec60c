use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::bot::command::CommandRouter;

/// Handle an incoming interaction
///
/// Slash commands go to the router; other interaction kinds are not used by the
/// bot and are ignored.
pub async fn handle_interaction_create(
    router: &CommandRouter,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Command(command) => {
            tracing::debug!(
                "Received /{} from {} in channel {}",
                command.data.name,
                command.user.id,
                command.channel_id
            );
            router.dispatch(&ctx, &command).await;
        }
        other => tracing::debug!("Ignoring {:?} interaction", other.kind()),
    }
}
