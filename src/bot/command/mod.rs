//! Slash commands and the router that dispatches them.
//!
//! Commands are registered explicitly on a [`CommandRouter`] during bootstrap.
//! The router supplies the command definitions pushed to each guild on `ready`
//! and routes incoming interactions to the matching command by name.

pub mod ask;
pub mod health;

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use serenity::all::{CommandInteraction, Context, CreateCommand};
use serenity::async_trait;

use crate::{config::Config, error::AppError, service::ask::AskService};

use self::{ask::AskCommand, health::HealthCommand};

/// A slash command the bot can register and run.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Name users type after `/`.
    fn name(&self) -> &'static str;

    /// Definition registered with Discord.
    fn definition(&self) -> CreateCommand;

    /// Handles one invocation.
    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError>;
}

/// Dispatch table from command name to handler.
#[derive(Default)]
pub struct CommandRouter {
    commands: BTreeMap<&'static str, Box<dyn SlashCommand>>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the router for the given configuration.
    ///
    /// `ask` is always registered; `health` only in dev mode.
    pub fn from_config(config: &Config, ask_service: AskService) -> Self {
        let router = Self::new().register(AskCommand::new(ask_service, &config.subject));

        if config.dev {
            router.register(HealthCommand)
        } else {
            router
        }
    }

    /// Adds a command, replacing any previous command with the same name.
    pub fn register<C>(mut self, command: C) -> Self
    where
        C: SlashCommand + 'static,
    {
        self.commands.insert(command.name(), Box::new(command));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    pub fn definitions(&self) -> Vec<CreateCommand> {
        self.commands
            .values()
            .map(|command| command.definition())
            .collect()
    }

    /// Runs the command matching the interaction.
    ///
    /// Errors are logged here and never propagate, so one failed invocation
    /// cannot take the bot down.
    pub async fn dispatch(&self, ctx: &Context, command: &CommandInteraction) {
        let name = command.data.name.as_str();

        let Some(handler) = self.commands.get(name) else {
            tracing::warn!("Received unknown command /{} from {}", name, command.user.id);
            return;
        };

        if let Err(e) = handler.run(ctx, command).await {
            tracing::error!(
                "Command /{} from {} failed: {}",
                name,
                command.user.id,
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::backend::BackendClient;
    use test_utils::{builder::TestBuilder, context::unreachable_backend_url};

    fn config_with_backend(dev: bool, backend_url: String) -> Config {
        Config::from_lookup(
            |name| match name {
                "DISCORD_AUTH" => Some("token".to_string()),
                "DISCORD_GUILD_ID" => Some("1".to_string()),
                "BACKEND_URL" => Some(backend_url.clone()),
                _ => None,
            },
            dev,
        )
        .unwrap()
    }

    fn config(dev: bool) -> Config {
        config_with_backend(dev, unreachable_backend_url())
    }

    fn router(config: &Config) -> CommandRouter {
        let backend = BackendClient::new(reqwest::Client::new(), config.backend_url.clone());
        CommandRouter::from_config(config, AskService::new(backend, config.maintainer_id))
    }

    /// Tests the commands registered outside dev mode.
    ///
    /// Expected: only `ask`
    #[test]
    fn registers_ask_only_in_production() {
        let router = router(&config(false));

        assert_eq!(router.names(), vec!["ask"]);
        assert_eq!(router.definitions().len(), 1);
    }

    /// Tests the commands registered in dev mode.
    ///
    /// Expected: `ask` and `health`
    #[test]
    fn registers_health_in_dev_mode() {
        let router = router(&config(true));

        assert_eq!(router.names(), vec!["ask", "health"]);
        assert_eq!(router.definitions().len(), 2);
    }

    /// Tests that registering a name twice keeps a single entry.
    ///
    /// Expected: one `health` command
    #[test]
    fn registering_twice_replaces() {
        let router = CommandRouter::new()
            .register(HealthCommand)
            .register(HealthCommand);

        assert_eq!(router.names(), vec!["health"]);
    }

    /// Tests the dev-mode health reply against a live backend.
    ///
    /// Verifies that the health command is routed in dev mode, that its reply is
    /// the fixed liveness string, and that the backend is never contacted.
    ///
    /// Expected: fixed reply and zero backend requests
    #[tokio::test]
    async fn health_reply_makes_no_backend_calls() {
        let test = TestBuilder::new().with_answer("unused").build().await;
        let router = router(&config_with_backend(true, test.backend_url()));

        assert!(router.names().contains(&"health"));

        let response = serde_json::to_value(HealthCommand::response()).unwrap();

        assert_eq!(response["data"]["content"], health::HEALTH_RESPONSE);
        assert_eq!(test.request_count().await, 0);
    }
}
