//! `/ask`: relays a question to the backend and posts the answer.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse, MessageId,
};
use serenity::async_trait;

use crate::{
    bot::command::SlashCommand,
    error::AppError,
    model::{feedback::Feedback, question::Question},
    service::ask::{AskService, AskSurface},
};

pub const QUESTION_OPTION: &str = "question";

pub struct AskCommand {
    service: AskService,
    subject: String,
}

impl AskCommand {
    pub fn new(service: AskService, subject: &str) -> Self {
        Self {
            service,
            subject: subject.to_string(),
        }
    }
}

#[async_trait]
impl SlashCommand for AskCommand {
    fn name(&self) -> &'static str {
        "ask"
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(format!("Answers questions about {} material.", self.subject))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    QUESTION_OPTION,
                    format!("A question about anything covered by {}.", self.subject),
                )
                .required(true),
            )
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        let text = command
            .data
            .options
            .iter()
            .find(|option| option.name == QUESTION_OPTION)
            .and_then(|option| option.value.as_str())
            .ok_or_else(|| AppError::MissingOption(QUESTION_OPTION.to_string()))?;

        let question = Question::new(text, &command.user);
        let mut surface = InteractionSurface { ctx, command };

        self.service.answer(&mut surface, &question).await?;

        Ok(())
    }
}

/// Discord side of one `/ask` interaction.
///
/// The deferred response is the acknowledgment; the final reply replaces its
/// content and the feedback reactions are added to that same message.
struct InteractionSurface<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
}

#[async_trait]
impl AskSurface for InteractionSurface<'_> {
    async fn acknowledge(&mut self) -> Result<MessageId, AppError> {
        self.command.defer(self.ctx).await?;
        let original = self.command.get_response(&self.ctx.http).await?;

        Ok(original.id)
    }

    async fn reply(&mut self, content: &str) -> Result<(), AppError> {
        self.command
            .edit_response(self.ctx, EditInteractionResponse::new().content(content))
            .await?;

        Ok(())
    }

    async fn react(&mut self, message_id: MessageId, feedback: Feedback) -> Result<(), AppError> {
        self.ctx
            .http
            .create_reaction(self.command.channel_id, message_id, &feedback.reaction())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::backend::BackendClient;
    use test_utils::context::unreachable_backend_url;

    fn command(subject: &str) -> AskCommand {
        let backend = BackendClient::new(
            reqwest::Client::new(),
            unreachable_backend_url().parse().unwrap(),
        );
        AskCommand::new(AskService::new(backend, None), subject)
    }

    /// Tests the registered definition.
    ///
    /// Expected: `ask` with one required string option named `question`
    #[test]
    fn definition_requires_question() {
        let definition = serde_json::to_value(command("Full Stack Deep Learning").definition())
            .unwrap();

        assert_eq!(definition["name"], "ask");
        assert_eq!(
            definition["description"],
            "Answers questions about Full Stack Deep Learning material."
        );

        let options = definition["options"].as_array().unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0]["name"], "question");
        assert_eq!(options[0]["type"], 3);
        assert_eq!(options[0]["required"], true);
        assert_eq!(
            options[0]["description"],
            "A question about anything covered by Full Stack Deep Learning."
        );
    }

    /// Tests that the subject flows into the descriptions.
    ///
    /// Expected: descriptions name the configured subject
    #[test]
    fn definition_names_subject() {
        let definition = serde_json::to_value(command("Rust").definition()).unwrap();

        assert_eq!(
            definition["options"][0]["description"],
            "A question about anything covered by Rust."
        );
    }
}
