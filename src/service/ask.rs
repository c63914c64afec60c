//! The question relay behind the `ask` command.
//!
//! One invocation runs strictly in order: acknowledge, ask the backend, post the
//! reply, then (on success only) attach the feedback reactions to the
//! acknowledgment message. Discord I/O goes through [`AskSurface`] so the flow
//! can run against a fake in tests.

use std::time::Duration;

use dioxus_logger::tracing;
use serenity::all::{MessageId, UserId};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::{feedback::Feedback, question::Question},
    service::{backend::BackendClient, reply},
};

/// Pause between reaction attachments to stay clear of Discord's rate limits.
pub const REACTION_DELAY: Duration = Duration::from_millis(250);

/// Chat platform operations needed to answer one invocation.
#[async_trait]
pub trait AskSurface: Send {
    /// Sends a public "thinking" acknowledgment and returns its message id.
    async fn acknowledge(&mut self) -> Result<MessageId, AppError>;

    /// Posts the final reply for the invocation.
    async fn reply(&mut self, content: &str) -> Result<(), AppError>;

    /// Attaches a feedback reaction to a message.
    async fn react(&mut self, message_id: MessageId, feedback: Feedback) -> Result<(), AppError>;
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskOutcome {
    /// Answer posted; `reactions` feedback reactions were attached.
    Answered { reactions: usize },
    /// Backend failed and the apology was posted.
    Apologized,
}

/// Relays questions to the backend and answers back to Discord.
#[derive(Clone)]
pub struct AskService {
    backend: BackendClient,
    maintainer_id: Option<UserId>,
    reaction_delay: Duration,
}

impl AskService {
    pub fn new(backend: BackendClient, maintainer_id: Option<UserId>) -> Self {
        Self {
            backend,
            maintainer_id,
            reaction_delay: REACTION_DELAY,
        }
    }

    pub fn with_reaction_delay(mut self, delay: Duration) -> Self {
        self.reaction_delay = delay;
        self
    }

    /// Answers a single question.
    ///
    /// Backend failures never escape: they are logged and turned into the
    /// apology. Failing to attach a reaction is logged and the remaining
    /// reactions are still attempted.
    ///
    /// # Arguments
    /// - `surface` - Discord side of the invocation
    /// - `question` - The question and who asked it
    ///
    /// # Returns
    /// - `Ok(AskOutcome)` - A final reply was posted
    /// - `Err(AppError)` - Acknowledging or posting the reply failed
    pub async fn answer<S>(&self, surface: &mut S, question: &Question) -> Result<AskOutcome, AppError>
    where
        S: AskSurface + ?Sized,
    {
        tracing::info!("Responding to question from {}", question.asker_id);
        tracing::debug!("Question text: {:?}", question.text);

        let request_id = surface.acknowledge().await?;

        let answer = self
            .backend
            .fetch_answer(&question.text, Some(request_id))
            .await;

        let answer = match answer {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("Backend failed for request {}: {}", request_id, e);
                surface
                    .reply(&reply::apology_message(question, self.maintainer_id))
                    .await?;
                return Ok(AskOutcome::Apologized);
            }
        };

        surface
            .reply(&reply::answer_message(question, &answer))
            .await?;

        let mut reactions = 0;
        for (index, feedback) in Feedback::ALL.into_iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.reaction_delay).await;
            }

            match surface.react(request_id, feedback).await {
                Ok(()) => reactions += 1,
                Err(e) => tracing::warn!(
                    "Failed to add {} reaction to message {}: {}",
                    feedback.emoji(),
                    request_id,
                    e
                ),
            }
        }

        Ok(AskOutcome::Answered { reactions })
    }
}
