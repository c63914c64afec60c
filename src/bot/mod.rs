//! Discord bot integration.
//!
//! The bot exposes slash commands in the configured guilds and relays `/ask`
//! questions to the question-answering backend. Commands are registered per
//! guild when the gateway reports `ready`, and each invocation runs as its own
//! task inside Serenity's event dispatch with no state shared between them.
//!
//! # Gateway Intents
//!
//! The bot requests the default non-privileged intents plus `MESSAGE_CONTENT`.
//! `MESSAGE_CONTENT` is a privileged intent and must be enabled in the Discord
//! Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
