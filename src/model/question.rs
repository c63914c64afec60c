use serenity::all::{Mentionable, User, UserId};

/// A question asked through the `ask` command.
///
/// The text is kept exactly as Discord delivered it. Empty or whitespace-only
/// questions are forwarded to the backend, which decides whether to reject them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub asker_id: UserId,
}

impl Question {
    pub fn new(text: impl Into<String>, asker: &User) -> Self {
        Self {
            text: text.into(),
            asker_id: asker.id,
        }
    }

    /// Discord mention markup for the asker, e.g. `<@123>`.
    pub fn asker_mention(&self) -> String {
        self.asker_id.mention().to_string()
    }
}
