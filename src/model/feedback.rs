use std::sync::LazyLock;

use serenity::all::ReactionType;

/// Reactions attached under every answer so users can rate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

impl Feedback {
    /// Every affordance in the order it is offered and attached.
    pub const ALL: [Feedback; 2] = [Feedback::Helpful, Feedback::NotHelpful];

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Helpful => "👍",
            Self::NotHelpful => "👎",
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Self::Helpful => "if the response was helpful",
            Self::NotHelpful => "if the response was not helpful",
        }
    }

    pub fn reaction(self) -> ReactionType {
        ReactionType::Unicode(self.emoji().to_string())
    }

    /// Closing sentence listing every affordance, shared by all answers.
    pub fn prompt() -> &'static str {
        &FEEDBACK_PROMPT
    }
}

static FEEDBACK_PROMPT: LazyLock<String> = LazyLock::new(|| {
    let joined = Feedback::ALL
        .iter()
        .map(|feedback| format!("react with {} {}", feedback.emoji(), feedback.reason()))
        .collect::<Vec<_>>()
        .join(" or ");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the closing sentence built from the affordance set.
    ///
    /// Expected: both affordances joined with "or", capitalized, ending in a period
    #[test]
    fn prompt_lists_affordances_in_order() {
        assert_eq!(
            Feedback::prompt(),
            "React with 👍 if the response was helpful or react with 👎 if the response was not helpful."
        );
    }

    /// Tests that reactions use the unicode emoji of each affordance.
    ///
    /// Expected: Unicode reaction types matching `emoji()`
    #[test]
    fn reaction_matches_emoji() {
        for feedback in Feedback::ALL {
            assert_eq!(
                feedback.reaction(),
                ReactionType::Unicode(feedback.emoji().to_string())
            );
        }
    }
}
