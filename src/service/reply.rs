//! Text of the replies posted for `ask`.

use serenity::all::{Mentionable, UserId};

use crate::model::{feedback::Feedback, question::Question};

/// Builds the reply for a successful answer.
///
/// The answer is trimmed; the question is restated verbatim.
pub fn answer_message(question: &Question, answer: &str) -> String {
    format!(
        "{mention} asked: {question}

    Here's my best guess at an answer, with sources so you can follow up:

    {answer}

    Emoji react to let us know how we're doing!

    {prompt}",
        mention = question.asker_mention(),
        question = question.text,
        answer = answer.trim(),
        prompt = Feedback::prompt(),
    )
}

/// Builds the apology posted when the backend did not produce an answer.
///
/// The maintainer is mentioned only when one is configured and they are not the
/// person who asked.
pub fn apology_message(question: &Question, maintainer_id: Option<UserId>) -> String {
    let mut reply = format!("Sorry {}, something went wrong.", question.asker_mention());

    if let Some(maintainer_id) = maintainer_id.filter(|id| *id != question.asker_id) {
        reply.push_str(&format!(" I've let {} know.", maintainer_id.mention()));
    }

    reply.push_str(" Please try again later.");
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_user;

    fn question(text: &str, asker: u64) -> Question {
        Question::new(text, &create_test_user(asker, "asker"))
    }

    /// Tests the exact reply for a successful answer.
    ///
    /// Expected: mention, verbatim question, answer and feedback prompt in the fixed layout
    #[test]
    fn formats_answer() {
        let reply = answer_message(
            &question("What is FSDL?", 1234),
            "A course on full-stack deep learning.",
        );

        assert_eq!(
            reply,
            "<@1234> asked: What is FSDL?\n\n    Here's my best guess at an answer, with sources so you can follow up:\n\n    A course on full-stack deep learning.\n\n    Emoji react to let us know how we're doing!\n\n    React with 👍 if the response was helpful or react with 👎 if the response was not helpful."
        );
    }

    /// Tests that surrounding whitespace in the answer is trimmed.
    ///
    /// Expected: answer appears without leading/trailing whitespace, question untouched
    #[test]
    fn trims_answer_but_not_question() {
        let reply = answer_message(&question(" why? ", 1), "\n\n  Because.  \n");

        assert!(reply.starts_with("<@1> asked:  why? \n"));
        assert!(reply.contains("\n    Because.\n"));
    }

    /// Tests the apology when no maintainer is configured.
    ///
    /// Expected: no maintainer clause
    #[test]
    fn apology_without_maintainer() {
        let reply = apology_message(&question("q", 1234), None);

        assert_eq!(
            reply,
            "Sorry <@1234>, something went wrong. Please try again later."
        );
    }

    /// Tests the apology when someone other than the maintainer asked.
    ///
    /// Expected: maintainer clause naming the maintainer
    #[test]
    fn apology_mentions_maintainer() {
        let reply = apology_message(&question("q", 1234), Some(UserId::new(42)));

        assert_eq!(
            reply,
            "Sorry <@1234>, something went wrong. I've let <@42> know. Please try again later."
        );
    }

    /// Tests the apology when the maintainer asked the question.
    ///
    /// Expected: no maintainer clause
    #[test]
    fn apology_omits_maintainer_when_maintainer_asks() {
        let reply = apology_message(&question("q", 42), Some(UserId::new(42)));

        assert_eq!(
            reply,
            "Sorry <@42>, something went wrong. Please try again later."
        );
    }
}
