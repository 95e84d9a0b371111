//! Per-session conversation state machine.

use serde::{Deserialize, Serialize};

use crate::prompt;

/// One exchange unit, tagged by who produced it.
///
/// Serializes to the single-key object form embedded in follow-up prompts:
/// `{"user": "..."}` / `{"bot": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    User(String),
    Bot(String),
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::User(text.into())
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::Bot(text.into())
    }
}

/// Conversation state for one session id.
///
/// Two states, keyed on `base_question`:
/// - *Uninitiated*: `base_question` is empty; the next message becomes the
///   base question and is answered as a standalone topic.
/// - *Active*: every further message is a follow-up over the recorded
///   history. The base question never changes until the session is reset.
#[derive(Debug, Default, Clone)]
pub struct ChatSession {
    base_question: String,
    history: Vec<Turn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the session has received its first non-empty message.
    pub fn is_uninitiated(&self) -> bool {
        self.base_question.is_empty()
    }

    pub fn base_question(&self) -> &str {
        &self.base_question
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Advances the state machine with an incoming message and returns the
    /// prompt to send to the generative model.
    ///
    /// On the opening turn the message is pinned as the base question and is
    /// NOT appended to history. On follow-up turns the prompt is built from
    /// the history as it stood before this message, and the message is then
    /// appended as a user turn — so a failed generation still leaves the
    /// user's message recorded.
    pub fn begin_turn(&mut self, text: &str) -> String {
        let text = text.trim();
        if self.is_uninitiated() {
            self.base_question = text.to_string();
            prompt::opening(text)
        } else {
            let built = prompt::follow_up(&self.base_question, &self.history, text);
            self.history.push(Turn::user(text));
            built
        }
    }

    /// Records the model's reply. Called after generation succeeds,
    /// regardless of which state branch produced the prompt.
    pub fn record_reply(&mut self, reply: &str) {
        self.history.push(Turn::bot(reply));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_turn_pins_base_question_without_history_append() {
        let mut s = ChatSession::new();
        assert!(s.is_uninitiated());

        let prompt = s.begin_turn("explain recursion");
        assert!(!s.is_uninitiated());
        assert_eq!(s.base_question(), "explain recursion");
        assert!(s.history().is_empty());
        assert!(prompt.contains("Topic: explain recursion"));
    }

    #[test]
    fn second_turn_does_not_alter_base_question() {
        let mut s = ChatSession::new();
        s.begin_turn("explain recursion");
        s.record_reply("Recursion is self-reference.");

        let prompt = s.begin_turn("give an example");
        assert_eq!(s.base_question(), "explain recursion");
        assert!(prompt.contains("Base Question: explain recursion"));
        assert!(prompt.contains("Recursion is self-reference."));
        assert!(prompt.contains("User asks: give an example"));
    }

    #[test]
    fn two_exchanges_leave_three_history_entries() {
        let mut s = ChatSession::new();
        s.begin_turn("explain recursion");
        s.record_reply("first reply");
        s.begin_turn("give an example");
        s.record_reply("second reply");

        assert_eq!(
            s.history(),
            &[
                Turn::bot("first reply"),
                Turn::user("give an example"),
                Turn::bot("second reply"),
            ]
        );
    }

    #[test]
    fn failed_generation_keeps_the_user_turn() {
        let mut s = ChatSession::new();
        s.begin_turn("explain recursion");
        s.record_reply("first reply");

        // Generation fails: no record_reply for this turn.
        s.begin_turn("give an example");
        assert_eq!(
            s.history(),
            &[Turn::bot("first reply"), Turn::user("give an example")]
        );
    }

    #[test]
    fn follow_up_prompt_excludes_the_current_user_message_from_history() {
        let mut s = ChatSession::new();
        s.begin_turn("explain recursion");
        s.record_reply("first reply");

        let prompt = s.begin_turn("give an example");
        // The new question appears as "User asks:", not inside the history.
        let history_section = prompt
            .split("User asks:")
            .next()
            .expect("prompt has a history section");
        assert!(!history_section.contains("give an example"));
    }
}
