use crate::session::{Role, Turn};
use crate::traits::ChatMessage;
use serde::{Deserialize, Serialize};

/// How much of the stored transcript is replayed to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Only the current message is sent; the transcript is kept for display.
    #[default]
    CurrentOnly,
    /// Prior turns are replayed in their original order.
    Full,
}

pub struct ContextBuilder {
    instructions: String,
    history_mode: HistoryMode,
}

impl ContextBuilder {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            history_mode: HistoryMode::default(),
        }
    }

    pub fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    pub fn build_system_prompt(&self) -> String {
        self.instructions.trim().to_string()
    }

    pub fn build_messages(&self, prior_turns: &[Turn], current_message: &str) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(self.build_system_prompt())];

        if self.history_mode == HistoryMode::Full {
            messages.extend(prior_turns.iter().map(|turn| match turn.role {
                Role::User => ChatMessage::user(turn.content.clone()),
                Role::Assistant => ChatMessage::assistant(turn.content.clone()),
            }));
        }

        messages.push(ChatMessage::user(current_message));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> Vec<Turn> {
        vec![
            Turn::user("I have a fever"),
            Turn::assistant("Rest and hydrate."),
            Turn::user("and a headache"),
            Turn::assistant("Avoid screens."),
        ]
    }

    #[test]
    fn current_only_drops_prior_turns() {
        let builder = ContextBuilder::new("  be kind  ");
        let messages = builder.build_messages(&transcript(), "thanks");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::system("be kind"));
        assert_eq!(messages[1], ChatMessage::user("thanks"));
    }

    #[test]
    fn full_history_preserves_order() {
        let builder = ContextBuilder::new("be kind").with_history_mode(HistoryMode::Full);
        let messages = builder.build_messages(&transcript(), "thanks");
        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![
                "be kind",
                "I have a fever",
                "Rest and hydrate.",
                "and a headache",
                "Avoid screens.",
                "thanks"
            ]
        );
        assert_eq!(messages[2].role, "assistant");
    }

    #[test]
    fn empty_input_is_forwarded() {
        let messages = ContextBuilder::new("x").build_messages(&[], "");
        assert_eq!(messages.last().unwrap(), &ChatMessage::user(""));
    }
}
