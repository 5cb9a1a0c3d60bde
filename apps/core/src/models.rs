use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::brain::{Category, WELCOME_MESSAGE};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Represents a single message within a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message.
    pub id: Uuid,
    /// The author of the message.
    pub role: Role,
    /// The text content of the message.
    pub content: String,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One user utterance paired with the category it resolved to and the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub utterance: Message,
    pub category: Category,
    pub reply: Message,
}

/// Ordered, append-only record of one chat session.
///
/// Opens with the assistant's welcome message. Turns can only be appended;
/// there is no API to edit or remove one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    welcome: Message,
    turns: Vec<ConversationTurn>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            welcome: Message::assistant(WELCOME_MESSAGE),
            turns: Vec::new(),
        }
    }

    /// Appends a completed turn to the end of the transcript.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn welcome(&self) -> &Message {
        &self.welcome
    }

    #[allow(dead_code)]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True while the user has not said anything yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// All messages in display order, welcome first.
    #[allow(dead_code)]
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        std::iter::once(&self.welcome).chain(
            self.turns
                .iter()
                .flat_map(|turn| [&turn.utterance, &turn.reply]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(text: &str, category: Category) -> ConversationTurn {
        ConversationTurn {
            utterance: Message::user(text),
            category,
            reply: Message::assistant(category.template()),
        }
    }

    #[test]
    fn test_new_transcript_has_only_welcome() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.welcome().role, Role::Assistant);
        assert_eq!(transcript.messages().count(), 1);
    }

    #[test]
    fn test_messages_keep_append_order() {
        let mut transcript = Transcript::new();
        transcript.push(turn("hi", Category::Greeting));
        transcript.push(turn("menu?", Category::Mess));

        let contents: Vec<&str> = transcript.messages().map(|m| m.content.as_str()).collect();
        assert_eq!(contents.len(), 5);
        assert_eq!(contents[1], "hi");
        assert_eq!(contents[3], "menu?");
        assert_eq!(transcript.turns()[1].category, Category::Mess);
    }

    #[test]
    fn test_transcript_serializes_roles_lowercase() {
        let mut transcript = Transcript::new();
        transcript.push(turn("lost my wallet", Category::Lostfound));

        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["welcome"]["role"], "assistant");
        assert_eq!(json["turns"][0]["utterance"]["role"], "user");
        assert_eq!(json["turns"][0]["category"], "lostfound");
    }
}
