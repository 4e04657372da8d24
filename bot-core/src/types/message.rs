//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Stand-in used when logging a message that carries no text (stickers, photos, ...).
pub const NON_TEXT_PLACEHOLDER: &str = "non-text message";

/// A single message received from a user. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Raw text (or media caption); `None` for payloads with neither.
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text message from `user` in `chat`, stamped now.
    pub fn from_text(id: impl Into<String>, user: User, chat: Chat, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            text: Some(text.into()),
            created_at: Utc::now(),
        }
    }

    /// Message without text (media, service message, ...), stamped now.
    pub fn without_text(id: impl Into<String>, user: User, chat: Chat) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            text: None,
            created_at: Utc::now(),
        }
    }

    /// Text, or [`NON_TEXT_PLACEHOLDER`] when absent.
    pub fn text_or_placeholder(&self) -> &str {
        self.text.as_deref().unwrap_or(NON_TEXT_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(1, Some("u".to_string()))
    }

    #[test]
    fn test_text_or_placeholder() {
        let media = Message::without_text("3", user(), Chat::private(1));
        assert_eq!(media.text_or_placeholder(), "non-text message");

        let msg = Message::from_text("1", user(), Chat::private(1), "hi");
        assert_eq!(msg.text_or_placeholder(), "hi");
    }
}
