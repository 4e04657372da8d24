//! Outbound reply: text plus the chat it goes to.

use super::chat::Chat;

/// Reply produced by a handler and handed straight to the transport; not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub chat: Chat,
    /// Plain text, may contain simple HTML markup.
    pub text: String,
}

impl OutboundReply {
    pub fn new(chat: Chat, text: impl Into<String>) -> Self {
        Self {
            chat,
            text: text.into(),
        }
    }
}
