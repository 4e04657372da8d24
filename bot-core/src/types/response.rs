//! Handler result type.

/// What a handler produced for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Send this text back to the message's chat.
    Reply(String),
    /// Handled; nothing to send.
    NoReply,
}

impl HandlerResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        HandlerResponse::Reply(text.into())
    }
}
