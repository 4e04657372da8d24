use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use tracing::info;

use super::texts::FALLBACK_TEXT;

/// Characters of the incoming text kept in the log line.
const LOG_PREVIEW_CHARS: usize = 50;

/// Catch-all: any text that is not a known command, and any non-text message.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackHandler;

/// First `max` characters of `text` (char-safe).
pub(crate) fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl Handler for FallbackHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = %message.user.id,
            "User {} sent message: {}...",
            message.user.id,
            preview(message.text_or_placeholder(), LOG_PREVIEW_CHARS)
        );
        Ok(HandlerResponse::reply(FALLBACK_TEXT))
    }
}
