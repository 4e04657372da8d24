use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use tracing::info;

use super::texts::WELCOME_TEXT;

/// Replies to `/start` with the welcome text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartHandler;

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = %message.user.id,
            username = %message.user.username,
            "User {} (@{}) started the bot",
            message.user.id,
            message.user.username
        );
        Ok(HandlerResponse::reply(WELCOME_TEXT))
    }
}
