use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use tracing::info;

use super::texts::HELP_TEXT;

/// Replies to `/help` with the command list and the bot version.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(user_id = %message.user.id, "User {} requested help", message.user.id);
        Ok(HandlerResponse::reply(HELP_TEXT))
    }
}
