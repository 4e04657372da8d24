//! Wraps teloxide::Bot and implements [`bot_core::Bot`]. Production code sends messages via Telegram;
//! tests can substitute another Bot impl.

use async_trait::async_trait;
use bot_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::{prelude::*, types::ChatId, types::ParseMode};

/// Thin wrapper around teloxide::Bot that implements bot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
    parse_mode: Option<ParseMode>,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot; messages are sent as plain text.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self {
            bot,
            parse_mode: None,
        }
    }

    /// Parse mode applied to every outgoing message (e.g. HTML).
    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), text.to_string());
        let request = match self.parse_mode {
            Some(mode) => request.parse_mode(mode),
            None => request,
        };
        request
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
