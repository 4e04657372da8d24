//! Minimal Telegram connection config: token and optional Bot API server URL.

use anyhow::{Context, Result};
use bot_core::mask_token;
use std::fmt;

/// Telegram connection settings.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Custom Bot API server (self-hosted or a test mock); `None` uses api.telegram.org.
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Builds config with the given token and the default API server.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    pub fn with_api_url(mut self, telegram_api_url: Option<String>) -> Self {
        self.telegram_api_url = telegram_api_url;
        self
    }

    /// Parsed API URL, if one is configured.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|url| {
                reqwest::Url::parse(url)
                    .with_context(|| format!("TELEGRAM_API_URL is not a valid URL: {}", url))
            })
            .transpose()
    }

    /// Creates the teloxide Bot. Fails on an invalid API URL instead of silently using the default.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}
