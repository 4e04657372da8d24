//! BotConfig: every setting the bot reads at startup. Use load() for env-based loading, then validate().

use anyhow::Result;
use bot_core::{env_flag, get_env_var, mask_token, ConfigError, LogSettings};
use bot_telegram::TelegramConfig;
use std::{env, fmt};

use super::LlmConfig;

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_LOG_FILE: &str = "bot.log";

/// Bot config loaded from the environment.
#[derive(Clone)]
pub struct BotConfig {
    /// TELEGRAM_BOT_TOKEN
    pub telegram_bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// OPENROUTER_API_KEY
    pub openrouter_api_key: String,
    /// OPENROUTER_BASE_URL
    pub openrouter_base_url: String,
    pub llm: LlmConfig,
    /// LOG_LEVEL
    pub log_level: String,
    /// LOG_FILE
    pub log_file: String,
    /// DEBUG; console-only logging when true
    pub debug: bool,
}

impl BotConfig {
    /// Loads the full config. Fails with [`ConfigError::Missing`] when TELEGRAM_BOT_TOKEN or
    /// OPENROUTER_API_KEY is unset, and with [`ConfigError::Invalid`] for unparsable numbers.
    pub fn load() -> Result<Self, ConfigError> {
        let telegram_bot_token = get_env_var("TELEGRAM_BOT_TOKEN", None)?;
        let openrouter_api_key = get_env_var("OPENROUTER_API_KEY", None)?;
        let openrouter_base_url =
            get_env_var("OPENROUTER_BASE_URL", Some(DEFAULT_OPENROUTER_BASE_URL))?;
        let llm = LlmConfig::from_env()?;
        let log_level = get_env_var("LOG_LEVEL", Some(DEFAULT_LOG_LEVEL))?;
        let log_file = get_env_var("LOG_FILE", Some(DEFAULT_LOG_FILE))?;
        let debug = env_flag("DEBUG", false)?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            telegram_bot_token,
            telegram_api_url,
            openrouter_api_key,
            openrouter_base_url,
            llm,
            log_level,
            log_file,
            debug,
        })
    }

    /// Validate config. Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.openrouter_base_url).is_err() {
            anyhow::bail!(
                "OPENROUTER_BASE_URL is not a valid URL: {}",
                self.openrouter_base_url
            );
        }
        self.telegram().api_url()?;
        self.llm.validate()
    }

    /// Telegram connection part of the config.
    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig::with_token(self.telegram_bot_token.clone())
            .with_api_url(self.telegram_api_url.clone())
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: self.log_level.clone(),
            file: Some(self.log_file.clone()),
            debug: self.debug,
        }
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_bot_token", &mask_token(&self.telegram_bot_token))
            .field("telegram_api_url", &self.telegram_api_url)
            .field("openrouter_api_key", &mask_token(&self.openrouter_api_key))
            .field("openrouter_base_url", &self.openrouter_base_url)
            .field("llm", &self.llm)
            .field("log_level", &self.log_level)
            .field("log_file", &self.log_file)
            .field("debug", &self.debug)
            .finish()
    }
}
