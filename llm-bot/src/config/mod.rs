//! Bot configuration: Telegram connection, OpenRouter credentials, LLM sampling settings, logging.
//! Everything is read from the environment; see [`BotConfig::load`].

mod bot_config;
mod llm;


pub use bot_config::BotConfig;
pub use llm::LlmConfig;
