//! Command line surface. Everything is configured through the environment (or `.env`).

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "llm-bot")]
#[command(
    about = "Telegram bot with /start and /help commands",
    long_about = "Telegram bot with /start and /help commands.\n\n\
                  Required environment: TELEGRAM_BOT_TOKEN, OPENROUTER_API_KEY.\n\
                  Optional: OPENROUTER_BASE_URL, LLM_MODEL, LLM_TEMPERATURE, LLM_MAX_TOKENS, LLM_TOP_P,\n\
                  LOG_LEVEL, LOG_FILE, DEBUG, TELEGRAM_API_URL.\n\n\
                  Startup fails (exit code 1) when LLM_TEMPERATURE is outside 0..=2, LLM_TOP_P is\n\
                  outside (0, 1], LLM_MAX_TOKENS is 0 or LLM_MODEL is empty."
)]
#[command(version)]
pub struct Cli {}
