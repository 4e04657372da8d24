//! Startup sequence: validate config, connect, register handlers, poll until stopped.

use anyhow::{Context, Result};
use bot_core::Bot;
use bot_telegram::{run_polling, TelegramBotAdapter};
use command_dispatch::{Dispatcher, Predicate};
use std::sync::Arc;
use teloxide::requests::Requester;
use teloxide::types::ParseMode;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::handlers::{FallbackHandler, HelpHandler, StartHandler};

/// Routes in priority order: `/start`, `/help`, then the catch-all fallback.
pub fn build_dispatcher(bot: Arc<dyn Bot>, bot_username: Option<String>) -> Dispatcher {
    Dispatcher::new(bot)
        .with_bot_username(bot_username)
        .register(Predicate::command("start"), Arc::new(StartHandler))
        .register(Predicate::command("help"), Arc::new(HelpHandler))
        .register(Predicate::Any, Arc::new(FallbackHandler))
}

/// Runs the bot until Ctrl-C (Ok) or the first fatal error (Err). "Bot stopped" is logged either way.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let result = start(config).await;
    if let Err(e) = &result {
        error!(error = %e, "Error starting bot");
    }
    info!("Bot stopped");
    result
}

async fn start(config: BotConfig) -> Result<()> {
    config.validate()?;

    let bot = config.telegram().build_bot()?;

    let me = bot
        .get_me()
        .await
        .context("Failed to get bot info from Telegram")?;
    let username = me.user.username.clone();
    info!(
        "Bot started: @{} ({})",
        username.as_deref().unwrap_or(bot_core::UNKNOWN),
        me.user.full_name()
    );

    let adapter = TelegramBotAdapter::new(bot.clone()).with_parse_mode(ParseMode::Html);
    let dispatcher = build_dispatcher(Arc::new(adapter), username);
    info!(routes = dispatcher.routes().len(), "Handlers registered successfully");

    run_polling(bot, dispatcher).await
}
