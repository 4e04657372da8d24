//! Binary for the Telegram bot. Loads `.env`, reads config from the environment, sets up logging and
//! polls until Ctrl-C (exit 0) or a fatal error (exit 1).

use anyhow::Result;
use bot_core::init_tracing;
use clap::Parser;
use llm_bot::{run_bot, BotConfig, Cli};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    let config = BotConfig::load()?;
    init_tracing(&config.log_settings())?;

    info!("Starting Telegram LLM Bot");

    if let Err(e) = run_bot(config).await {
        error!(error = %e, "Unexpected error");
        return Err(e);
    }

    Ok(())
}
