//! # bot-telegram
//!
//! Telegram layer: adapters, [`bot_core::Bot`] implementation, minimal config, long-polling runner.
//! Handles only Telegram connectivity and dispatch; no persistence or business logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_polling;
