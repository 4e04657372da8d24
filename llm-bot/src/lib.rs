//! # Telegram LLM bot application
//!
//! Wires config, the three command handlers and the dispatcher, then runs Telegram long polling.
//! Core types come from bot-core, routing from command-dispatch, transport from bot-telegram.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::Cli;
pub use config::{BotConfig, LlmConfig};
pub use handlers::{FallbackHandler, HelpHandler, StartHandler};
pub use runner::{build_dispatcher, run_bot};
