//! # bot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message and user types, env configuration
//! helpers and tracing initialization. Transport-agnostic; used by command-dispatch and bot-telegram.

pub mod bot;
pub mod config;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use config::{env_flag, get_env_var, mask_token, parse_env_var};
pub use error::{BotError, ConfigError, HandlerError, Result};
pub use logger::{init_tracing, LogSettings};
pub use types::{
    Chat, Handler, HandlerResponse, Message, OutboundReply, ToCoreMessage, ToCoreUser, User,
    UserId, NON_TEXT_PLACEHOLDER, UNKNOWN,
};
