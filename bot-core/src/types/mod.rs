//! Core types: user, chat, message, outbound reply, handler response, and Handler trait.
//!
//! One file per main type, as in the rest of the workspace.

mod chat;
mod handler;
mod message;
mod reply;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, NON_TEXT_PLACEHOLDER};
pub use reply::OutboundReply;
pub use response::HandlerResponse;
pub use user::{User, UserId, UNKNOWN};
