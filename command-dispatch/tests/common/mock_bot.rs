//! Mock implementation of [`bot_core::Bot`] for integration tests.
//!
//! Records every `send_message` call so tests can assert on the reply text without a transport.

use async_trait::async_trait;
use bot_core::{Bot, BotError, Chat, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot that forwards each sent message to a channel held by the test.
pub struct MockBot {
    sent_tx: mpsc::UnboundedSender<SentRecord>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for sent records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx }), sent_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.sent_tx.send(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Bot whose every send fails, standing in for a dropped connection.
pub struct FailingBot;

#[async_trait]
impl Bot for FailingBot {
    async fn send_message(&self, _chat: &Chat, _text: &str) -> Result<()> {
        Err(BotError::Transport("connection reset".to_string()))
    }
}
