//! Long-polling run loop: converts teloxide messages to core::Message and hands them to the Dispatcher.
//!
//! Updates from different chats may be dispatched concurrently. The first dispatch failure stops polling
//! and is returned to the caller; Ctrl-C stops polling cleanly.

use anyhow::Result;
use bot_core::{BotError, ToCoreMessage};
use command_dispatch::Dispatcher;
use std::future::Future;
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher as PollingDispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::requests::ResponseResult;
use teloxide::types::Update;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Channel dispatch failures are reported on; the runner stops on the first one.
type FailureTx = mpsc::UnboundedSender<BotError>;

/// Polls Telegram with `bot` and dispatches every message through `dispatcher` until Ctrl-C (Ok) or the
/// first failed dispatch (Err).
#[instrument(skip(bot, dispatcher))]
pub async fn run_polling(bot: teloxide::Bot, dispatcher: Dispatcher) -> Result<()> {
    let (failure_tx, failure_rx) = mpsc::unbounded_channel::<BotError>();
    let handler = Update::filter_message().endpoint(handle_message);

    let mut polling = PollingDispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(dispatcher), failure_tx])
        .enable_ctrlc_handler()
        .build();

    info!("Starting polling...");

    wait_for_stop(polling.dispatch(), failure_rx).await
}

/// Resolves when `polling` finishes (Ok) or the first failure arrives (Err), whichever is first. Dropping
/// the polling future on failure stops it.
async fn wait_for_stop(
    polling: impl Future<Output = ()>,
    mut failures: mpsc::UnboundedReceiver<BotError>,
) -> Result<()> {
    tokio::select! {
        _ = polling => {
            info!("Polling stopped");
            Ok(())
        }
        Some(err) = failures.recv() => {
            error!(error = %err, "Dispatch failed, polling stopped");
            Err(err.into())
        }
    }
}

/// Endpoint for message updates. Never fails towards teloxide: dispatch errors go to the runner instead.
async fn handle_message(
    msg: teloxide::types::Message,
    dispatcher: Arc<Dispatcher>,
    failures: FailureTx,
) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    match core_msg.text.as_deref() {
        Some(text) => {
            info!(
                user_id = %core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %text,
                "Received message"
            );
        }
        None => {
            info!(
                user_id = %core_msg.user.id,
                chat_id = core_msg.chat.id,
                "Received non-text message"
            );
        }
    }

    if let Err(e) = dispatcher.dispatch(&core_msg).await {
        error!(error = %e, user_id = %core_msg.user.id, "Dispatch failed");
        report_failure(&failures, e);
    }

    Ok(())
}

fn report_failure(failures: &FailureTx, err: BotError) {
    // Receiver is gone only once the runner has already stopped.
    let _ = failures.send(err);
}
