//! # Command dispatch
//!
//! Routes each message to exactly one handler: routes are tried in registration order and the first
//! whose [`Predicate`] matches fires. Later routes with the same predicate are shadowed. The handler's
//! reply, if any, is sent through the [`Bot`]. Handler and transport errors propagate to the caller.

mod predicate;

pub use predicate::Predicate;

use bot_core::{Bot, Handler, HandlerResponse, Message, OutboundReply, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A predicate paired with the handler it selects.
#[derive(Clone)]
pub struct Route {
    predicate: Predicate,
    handler: Arc<dyn Handler>,
    handler_name: &'static str,
}

impl Route {
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Type name of the handler, for logs.
    pub fn handler_name(&self) -> &'static str {
        self.handler_name
    }
}

/// Ordered routes plus the transport replies go out on. Read-only once built; cheap to clone and safe
/// to share between concurrently processed messages.
#[derive(Clone)]
pub struct Dispatcher {
    bot: Arc<dyn Bot>,
    routes: Vec<Route>,
    bot_username: Option<String>,
}

impl Dispatcher {
    /// Creates a dispatcher with no routes.
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            routes: Vec::new(),
            bot_username: None,
        }
    }

    /// Username of the running bot; lets `/cmd@username` match command predicates.
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    /// Appends a route. No deduplication: a later route with an equal predicate is never reached.
    pub fn register<H: Handler + 'static>(mut self, predicate: Predicate, handler: Arc<H>) -> Self {
        let handler_name = std::any::type_name::<H>()
            .rsplit("::")
            .next()
            .unwrap_or("handler");
        self.routes.push(Route {
            predicate,
            handler,
            handler_name,
        });
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// True when some route matches every message.
    pub fn has_catch_all(&self) -> bool {
        self.routes.iter().any(|r| r.predicate == Predicate::Any)
    }

    /// First route whose predicate matches `message`.
    pub fn select(&self, message: &Message) -> Option<&Route> {
        let text = message.text.as_deref();
        let username = self.bot_username.as_deref();
        self.routes
            .iter()
            .find(|route| route.predicate.matches(text, username))
    }

    /// Runs the selected handler and sends its reply to the message's chat. Returns the reply that was
    /// sent, or `None` when the handler had nothing to say or no route matched.
    #[instrument(skip(self, message), fields(user_id = %message.user.id, chat_id = message.chat.id))]
    pub async fn dispatch(&self, message: &Message) -> Result<Option<OutboundReply>> {
        let Some(route) = self.select(message) else {
            warn!(message_id = %message.id, "step: no route matched, message dropped");
            return Ok(None);
        };

        let handler_name = route.handler_name();
        info!(
            message_id = %message.id,
            handler = %handler_name,
            "step: dispatch to handler"
        );

        let response = route.handler.handle(message).await?;
        debug!(handler = %handler_name, response = ?response, "Handler processed");

        match response {
            HandlerResponse::Reply(text) => {
                let reply = OutboundReply::new(message.chat.clone(), text);
                self.bot.send_message(&reply.chat, &reply.text).await?;
                info!(
                    handler = %handler_name,
                    reply_len = reply.text.len(),
                    "step: reply sent"
                );
                Ok(Some(reply))
            }
            HandlerResponse::NoReply => {
                info!(handler = %handler_name, "step: handler produced no reply");
                Ok(None)
            }
        }
    }
}

// Integration tests live in tests/dispatcher_test.rs
