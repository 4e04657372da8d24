//! User identity type for core messages.
//!
//! Absent identity is resolved once, when the message is built: the id becomes [`UserId::Unknown`]
//! and the username becomes [`UNKNOWN`]. Call sites never check for a missing sender themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel shown for identity fields the transport did not provide.
pub const UNKNOWN: &str = "unknown";

/// Sender id, or `Unknown` when the message carries no sender (e.g. channel posts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserId {
    Known(i64),
    Unknown,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Known(id) => write!(f, "{}", id),
            UserId::Unknown => f.write_str(UNKNOWN),
        }
    }
}

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Username without `@`; [`UNKNOWN`] when the user has none.
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Known user; a missing username is replaced by [`UNKNOWN`].
    pub fn new(id: i64, username: Option<String>) -> Self {
        Self {
            id: UserId::Known(id),
            username: username.unwrap_or_else(|| UNKNOWN.to_string()),
            first_name: None,
            last_name: None,
        }
    }

    /// Placeholder for messages without a sender.
    pub fn unknown() -> Self {
        Self {
            id: UserId::Unknown,
            username: UNKNOWN.to_string(),
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_names(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }
}
