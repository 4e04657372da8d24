//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] is used for handler failures and
//! [`ConfigError`] for environment configuration.

use thiserror::Error;

/// Top-level error (transport, handler, config).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{handler} failed: {reason}")]
    Failed { handler: String, reason: String },
}

/// Errors produced while reading settings from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is required")]
    Missing(String),

    #[error("Environment variable {name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_message() {
        let err = ConfigError::Missing("REQUIRED_KEY".to_string());
        assert_eq!(err.to_string(), "Environment variable REQUIRED_KEY is required");
    }

    #[test]
    fn test_config_error_wrapped_in_bot_error() {
        let err: BotError = ConfigError::Missing("X".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Config error: Environment variable X is required"
        );
    }
}
