//! LLM request settings. Loaded and validated at startup; no request pipeline uses them yet.

use anyhow::Result;
use bot_core::{get_env_var, parse_env_var, ConfigError};

pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: &str = "0.7";
pub const DEFAULT_MAX_TOKENS: &str = "1000";
pub const DEFAULT_TOP_P: &str = "0.9";

/// Model name and sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// LLM_MODEL
    pub model: String,
    /// LLM_TEMPERATURE
    pub temperature: f32,
    /// LLM_MAX_TOKENS
    pub max_tokens: u32,
    /// LLM_TOP_P
    pub top_p: f32,
}

impl LlmConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            model: get_env_var("LLM_MODEL", Some(DEFAULT_MODEL))?,
            temperature: parse_env_var("LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            max_tokens: parse_env_var("LLM_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            top_p: parse_env_var("LLM_TOP_P", DEFAULT_TOP_P)?,
        })
    }

    /// Range checks: temperature in [0, 2], top_p in (0, 1], max_tokens > 0.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            anyhow::bail!("LLM_MODEL must not be empty");
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            anyhow::bail!("LLM_TEMPERATURE must be within 0..=2, got {}", self.temperature);
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            anyhow::bail!("LLM_TOP_P must be within (0, 1], got {}", self.top_p);
        }
        if self.max_tokens == 0 {
            anyhow::bail!("LLM_MAX_TOKENS must be greater than 0");
        }
        Ok(())
    }
}
