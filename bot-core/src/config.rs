//! Reading settings from the process environment.
//!
//! A value present in the environment always wins over the default. Load `.env` (dotenvy) before
//! calling these.

use std::env::{self, VarError};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::ConfigError;

/// Returns the value of `name`, or `default` when unset.
///
/// Fails with [`ConfigError::Missing`] when the variable is unset and no default is given, and with
/// [`ConfigError::Invalid`] when the value is not valid unicode.
pub fn get_env_var(name: &str, default: Option<&str>) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => default
            .map(str::to_string)
            .ok_or_else(|| ConfigError::Missing(name.to_string())),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Invalid {
            name: name.to_string(),
            value: raw.to_string_lossy().into_owned(),
            reason: "not valid unicode".to_string(),
        }),
    }
}

/// Reads `name` (or `default`) and parses it into `T`.
pub fn parse_env_var<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = get_env_var(name, Some(default))?;
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name: name.to_string(),
        value: raw.clone(),
        reason: e.to_string(),
    })
}

/// Boolean flag: true only when the value, lower-cased, is `true`.
pub fn env_flag(name: &str, default: bool) -> Result<bool, ConfigError> {
    let raw = get_env_var(name, Some(if default { "true" } else { "false" }))?;
    Ok(raw.eq_ignore_ascii_case("true"))
}

/// Masks a secret for logs: first 7 + `***` + last 4 characters; 11 characters or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
