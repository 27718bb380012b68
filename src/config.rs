use anyhow::{Context, Result};
use std::fmt;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "CHAT_ID";
pub const API_BASE_VAR: &str = "TELEGRAM_API_BASE";

/// Credentials and endpoint for a [`Notifier`](crate::Notifier).
/// Values are taken as-is; nothing here checks them.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
}

impl Config {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup(BOT_TOKEN_VAR)
            .with_context(|| format!("{} not set in environment or .env", BOT_TOKEN_VAR))?;
        let chat_id = lookup(CHAT_ID_VAR)
            .with_context(|| format!("{} not set in environment or .env", CHAT_ID_VAR))?;

        let config = Self::new(bot_token, chat_id);
        Ok(match lookup(API_BASE_VAR) {
            Some(base) if !base.is_empty() => config.with_api_base(base),
            _ => config,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}
