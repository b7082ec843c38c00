use std::env;

use crate::core::{BotError, Result};

/// FAQ bot configuration, loaded from environment variables.
pub struct BotConfig {
    pub bot_token: String,
    /// Directory holding the command reply files (list.md, faq.md, ...).
    pub messages_dir: String,
    pub log_file: String,
    /// Optional Telegram Bot API base URL override. Set to point requests
    /// at a mock server in tests. Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads config from environment variables.
    /// If `token` is provided it overrides BOT_TOKEN; a missing token is
    /// an error the binary treats as fatal (non-zero exit).
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| {
                BotError::Config("Missing BOT_TOKEN environment variable".to_string())
            })?,
        };
        let messages_dir = env::var("MESSAGES_DIR").unwrap_or_else(|_| "static".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/faq-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            messages_dir,
            log_file,
            telegram_api_url,
        })
    }

    /// Re-checks startup invariants before the runner starts.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(BotError::Config("BOT_TOKEN must not be empty".to_string()));
        }
        if self.messages_dir.trim().is_empty() {
            return Err(BotError::Config(
                "MESSAGES_DIR must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
