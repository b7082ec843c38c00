//! Startup: validate config, init tracing, wire the cache, command table,
//! and transport adapter, then run the polling loop.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, instrument};

use crate::cache::MessageCache;
use crate::chain::HandlerChain;
use crate::commands::{default_specs, CommandTable};
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot};
use crate::handlers::CommandHandler;
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Builds the teloxide Bot, honoring the TELEGRAM_API_URL override.
fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Builds the handler chain: one generic command handler over the default
/// command table, backed by a fresh message cache. Exposed so integration
/// tests can inject a mock transport and drive the chain directly.
pub fn build_handler_chain(bot: Arc<dyn Bot>, messages_dir: &str) -> Result<HandlerChain> {
    let cache = Arc::new(MessageCache::new());
    let table = CommandTable::new(default_specs())?;
    let handler = CommandHandler::new(table, cache, bot, messages_dir);
    Ok(HandlerChain::new().add_handler(Arc::new(handler)))
}

/// Main entry: init logging, validate config, wire components, run polling.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(dir) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(dir)?;
    }
    init_tracing(&config.log_file)?;

    info!(messages_dir = %config.messages_dir, "Initializing bot");

    let teloxide_bot = build_teloxide_bot(&config);
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let chain = build_handler_chain(adapter, &config.messages_dir)?;

    info!("Bot started successfully");

    run_repl(teloxide_bot, chain).await
}
