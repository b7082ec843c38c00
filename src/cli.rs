//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "faq-bot")]
#[command(about = "Telegram FAQ bot: canned command replies from static files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    Ok(BotConfig::load(token)?)
}
