//! Binary for the Telegram FAQ bot.

use anyhow::Result;
use clap::Parser;
use telegram_faq_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
    }
}
