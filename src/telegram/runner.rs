//! Polling runner: converts teloxide messages to core Message and feeds
//! them to the HandlerChain via teloxide's long-polling REPL.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// Calls get_me() once up front to log the bot identity; each inbound
/// message is converted to a core Message and handled in a spawned task so
/// the polling loop is never blocked by a slow handler.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity resolved");
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            match msg.text() {
                Some(text) => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        message_content = %text,
                        "Received message"
                    );
                }
                None => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Received non-text message"
                    );
                }
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
