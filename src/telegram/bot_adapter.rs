//! Wraps teloxide::Bot and implements the core [`Bot`] trait. Production
//! code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, LinkPreviewOptions, ParseMode};

use crate::core::{Bot as CoreBot, BotError, Chat, Format, Result, SendOptions};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait,
/// mapping [`SendOptions`] onto Telegram parse mode and link-preview
/// suppression.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str, options: &SendOptions) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), text.to_string());

        if options.format == Format::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if options.disable_link_preview {
            request = request.link_preview_options(LinkPreviewOptions {
                is_disabled: true,
                url: None,
                prefer_small_media: false,
                prefer_large_media: false,
                show_above_text: false,
            });
        }

        request
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
