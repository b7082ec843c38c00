//! Generic command handler: resolves the reply for a recognized command
//! via the command table and the message cache, then sends it through the
//! transport boundary.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::cache::{MessageCache, MAX_MESSAGE_BYTES};
use crate::commands::{parse_command, CommandSpec, CommandTable, Reply};
use crate::core::{Bot, BotError, Handler, HandlerResponse, Message, Result, SendOptions};

/// Sent instead of the reply body when its backing file cannot be read.
/// The failed load is not cached, so the next request retries.
const UNAVAILABLE_REPLY: &str = "Sorry, that message is unavailable right now.";

pub struct CommandHandler {
    table: CommandTable,
    cache: Arc<MessageCache>,
    bot: Arc<dyn Bot>,
    messages_dir: PathBuf,
}

impl CommandHandler {
    pub fn new(
        table: CommandTable,
        cache: Arc<MessageCache>,
        bot: Arc<dyn Bot>,
        messages_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            table,
            cache,
            bot,
            messages_dir: messages_dir.into(),
        }
    }

    async fn resolve(&self, spec: &CommandSpec) -> Result<String> {
        match &spec.reply {
            Reply::Static(text) => Ok((*text).to_string()),
            Reply::FromFile { key, path } => {
                self.cache
                    .get_or_load(key, self.messages_dir.join(path), MAX_MESSAGE_BYTES)
                    .await
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(name) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        let Some(spec) = self.table.get(name) else {
            debug!(command = name, "Unknown command, passing through");
            return Ok(HandlerResponse::Continue);
        };

        match self.resolve(spec).await {
            Ok(text) => {
                info!(
                    chat_id = message.chat.id,
                    command = name,
                    reply_len = text.len(),
                    "Sending command reply"
                );
                self.bot
                    .send_message(&message.chat, &text, &spec.options)
                    .await?;
            }
            Err(BotError::ResourceUnavailable { ref path, .. }) => {
                error!(
                    chat_id = message.chat.id,
                    command = name,
                    path = %path,
                    "Reply file unavailable"
                );
                self.bot
                    .send_message(&message.chat, UNAVAILABLE_REPLY, &SendOptions::default())
                    .await?;
            }
            Err(e) => return Err(e),
        }

        Ok(HandlerResponse::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    use crate::commands::default_specs;
    use crate::core::{Chat, Format, User};

    /// Records every outbound send for assertions.
    #[derive(Default)]
    struct RecordingBot {
        sent: Mutex<Vec<(i64, String, SendOptions)>>,
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn send_message(
            &self,
            chat: &Chat,
            text: &str,
            options: &SendOptions,
        ) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((chat.id, text.to_string(), *options));
            Ok(())
        }
    }

    fn message(content: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: Some("tester".to_string()),
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 42,
                chat_type: "Private".to_string(),
            },
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    fn handler_with_dir(dir: &TempDir, bot: Arc<RecordingBot>) -> CommandHandler {
        CommandHandler::new(
            CommandTable::new(default_specs()).unwrap(),
            Arc::new(MessageCache::new()),
            bot,
            dir.path(),
        )
    }

    #[tokio::test]
    async fn test_static_command_sends_plain_text() {
        let dir = TempDir::new().unwrap();
        let bot = Arc::new(RecordingBot::default());
        let handler = handler_with_dir(&dir, bot.clone());

        let response = handler.handle(&message("/start")).await.unwrap();
        assert_eq!(response, HandlerResponse::Stop);

        let sent = bot.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (chat_id, text, options) = &sent[0];
        assert_eq!(*chat_id, 42);
        assert_eq!(text, "Hi");
        assert_eq!(options.format, Format::Plain);
        assert!(!options.disable_link_preview);
    }

    #[tokio::test]
    async fn test_file_command_sends_transformed_html() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("faq.md"), "<b>FAQ</b> :smile:").unwrap();
        let bot = Arc::new(RecordingBot::default());
        let handler = handler_with_dir(&dir, bot.clone());

        let response = handler.handle(&message("/faq")).await.unwrap();
        assert_eq!(response, HandlerResponse::Stop);

        let sent = bot.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (_, text, options) = &sent[0];
        assert!(text.starts_with("<b>FAQ</b> "));
        assert!(!text.contains(":smile:"));
        assert_eq!(options.format, Format::Html);
        assert!(options.disable_link_preview);
    }

    #[tokio::test]
    async fn test_non_command_and_unknown_command_continue() {
        let dir = TempDir::new().unwrap();
        let bot = Arc::new(RecordingBot::default());
        let handler = handler_with_dir(&dir, bot.clone());

        for content in ["just chatting", "/unknowncmd"] {
            let response = handler.handle(&message(content)).await.unwrap();
            assert_eq!(response, HandlerResponse::Continue);
        }
        assert!(bot.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_sends_fallback_and_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let bot = Arc::new(RecordingBot::default());
        let handler = handler_with_dir(&dir, bot.clone());

        // faq.md does not exist yet
        let response = handler.handle(&message("/faq")).await.unwrap();
        assert_eq!(response, HandlerResponse::Stop);
        assert_eq!(bot.sent.lock().unwrap()[0].1, UNAVAILABLE_REPLY);
        assert!(!handler.cache.contains("faq").await);

        // once the file appears the same command serves it normally
        fs::write(dir.path().join("faq.md"), "faq body").unwrap();
        handler.handle(&message("/faq")).await.unwrap();
        assert_eq!(bot.sent.lock().unwrap()[1].1, "faq body");
        assert!(handler.cache.contains("faq").await);
    }

    #[tokio::test]
    async fn test_command_with_bot_suffix_dispatches() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("list.md"), "the list").unwrap();
        let bot = Arc::new(RecordingBot::default());
        let handler = handler_with_dir(&dir, bot.clone());

        let response = handler.handle(&message("/list@my_faq_bot")).await.unwrap();
        assert_eq!(response, HandlerResponse::Stop);
        assert_eq!(bot.sent.lock().unwrap()[0].1, "the list");
    }
}
