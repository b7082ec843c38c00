//! Runs registered handlers in order until one consumes the message.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs handlers in registration order. Stops at the first handler
    /// that returns [`HandlerResponse::Stop`]; errors abort the chain.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(handler = %handler_name, response = ?response, "Handler processed");

            if response == HandlerResponse::Stop {
                info!(
                    chat_id = message.chat.id,
                    handler = %handler_name,
                    "Chain stopped by handler"
                );
                return Ok(HandlerResponse::Stop);
            }
        }
        Ok(HandlerResponse::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::core::{Chat, User};

    struct FixedHandler {
        response: HandlerResponse,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler for FixedHandler {
        async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response)
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

    #[tokio::test]
    async fn test_stop_short_circuits() {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));
        let chain = HandlerChain::new()
            .add_handler(Arc::new(FixedHandler {
                response: HandlerResponse::Stop,
                calls: first_calls.clone(),
            }))
            .add_handler(Arc::new(FixedHandler {
                response: HandlerResponse::Continue,
                calls: second_calls.clone(),
            }));

        let response = chain.handle(&message("/faq")).await.unwrap();
        assert_eq!(response, HandlerResponse::Stop);
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_continue() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = HandlerChain::new()
            .add_handler(Arc::new(FixedHandler {
                response: HandlerResponse::Continue,
                calls: calls.clone(),
            }))
            .add_handler(Arc::new(FixedHandler {
                response: HandlerResponse::Continue,
                calls: calls.clone(),
            }));

        let response = chain.handle(&message("hello")).await.unwrap();
        assert_eq!(response, HandlerResponse::Continue);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_chain_continues() {
        let chain = HandlerChain::new();
        let response = chain.handle(&message("anything")).await.unwrap();
        assert_eq!(response, HandlerResponse::Continue);
    }
}
