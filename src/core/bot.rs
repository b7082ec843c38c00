//! Transport boundary for outbound messages.
//!
//! [`Bot`] is transport-agnostic; the production implementation lives in
//! `crate::telegram` and maps it onto teloxide. Tests substitute a
//! recording implementation.

use crate::core::error::Result;
use crate::core::types::Chat;
use async_trait::async_trait;

/// Format hint for an outbound message body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    #[default]
    Plain,
    /// Render inline HTML tags in the body.
    Html,
}

/// Delivery options attached to an outbound message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SendOptions {
    pub format: Format,
    pub disable_link_preview: bool,
}

/// Abstraction for sending messages to a chat. Delivery retries and
/// failure semantics belong to the implementation.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str, options: &SendOptions) -> Result<()>;
}
