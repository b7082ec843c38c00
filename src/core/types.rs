//! Core types: user, chat, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message with its sender and chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Handler result for the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to the next handler.
    Continue,
    /// Message was consumed; stop the chain.
    Stop,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// A message processor in the chain. Return Stop once the message has been
/// answered; Continue lets later handlers see it.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::core::error::Result<HandlerResponse>;
}
