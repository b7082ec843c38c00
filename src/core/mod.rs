//! Core types and traits: error taxonomy, message types, the transport
//! boundary, and tracing initialization. Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, Format, SendOptions};
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
