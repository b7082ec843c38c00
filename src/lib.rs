//! # Telegram FAQ bot
//!
//! A minimal command bot: each registered command replies with a fixed
//! string or the contents of a static file, with emoji shortcodes
//! rewritten to glyphs. File-backed replies are loaded once into a
//! process-lifetime [`MessageCache`] and served from memory afterwards.
//!
//! Dispatch is data-driven: a [`CommandTable`] of immutable
//! [`CommandSpec`] descriptors consumed by one generic
//! [`CommandHandler`], wired to Telegram through the [`Bot`] transport
//! boundary and teloxide long polling.

pub mod cache;
pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod emoji;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cache::{MessageCache, MAX_MESSAGE_BYTES};
pub use chain::HandlerChain;
pub use cli::{load_config, Cli, Commands};
pub use commands::{default_specs, parse_command, CommandSpec, CommandTable, Reply};
pub use config::BotConfig;
pub use crate::core::{
    init_tracing, Bot, BotError, Chat, Format, Handler, HandlerError, HandlerResponse, Message,
    Result, SendOptions, ToCoreMessage, ToCoreUser, User,
};
pub use emoji::emojize;
pub use handlers::CommandHandler;
pub use runner::{build_handler_chain, run_bot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
