//! Handler implementations for the chain.

mod command_handler;

pub use command_handler::CommandHandler;
