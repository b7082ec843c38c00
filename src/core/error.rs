use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Backing message file missing or unreadable. Failed loads are never
    /// cached; a later request for the same key may retry.
    #[error("Resource unavailable: {path}: {source}")]
    ResourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    /// Required startup parameter missing or invalid; fatal at startup.
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Duplicate command registration: {0}")]
    DuplicateCommand(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
