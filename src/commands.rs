//! Data-driven command dispatch table.
//!
//! Each command is an immutable [`CommandSpec`]: name, reply source, and
//! delivery options. One generic handler (`handlers::CommandHandler`)
//! consumes the table; there is no per-command code.

use std::collections::HashMap;

use crate::core::{Format, HandlerError, Result, SendOptions};

/// How a command's reply text is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A fixed string, sent as-is.
    Static(&'static str),
    /// Contents of a message file under the configured messages directory,
    /// cached under `key` after the first load.
    FromFile {
        key: &'static str,
        path: &'static str,
    },
}

/// Immutable per-command descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command name without the leading slash. Matched case-sensitively.
    pub name: &'static str,
    pub reply: Reply,
    pub options: SendOptions,
}

/// Mapping from command name to its spec. Duplicate names are rejected at
/// construction instead of letting a later registration win silently.
#[derive(Debug)]
pub struct CommandTable {
    commands: HashMap<&'static str, CommandSpec>,
}

impl CommandTable {
    pub fn new(specs: Vec<CommandSpec>) -> Result<Self> {
        let mut commands = HashMap::with_capacity(specs.len());
        for spec in specs {
            let name = spec.name;
            if commands.insert(name, spec).is_some() {
                return Err(HandlerError::DuplicateCommand(name.to_string()).into());
            }
        }
        Ok(Self { commands })
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

const HTML_NO_PREVIEW: SendOptions = SendOptions {
    format: Format::Html,
    disable_link_preview: true,
};

/// The bot's command set: `/start` plus the file-backed list and FAQ
/// replies. File paths are relative to the messages directory.
pub fn default_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "start",
            reply: Reply::Static("Hi"),
            options: SendOptions {
                format: Format::Plain,
                disable_link_preview: false,
            },
        },
        CommandSpec {
            name: "list",
            reply: Reply::FromFile {
                key: "list",
                path: "list.md",
            },
            options: HTML_NO_PREVIEW,
        },
        CommandSpec {
            name: "Mlist",
            reply: Reply::FromFile {
                key: "mlist",
                path: "mlist.md",
            },
            options: HTML_NO_PREVIEW,
        },
        CommandSpec {
            name: "Ylist",
            reply: Reply::FromFile {
                key: "ylist",
                path: "ylist.md",
            },
            options: HTML_NO_PREVIEW,
        },
        CommandSpec {
            name: "Ulist",
            reply: Reply::FromFile {
                key: "ulist",
                path: "ulist.md",
            },
            options: HTML_NO_PREVIEW,
        },
        CommandSpec {
            name: "faq",
            reply: Reply::FromFile {
                key: "faq",
                path: "faq.md",
            },
            options: HTML_NO_PREVIEW,
        },
    ]
}

/// Extracts the command name from a message body: leading `/`, optional
/// `@botname` suffix stripped, anything after the first whitespace
/// ignored. Returns None for plain text.
pub fn parse_command(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    let word = rest.split_whitespace().next()?;
    let name = word.split('@').next().unwrap_or(word);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_plain() {
        assert_eq!(parse_command("/start"), Some("start"));
        assert_eq!(parse_command("/faq extra words"), Some("faq"));
    }

    #[test]
    fn test_parse_command_strips_bot_suffix() {
        assert_eq!(parse_command("/list@my_faq_bot"), Some("list"));
        assert_eq!(parse_command("/list@my_faq_bot arg"), Some("list"));
    }

    #[test]
    fn test_parse_command_non_commands() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("/@bot"), None);
    }

    #[test]
    fn test_parse_command_case_sensitive_names() {
        assert_eq!(parse_command("/Mlist"), Some("Mlist"));
        assert_ne!(parse_command("/mlist"), Some("Mlist"));
    }

    #[test]
    fn test_default_specs_table() {
        let table = CommandTable::new(default_specs()).unwrap();
        assert_eq!(table.len(), 6);

        let start = table.get("start").unwrap();
        assert_eq!(start.reply, Reply::Static("Hi"));
        assert_eq!(start.options.format, Format::Plain);

        let faq = table.get("faq").unwrap();
        assert_eq!(
            faq.reply,
            Reply::FromFile {
                key: "faq",
                path: "faq.md"
            }
        );
        assert_eq!(faq.options.format, Format::Html);
        assert!(faq.options.disable_link_preview);

        assert!(table.get("unknown").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let dup = vec![
            CommandSpec {
                name: "faq",
                reply: Reply::Static("one"),
                options: SendOptions::default(),
            },
            CommandSpec {
                name: "faq",
                reply: Reply::Static("two"),
                options: SendOptions::default(),
            },
        ];
        let err = CommandTable::new(dup).unwrap_err();
        assert!(err.to_string().contains("Duplicate command"));
    }
}
