//! Command parsing

/// Marker that turns a text message into a command
pub const COMMAND_PREFIX: char = '/';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Bye,
    Next,
    /// Anything else starting with the prefix, kept verbatim for the reply
    Unknown(String),
}

impl Command {
    /// Parse a message text. Returns `None` for plain (non-command) text.
    ///
    /// The whole text must match a command. In group chats Telegram appends
    /// the addressed bot (`/next@some_bot`); that form is accepted only when
    /// it names this bot.
    pub fn parse(text: &str, bot_name: &str) -> Option<Self> {
        if !text.starts_with(COMMAND_PREFIX) {
            return None;
        }

        let bare = match text.split_once('@') {
            Some((command, mention)) if mention.eq_ignore_ascii_case(bot_name) => command,
            _ => text,
        };

        Some(match bare {
            "/start" => Self::Start,
            "/bye" => Self::Bye,
            "/next" => Self::Next,
            _ => Self::Unknown(text.to_string()),
        })
    }
}
