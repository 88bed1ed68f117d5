//! Bot configuration from the environment

use crate::provider::ProviderConfig;

/// Username the bot answers to when none is configured
pub const DEFAULT_BOT_NAME: &str = "j25trivia_bot";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot username, used to recognize `/command@bot_name` in group chats
    pub bot_name: String,
    /// Telegram bot token. Not validated here; the transport needs it
    pub bot_token: Option<String>,
    pub provider: ProviderConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
            bot_token: None,
            provider: ProviderConfig::default(),
        }
    }
}

impl BotConfig {
    /// Load configuration from environment variables
    /// BOT_NAME defaults to `j25trivia_bot`; BOT_TOKEN has no default
    pub fn from_env() -> Self {
        let bot_name = std::env::var("BOT_NAME")
            .ok()
            .map(|s| s.trim().trim_start_matches('@').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BOT_NAME.to_string());

        let bot_token = std::env::var("BOT_TOKEN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            bot_name,
            bot_token,
            provider: ProviderConfig::from_env(),
        }
    }
}
