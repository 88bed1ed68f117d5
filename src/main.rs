use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triviabot::{bot, config::BotConfig};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triviabot=debug,teloxide=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting trivia bot...");

    let config = BotConfig::from_env();
    let Some(bot_token) = config.bot_token.clone() else {
        tracing::error!("BOT_TOKEN is not set, cannot connect to Telegram");
        std::process::exit(1);
    };

    let provider = match config.provider.build_provider() {
        Ok(provider) => {
            tracing::info!("Question provider ready: {}", config.provider.api_url);
            provider
        }
        Err(e) => {
            tracing::error!("Failed to initialize question provider: {}", e);
            std::process::exit(1);
        }
    };

    bot::run(config, bot_token, Arc::new(provider)).await;
}
