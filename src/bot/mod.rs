//! Telegram transport: long-polling dispatcher and outbound delivery

pub mod commands;
pub mod handlers;

use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::PollType;

use crate::config::BotConfig;
use crate::messenger::{Messenger, MessengerError, MessengerResult};
use crate::provider::QuestionProvider;
use crate::types::{InboundMessage, OutboundMessage};

pub use handlers::{handle_message, BotContext, RefillTask, HELP_TEXT};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// [`Messenger`] backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, message: OutboundMessage) -> MessengerResult<()> {
        match message {
            OutboundMessage::Text { chat_id, text } => {
                self.bot
                    .send_message(ChatId(chat_id), text)
                    .await
                    .map_err(|e| MessengerError::Telegram(e.to_string()))?;
            }
            OutboundMessage::Quiz { chat_id, poll } => {
                let correct_option = u8::try_from(poll.correct_option).map_err(|_| {
                    MessengerError::Telegram(format!(
                        "correct option {} out of range",
                        poll.correct_option
                    ))
                })?;
                self.bot
                    .send_poll(ChatId(chat_id), poll.question, poll.options)
                    .type_(PollType::Quiz)
                    .correct_option_id(correct_option)
                    .await
                    .map_err(|e| MessengerError::Telegram(e.to_string()))?;
            }
        }
        Ok(())
    }
}

/// Convert a Telegram message into the router's view of it.
/// Messages without a sender (channel posts) are dropped.
pub fn to_inbound(msg: &Message) -> Option<InboundMessage> {
    let user = msg.from.as_ref()?;
    Some(InboundMessage {
        user_id: user.id.0,
        chat_id: msg.chat.id.0,
        first_name: user.first_name.clone(),
        text: msg.text().map(str::to_string),
    })
}

/// Run the bot until Ctrl+C
pub async fn run(
    config: BotConfig,
    bot_token: String,
    provider: Arc<dyn QuestionProvider>,
) {
    let bot = Bot::new(bot_token);
    tracing::info!("Serving questions from {}", provider.name());
    let ctx = BotContext::new(
        provider,
        Arc::new(TelegramMessenger::new(bot.clone())),
        config.bot_name.clone(),
    );

    let sessions = ctx.sessions.clone();

    let handler = Update::filter_message().endpoint(move |msg: Message| {
        let ctx = ctx.clone();
        async move {
            match to_inbound(&msg) {
                Some(inbound) => {
                    handle_message(inbound, &ctx).await;
                }
                None => tracing::debug!("Ignoring message {} without sender", msg.id),
            }
            HandlerResult::Ok(())
        }
    });

    tracing::info!("Starting {} with long polling...", config.bot_name);
    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    tracing::info!("Bot stopped with {} active sessions", sessions.len().await);
}
