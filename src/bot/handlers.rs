//! Command routing
//!
//! Each user is either without a session or in an active one. `/start` and
//! `/bye` move between the two, `/next` delivers questions. Replies go out
//! through the [`Messenger`] as soon as they are known; a `/next` that has to
//! wait for the provider acknowledges first and finishes on a spawned task.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::messenger::{deliver, Messenger};
use crate::poll::build_poll;
use crate::provider::{QuestionProvider, TRIVIA_BATCH_SIZE};
use crate::state::{SessionStore, SharedSession};
use crate::types::{ChatId, InboundMessage, OutboundMessage, UserId};

use super::commands::Command;

pub const HELP_TEXT: &str =
    "You can request next trivia question by sending /next or finish the session by sending /bye.";

/// Handle to a refill running in the background
pub type RefillTask = JoinHandle<()>;

/// Everything a handler needs, cheap to clone
#[derive(Clone)]
pub struct BotContext {
    pub sessions: SessionStore,
    pub provider: Arc<dyn QuestionProvider>,
    pub messenger: Arc<dyn Messenger>,
    pub bot_name: String,
}

impl BotContext {
    pub fn new(
        provider: Arc<dyn QuestionProvider>,
        messenger: Arc<dyn Messenger>,
        bot_name: impl Into<String>,
    ) -> Self {
        Self {
            sessions: SessionStore::new(),
            provider,
            messenger,
            bot_name: bot_name.into(),
        }
    }

    async fn reply(&self, chat_id: ChatId, text: impl Into<String>) {
        deliver(self.messenger.as_ref(), OutboundMessage::text(chat_id, text)).await;
    }
}

/// Handle one inbound message.
///
/// Returns the background refill if this message started one, so callers
/// that care (tests, mostly) can wait for the second reply.
pub async fn handle_message(msg: InboundMessage, ctx: &BotContext) -> Option<RefillTask> {
    let Some(text) = msg.text.as_deref() else {
        tracing::debug!("Ignoring non-text message from user {}", msg.user_id);
        return None;
    };

    let Some(command) = Command::parse(text, &ctx.bot_name) else {
        tracing::debug!("Ignoring plain text from user {}", msg.user_id);
        return None;
    };

    tracing::info!("User {} sent {:?}", msg.user_id, command);

    match command {
        Command::Start => {
            handle_session_start(&msg, ctx).await;
            None
        }
        Command::Bye => {
            handle_session_end(&msg, ctx).await;
            None
        }
        Command::Next => handle_next_request(&msg, ctx).await,
        Command::Unknown(text) => {
            ctx.reply(
                msg.chat_id,
                format!("Sorry, I don't understand this command: '{}'\n{}", text, HELP_TEXT),
            )
            .await;
            None
        }
    }
}

async fn handle_session_start(msg: &InboundMessage, ctx: &BotContext) {
    ctx.sessions.create_if_absent(msg.user_id).await;
    ctx.reply(
        msg.chat_id,
        format!("Hello {}!\n{}", msg.first_name, HELP_TEXT),
    )
    .await;
}

async fn handle_session_end(msg: &InboundMessage, ctx: &BotContext) {
    // No session, no reply
    if ctx.sessions.remove(msg.user_id).await.is_none() {
        return;
    }
    ctx.reply(
        msg.chat_id,
        format!("Good bye {}, see you next time!", msg.first_name),
    )
    .await;
}

async fn handle_next_request(msg: &InboundMessage, ctx: &BotContext) -> Option<RefillTask> {
    let Some(session) = ctx.sessions.get(msg.user_id).await else {
        ctx.reply(
            msg.chat_id,
            "I beg your pardon, but who are you? We haven't been introduced yet... (please /start me)",
        )
        .await;
        return None;
    };

    let next = session.lock().await.take_next();
    if let Some(question) = next {
        let poll = build_poll(&question, &mut rand::rng());
        deliver(
            ctx.messenger.as_ref(),
            OutboundMessage::Quiz {
                chat_id: msg.chat_id,
                poll,
            },
        )
        .await;
        return None;
    }

    // Acknowledge before the provider is even asked
    ctx.reply(
        msg.chat_id,
        format!(
            "{}, please wait till I find more questions for you...",
            msg.first_name
        ),
    )
    .await;

    Some(spawn_refill(
        ctx.clone(),
        session,
        msg.user_id,
        msg.chat_id,
        msg.first_name.clone(),
    ))
}

/// Fetch a batch for `session` and deliver the first new question, or an
/// apology if nothing new could be found.
///
/// A session that was ended while the fetch was in flight is left alone:
/// nothing is delivered and nothing is put back into the store.
fn spawn_refill(
    ctx: BotContext,
    session: SharedSession,
    user_id: UserId,
    chat_id: ChatId,
    first_name: String,
) -> RefillTask {
    tokio::spawn(async move {
        let outcome = ctx.provider.fetch(TRIVIA_BATCH_SIZE).await;

        let reply = {
            let mut guard = session.lock().await;
            if !ctx.sessions.is_current(user_id, &session).await {
                tracing::info!(
                    "Session for user {} ended before the refill completed, discarding batch",
                    user_id
                );
                return;
            }

            match guard.refill(outcome) {
                Ok(added) => {
                    tracing::info!("Refilled pool for user {} with {} questions", user_id, added);
                    guard.take_next().map(|question| OutboundMessage::Quiz {
                        chat_id,
                        poll: build_poll(&question, &mut rand::rng()),
                    })
                }
                Err(e) => {
                    tracing::warn!(
                        "Couldn't get new questions for user {} from {}: {}",
                        user_id,
                        ctx.provider.name(),
                        e
                    );
                    None
                }
            }
        };

        let reply = reply.unwrap_or_else(|| {
            OutboundMessage::text(
                chat_id,
                format!(
                    "Sorry, {}, but I cannot find more questions now, please try again later.",
                    first_name
                ),
            )
        });
        deliver(ctx.messenger.as_ref(), reply).await;
    })
}
