use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type UserId = u64;
pub type ChatId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Multiple,
    Boolean,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single question as returned by the trivia provider.
/// Text fields may still carry HTML entities; see [`crate::sanitize`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriviaQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
}

/// Batch of questions with the provider's application-level status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBatch {
    /// 0 = success, anything else is a provider-side failure
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<TriviaQuestion>,
}

/// Single-correct-answer quiz poll, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPoll {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`
    pub correct_option: usize,
}

/// Transport-independent view of an inbound chat message
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub first_name: String,
    /// `None` for stickers, photos and other non-text messages
    pub text: Option<String>,
}

impl InboundMessage {
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

/// Everything the bot can send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    Text { chat_id: ChatId, text: String },
    Quiz { chat_id: ChatId, poll: QuizPoll },
}

impl OutboundMessage {
    pub fn text(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self::Text {
            chat_id,
            text: text.into(),
        }
    }

    pub fn chat_id(&self) -> ChatId {
        match self {
            Self::Text { chat_id, .. } | Self::Quiz { chat_id, .. } => *chat_id,
        }
    }
}
