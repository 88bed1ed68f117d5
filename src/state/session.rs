//! Per-user quiz session: the question pool and the set of shown questions
//!
//! The pool is consumed from its end, so within one refill batch questions are
//! delivered in reverse provider order. A question counts as shown only once
//! it is taken from the pool, never at fetch time.

use std::collections::HashSet;

use crate::provider::{ProviderError, ProviderResult};
use crate::types::{QuestionBatch, TriviaQuestion, UserId};

/// Why a refill left the pool empty
#[derive(Debug, thiserror::Error)]
pub enum RefillError {
    #[error("provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("provider returned no unseen questions")]
    Exhausted,
}

#[derive(Debug)]
pub struct Session {
    user_id: UserId,
    shown_questions: HashSet<String>,
    pool: Vec<TriviaQuestion>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            shown_questions: HashSet::new(),
            pool: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_pool_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn shown_len(&self) -> usize {
        self.shown_questions.len()
    }

    #[cfg(test)]
    pub fn has_shown(&self, question: &str) -> bool {
        self.shown_questions.contains(question)
    }

    /// Questions waiting to be delivered, in pool order
    #[cfg(test)]
    pub fn pool(&self) -> &[TriviaQuestion] {
        &self.pool
    }

    /// Append every question that was neither shown nor already pooled.
    /// Batch order is preserved. Returns the number of questions added.
    pub fn absorb_batch(&mut self, results: Vec<TriviaQuestion>) -> usize {
        let mut pooled: HashSet<String> = self.pool.iter().map(|q| q.question.clone()).collect();
        let before = self.pool.len();

        for question in results {
            if self.shown_questions.contains(&question.question) {
                continue;
            }
            if !pooled.insert(question.question.clone()) {
                continue;
            }
            self.pool.push(question);
        }

        self.pool.len() - before
    }

    /// Apply the outcome of a provider fetch to this session.
    ///
    /// On provider failure nothing changes. On success the novel questions are
    /// appended; if the pool is still empty afterwards the provider is
    /// considered exhausted. Returns the number of questions added.
    pub fn refill(&mut self, outcome: ProviderResult<QuestionBatch>) -> Result<usize, RefillError> {
        let batch = outcome?;
        if batch.response_code != 0 {
            return Err(ProviderError::ResponseCode(batch.response_code).into());
        }

        let fetched = batch.results.len();
        let added = self.absorb_batch(batch.results);

        tracing::debug!(
            "User {}: refill kept {} of {} fetched questions",
            self.user_id,
            added,
            fetched
        );

        if self.pool.is_empty() {
            return Err(RefillError::Exhausted);
        }
        Ok(added)
    }

    /// Pop the next question and mark it as shown in one step
    pub fn take_next(&mut self) -> Option<TriviaQuestion> {
        let question = self.pool.pop()?;
        self.shown_questions.insert(question.question.clone());
        Some(question)
    }
}
