mod opentdb;

use async_trait::async_trait;
use std::time::Duration;

use crate::types::QuestionBatch;

pub use opentdb::{OpenTdbProvider, OPENTDB_API_URL};

/// Number of questions requested per refill
pub const TRIVIA_BATCH_SIZE: u32 = 10;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur while fetching questions
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API request failed: {0}")]
    Request(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API returned HTTP status {0}")]
    Status(u16),

    #[error("Response parsing failed: {0}")]
    Parse(String),

    #[error("API response code: {0}")]
    ResponseCode(i64),
}

/// Source of trivia questions
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Fetch up to `amount` questions.
    ///
    /// Transport failures and non-zero application response codes are both
    /// reported as errors; an `Ok` batch always carries response code 0.
    async fn fetch(&self, amount: u32) -> ProviderResult<QuestionBatch>;

    /// Get the name of this provider
    fn name(&self) -> &str;
}

/// Configuration for the question provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Endpoint serving opentdb-compatible JSON
    pub api_url: String,
    /// Timeout for a single batch request
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: OPENTDB_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_url = std::env::var("TRIVIA_API_URL")
            .ok()
            .and_then(|url| {
                let trimmed = url.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| OPENTDB_API_URL.to_string());

        Self {
            api_url,
            timeout: std::env::var("TRIVIA_TIMEOUT")
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(10)),
        }
    }

    /// Build the configured provider
    pub fn build_provider(&self) -> ProviderResult<OpenTdbProvider> {
        OpenTdbProvider::new(self.api_url.clone(), self.timeout)
    }
}
