use super::*;
use std::time::Instant;

/// Public Open Trivia Database endpoint
pub const OPENTDB_API_URL: &str = "https://opentdb.com/api.php";

/// Open Trivia Database provider implementation
pub struct OpenTdbProvider {
    api_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenTdbProvider {
    /// Create a new provider for the given endpoint
    pub fn new(api_url: String, timeout: Duration) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        Ok(Self {
            api_url,
            timeout,
            client,
        })
    }
}

#[async_trait]
impl QuestionProvider for OpenTdbProvider {
    async fn fetch(&self, amount: u32) -> ProviderResult<QuestionBatch> {
        let start = Instant::now();

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .get(&self.api_url)
                .query(&[("amount", amount)])
                .send(),
        )
        .await
        .map_err(|_| ProviderError::Timeout(self.timeout))?
        .map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout)
            } else {
                ProviderError::Request(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let batch: QuestionBatch = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        if batch.response_code != 0 {
            return Err(ProviderError::ResponseCode(batch.response_code));
        }

        tracing::debug!(
            "Fetched {} questions from {} in {}ms",
            batch.results.len(),
            self.api_url,
            start.elapsed().as_millis()
        );

        Ok(batch)
    }

    fn name(&self) -> &str {
        "opentdb"
    }
}
