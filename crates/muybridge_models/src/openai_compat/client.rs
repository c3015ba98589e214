use super::conversion::{from_chat_response, to_chat_request};
use super::dto::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use muybridge_core::{GenerateRequest, GenerateResponse};
use muybridge_error::{ConfigError, HttpError, JsonError, MuybridgeResult};
use muybridge_interface::{MuybridgeDriver, ToolDefinition, ToolUse};
use reqwest::Client;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::{debug, error, instrument, warn};

/// Endpoint used when `OPENAI_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const DEFAULT_HTTP_RETRIES: usize = 2;
const INITIAL_BACKOFF_MS: u64 = 500;
const MAX_BACKOFF_SECS: u64 = 8;

/// Client for any endpoint speaking the OpenAI chat-completions protocol.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    http_retries: usize,
}

impl OpenAICompatibleClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token
    /// * `model` - Default model identifier (e.g., "gpt-4o-mini")
    /// * `base_url` - API root; `/chat/completions` is appended
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        debug!(base_url = %base_url, "Creating new OpenAI-compatible client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http_retries: DEFAULT_HTTP_RETRIES,
        }
    }

    /// Creates a client from `OPENAI_API_KEY`, `OPENAI_BASE_URL` and
    /// `OPENAI_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> MuybridgeResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|e| ConfigError::new(format!("OPENAI_API_KEY not set: {}", e)))?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model, base_url))
    }

    /// Set how many times a transient transport failure is retried.
    pub fn with_http_retries(mut self, retries: usize) -> Self {
        self.http_retries = retries;
        self
    }

    /// The `/chat/completions` URL this client posts to.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends a chat-completions request, retrying transient failures.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send_chat(&self, request: &ChatRequest) -> MuybridgeResult<ChatResponse> {
        let strategy = ExponentialBackoff::from_millis(INITIAL_BACKOFF_MS)
            .factor(2)
            .max_delay(Duration::from_secs(MAX_BACKOFF_SECS))
            .map(jitter)
            .take(self.http_retries);

        let body = Retry::spawn(strategy, || async move {
            match self.post_once(request).await {
                Ok(body) => Ok(body),
                Err(e) if e.is_transient() => {
                    warn!(error = %e, "Chat request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await?;

        let response: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to parse chat response");
            JsonError::new(format!("Failed to parse chat response: {}", e))
        })?;

        debug!(choices = response.choices().len(), "Received chat response");
        Ok(response)
    }

    async fn post_once(&self, request: &ChatRequest) -> Result<String, HttpError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send chat request");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat endpoint returned error");
            return Err(HttpError::with_status(status.as_u16(), body));
        }

        response
            .text()
            .await
            .map_err(|e| HttpError::new(format!("Failed to read response body: {}", e)))
    }
}

#[async_trait]
impl MuybridgeDriver for OpenAICompatibleClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> MuybridgeResult<GenerateResponse> {
        self.generate_with_tools(req, &[]).await
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ToolUse for OpenAICompatibleClient {
    #[instrument(
        skip(self, req, tools),
        fields(provider = "openai", model = %self.model, tools = tools.len())
    )]
    async fn generate_with_tools(
        &self,
        req: &GenerateRequest,
        tools: &[ToolDefinition],
    ) -> MuybridgeResult<GenerateResponse> {
        let request = to_chat_request(req, &self.model, tools)?;
        let response = self.send_chat(&request).await?;
        from_chat_response(&response)
    }
}
