//! OpenAI Provider Implementation
//!
//! Provides integration with the OpenAI chat-completions API.
//!
//! # Features
//!
//! - Async HTTP communication with the OpenAI API
//! - Configurable endpoint and model
//! - JSON-object response mode for structured output
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::LlmError;
use rfi_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default OpenAI API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// OpenAI API provider
///
/// Communicates with the chat-completions endpoint, requesting JSON-object
/// output so responses can be parsed as structured analyses.
pub struct OpenAiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

const SYSTEM_MESSAGE: &str =
    "You are an expert at analyzing RFI responses and extracting structured information.";

impl OpenAiProvider {
    /// Create a new OpenAI provider with the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, DEFAULT_MODEL)
    }

    /// Create a provider against a custom endpoint and model
    ///
    /// Useful for OpenAI-compatible servers and for tests.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Generate a completion for the given prompt
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API key is missing or rejected
    /// - The model is not available
    /// - Network communication fails after all retries
    /// - The response body has an unexpected shape
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body =
                            response
                                .json::<ChatCompletionResponse>()
                                .await
                                .map_err(|e| {
                                    LlmError::InvalidResponse(format!(
                                        "Failed to parse response: {}",
                                        e
                                    ))
                                })?;

                        return body
                            .choices
                            .into_iter()
                            .next()
                            .map(|choice| choice.message.content)
                            .ok_or_else(|| {
                                LlmError::InvalidResponse("Response had no choices".to_string())
                            });
                    } else if status == reqwest::StatusCode::UNAUTHORIZED
                        || status == reqwest::StatusCode::FORBIDDEN
                    {
                        return Err(LlmError::Unauthorized(format!("HTTP {}", status)));
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async function; callers run this on a
        // blocking thread (spawn_blocking) from async contexts.
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Runtime error: {}", e)))?
            .block_on(async { self.generate(prompt).await })
    }
}
