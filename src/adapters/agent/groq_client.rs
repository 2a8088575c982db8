//! Groq Agent Client - implementation of AgentClient for Groq's
//! OpenAI-compatible chat completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GroqConfig::new(api_key)
//!     .with_model("llama-3.3-70b-versatile")
//!     .with_base_url("https://api.groq.com");
//!
//! let client = GroqClient::new(config);
//! ```
//!
//! # Error mapping
//!
//! Structured HTTP status codes are preferred: 429 maps to a rate-limit
//! error, timeouts to a timeout error, and auth/5xx failures to a provider
//! API error. Only for opaque transport errors does the client fall back to
//! a best-effort substring heuristic over the error message.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::AgentConfig;
use crate::domain::DomainError;
use crate::ports::{AgentClient, AgentInvocation};

/// Configuration for the Groq client.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.groq.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl GroqConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.groq.com".to_string(),
            timeout: Duration::from_secs(120),
            temperature: 0.7,
            max_tokens: 8000,
        }
    }

    /// Builds a configuration from the application agent section.
    ///
    /// The API key must already have been validated as present.
    pub fn from_app_config(config: &AgentConfig) -> Self {
        Self {
            api_key: Secret::new(config.groq_api_key.clone().unwrap_or_default()),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Groq API client implementation.
pub struct GroqClient {
    config: GroqConfig,
    client: Client,
}

impl GroqClient {
    /// Creates a new Groq client with the given configuration.
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/openai/v1/chat/completions", self.config.base_url)
    }

    fn to_chat_request<'a>(
        &'a self,
        invocation: &'a AgentInvocation,
        prompt: &str,
    ) -> ChatRequest<'a> {
        ChatRequest {
            model: &invocation.model_id,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: invocation.system_message(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    async fn handle_error_status(
        &self,
        response: reqwest::Response,
    ) -> DomainError {
        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => DomainError::provider_api(format!(
                "Groq API authentication failed: HTTP {}",
                status.as_u16()
            )),
            429 => {
                let mut err = DomainError::rate_limited("API rate limit exceeded");
                if let Some(secs) = retry_after {
                    err = err.with_detail("retry_after_seconds", secs);
                }
                err
            }
            500..=599 => DomainError::provider_api(format!(
                "Groq API error: HTTP {}: {}",
                status.as_u16(),
                body
            ))
            .with_detail("api_response", body),
            _ => DomainError::provider_api(format!(
                "Groq API rejected request: HTTP {}: {}",
                status.as_u16(),
                body
            ))
            .with_detail("api_response", body),
        }
    }
}

#[async_trait]
impl AgentClient for GroqClient {
    async fn run(&self, invocation: &AgentInvocation, prompt: &str) -> Result<String, DomainError> {
        tracing::info!(agent = %invocation.name, model = %invocation.model_id, "Running agent");

        let request = self.to_chat_request(invocation, prompt);
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::timeout(self.config.timeout.as_secs())
                } else if e.is_connect() {
                    DomainError::provider_api(format!("Groq API connection failed: {}", e))
                } else {
                    classify_opaque_error(&e.to_string(), &invocation.name)
                }
            })?;

        if !response.status().is_success() {
            return Err(self.handle_error_status(response).await);
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            DomainError::agent_processing(
                format!("Failed to parse agent response: {}", e),
                &invocation.name,
            )
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                DomainError::agent_processing("Empty response from agent", &invocation.name)
            })?;

        tracing::info!(agent = %invocation.name, "Agent processing completed");
        Ok(content.trim().to_string())
    }
}

/// Best-effort classification of an opaque transport error message.
///
/// Messages mentioning the API, the provider, or rate limiting surface as a
/// provider API error; anything else is an agent processing failure.
fn classify_opaque_error(message: &str, agent_name: &str) -> DomainError {
    let lowered = message.to_lowercase();
    if lowered.contains("api") || lowered.contains("groq") || lowered.contains("rate") {
        DomainError::provider_api(format!("Groq API error: {}", message))
    } else {
        DomainError::agent_processing(
            format!("Agent processing failed: {}", message),
            agent_name,
        )
    }
}

// ----- Groq API Types -----

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
