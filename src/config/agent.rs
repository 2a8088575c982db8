//! LLM provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// LLM provider configuration (Groq)
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Groq API key
    pub groq_api_key: Option<String>,

    /// Model id used for all agent invocations
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Base URL for the provider API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl AgentConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Groq API key is present and non-empty
    pub fn has_api_key(&self) -> bool {
        self.groq_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate agent configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("AGENT__GROQ_API_KEY"));
        }
        if self.model_id.trim().is_empty() {
            return Err(ValidationError::EmptyModelId);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            model_id: default_model_id(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model_id() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_base_url() -> String {
    "https://api.groq.com".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    8000
}
